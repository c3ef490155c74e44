//! # Frontend Specifications
//!
//! Client logic/relevant structures for the planning form.
//!
//! ## Flow
//!
//! - HoD opens the planning view; the access gate runs before anything renders
//! - Picks an activity category, a program type, and a planned count
//! - Submit validates locally first, then posts the JSON submission
//! - One blocking notification reports the outcome
//!
//! ## Access
//!
//! - No signed-in user: bounce to the login view
//! - Signed in but role not allowed for the view: bounce to the dashboard
//! - The current user is always passed in by the caller, never read from
//!   ambient state

pub mod config;
pub mod form;
pub mod gate;
