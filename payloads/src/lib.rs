//! # Payloads
//!
//! Wire structures shared between the planning client and the backend.
//!
//! ## Overall Payloads
//!
//! Requests/responses between the frontend and backend.
//!
//! ### Program Counts
//! To backend
//! - JSON, activity category + program type + planned count
//! - `POST /api/program-counts`, `Content-Type: application/json`
//!
//! From backend
//! - 200 + fixed acknowledgment message, no echo of the payload
//!
//! Category and program type travel as their display strings (`FDP`,
//! `Seminar`, `Workshop`, `Online`, `Offline`). Anything else is rejected
//! before a submission can be built, so a decoded [`Submission`] is always
//! well formed.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Acknowledgment text returned for every parseable submission.
pub const ACK_MESSAGE: &str = "✅ Data received successfully";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "FDP")]
    Fdp,
    Seminar,
    Workshop,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgramType {
    Online,
    Offline,
}

/// One planned program count, built client-side and discarded once the
/// request resolves.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub category: Category,
    #[serde(rename = "programType")]
    pub program_type: ProgramType,
    pub count: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgment {
    pub message: String,
}

impl Acknowledgment {
    pub fn received() -> Self {
        Self {
            message: ACK_MESSAGE.to_string(),
        }
    }
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fdp => "FDP",
            Category::Seminar => "Seminar",
            Category::Workshop => "Workshop",
        }
    }
}

impl ProgramType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramType::Online => "Online",
            ProgramType::Offline => "Offline",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FDP" => Ok(Category::Fdp),
            "Seminar" => Ok(Category::Seminar),
            "Workshop" => Ok(Category::Workshop),
            _ => Err(()),
        }
    }
}

impl FromStr for ProgramType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Online" => Ok(ProgramType::Online),
            "Offline" => Ok(ProgramType::Offline),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_uses_wire_field_names() {
        let submission = Submission {
            category: Category::Fdp,
            program_type: ProgramType::Online,
            count: 5,
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"category": "FDP", "programType": "Online", "count": 5})
        );
    }

    #[test]
    fn submission_round_trips() {
        let body = r#"{"category":"Workshop","programType":"Offline","count":2}"#;
        let submission: Submission = serde_json::from_str(body).unwrap();

        assert_eq!(submission.category, Category::Workshop);
        assert_eq!(submission.program_type, ProgramType::Offline);
        assert_eq!(submission.count, 2);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!("Conference".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
        assert!("fdp".parse::<Category>().is_err());

        let body = r#"{"category":"Conference","programType":"Online","count":1}"#;
        assert!(serde_json::from_str::<Submission>(body).is_err());
    }

    #[test]
    fn program_type_parses_display_strings() {
        for value in [ProgramType::Online, ProgramType::Offline] {
            assert_eq!(value.to_string().parse::<ProgramType>().unwrap(), value);
        }
    }
}
