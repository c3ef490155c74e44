//! Role gate for protected views. A single decision, no side effects, safe
//! to run on every render.

use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Hod,
    Principal,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Hod => "hod",
            Role::Principal => "principal",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hod" => Ok(Role::Hod),
            "principal" => Ok(Role::Principal),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

/// The signed-in user as supplied by the caller. Ownership stays with the
/// authentication layer; the gate only reads it.
#[derive(Clone, Debug)]
pub struct User {
    pub role: Role,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Dashboard,
}

impl Redirect {
    pub fn location(&self) -> &'static str {
        match self {
            Redirect::Login => "/login",
            Redirect::Dashboard => "/dashboard",
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Access<T> {
    Granted(T),
    Redirect(Redirect),
}

/// No user: redirect to login. A non-empty role restriction the user does
/// not meet: redirect to the dashboard. Otherwise the target renders
/// unchanged.
pub fn check_access<T>(
    user: Option<&User>,
    allowed_roles: Option<&[Role]>,
    target: T,
) -> Access<T> {
    let Some(user) = user else {
        return Access::Redirect(Redirect::Login);
    };

    match allowed_roles {
        Some(roles) if !roles.is_empty() && !roles.contains(&user.role) => {
            Access::Redirect(Redirect::Dashboard)
        }
        _ => Access::Granted(target),
    }
}
