use planner_payloads::{Acknowledgment, Category, ProgramType, Submission};
use reqwest::{Client, StatusCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Please fill all fields correctly")]
    IncompleteFields,

    #[error("Submission rejected: {0}")]
    Rejected(StatusCode),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Local state of the planning form. Selections start empty, matching the
/// `-- Select --` option of the dropdowns.
#[derive(Default, Debug, Clone)]
pub struct ProgramPlanForm {
    category: Option<Category>,
    program_type: Option<ProgramType>,
    count: u32,
}

impl ProgramPlanForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unknown or empty input clears the selection.
    pub fn set_category(&mut self, value: &str) {
        self.category = value.parse().ok();
    }

    pub fn set_program_type(&mut self, value: &str) {
        self.program_type = value.parse().ok();
    }

    /// Non-numeric or negative input coerces to 0, which [`validate`]
    /// rejects.
    ///
    /// [`validate`]: ProgramPlanForm::validate
    pub fn set_count(&mut self, value: &str) {
        self.count = value.trim().parse().unwrap_or(0);
    }

    pub fn validate(&self) -> Result<Submission, FormError> {
        match (self.category, self.program_type, self.count) {
            (Some(category), Some(program_type), count) if count > 0 => Ok(Submission {
                category,
                program_type,
                count,
            }),
            _ => Err(FormError::IncompleteFields),
        }
    }

    /// Issues at most one POST per call; when validation fails nothing is
    /// sent. A non-2xx status or a transport failure is an error, never a
    /// silent success.
    pub async fn submit(&self, http: &Client, base_url: &str) -> Result<Acknowledgment, FormError> {
        let submission = self.validate()?;

        let response = http
            .post(format!("{base_url}/api/program-counts"))
            .json(&submission)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FormError::Rejected(response.status()));
        }

        Ok(response.json().await?)
    }
}

/// The blocking alert shown to the user once a submit attempt settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    ValidationFailed,
    Submitted,
    SubmissionFailed,
}

impl Notification {
    pub fn for_outcome(outcome: &Result<Acknowledgment, FormError>) -> Self {
        match outcome {
            Ok(_) => Notification::Submitted,
            Err(FormError::IncompleteFields) => Notification::ValidationFailed,
            Err(_) => Notification::SubmissionFailed,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notification::ValidationFailed => "Please fill all fields correctly",
            Notification::Submitted => "Submitted",
            Notification::SubmissionFailed => "Submission failed",
        }
    }
}
