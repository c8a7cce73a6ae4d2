//! Step model representing a single executed step of a scenario.

use serde::Serialize;

use super::Status;

/// Outcome of one step execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepResult {
    /// Execution status
    pub status: Status,
    /// Execution duration in nanoseconds
    pub duration: u64,
    /// Failure message (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl StepResult {
    pub fn new(status: Status, duration: u64) -> Self {
        StepResult {
            status,
            duration,
            error_message: None,
        }
    }
}

/// A step as reported by the test framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Gherkin keyword (Given/When/Then/And/But)
    pub keyword: String,
    /// Step text
    pub name: String,
    /// Execution result
    pub result: StepResult,
    /// Location of the matching step definition (e.g. `Steps.java:12`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Step {
    /// Create a new step.
    pub fn new(keyword: String, name: String, result: StepResult, location: Option<String>) -> Self {
        Step {
            keyword,
            name,
            result,
            location,
        }
    }

    pub fn status(&self) -> Status {
        self.result.status
    }

    pub fn duration(&self) -> u64 {
        self.result.duration
    }
}
