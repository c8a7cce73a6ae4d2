//! Scenario model representing one executed scenario (or background) of a feature.

use serde::Serialize;

use super::{Status, StatusCounter, Step};

/// Kind of feature element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Scenario,
    Background,
}

impl ElementType {
    /// Parse from the `type` field of an element; anything but `background` is a scenario.
    pub fn parse(s: &str) -> Self {
        match s {
            "background" => Self::Background,
            _ => Self::Scenario,
        }
    }
}

/// A scenario with its steps and derived statistics.
///
/// Statistics are computed once in [`Scenario::new`]; the value is not
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub keyword: String,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub line: u32,
    /// Tag names, including the leading `@`
    pub tags: Vec<String>,
    pub steps: Vec<Step>,
    status: Status,
    step_counter: StatusCounter,
    duration: u64,
}

impl Scenario {
    /// Create a new scenario and compute its statistics.
    pub fn new(
        id: String,
        name: String,
        keyword: String,
        element_type: ElementType,
        line: u32,
        tags: Vec<String>,
        steps: Vec<Step>,
    ) -> Self {
        let step_counter: StatusCounter = steps.iter().map(Step::status).collect();
        let duration = steps.iter().map(Step::duration).sum();

        Scenario {
            id,
            name,
            keyword,
            element_type,
            line,
            tags,
            status: step_counter.final_status(),
            steps,
            step_counter,
            duration,
        }
    }

    pub fn is_scenario(&self) -> bool {
        self.element_type == ElementType::Scenario
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn step_counter(&self) -> &StatusCounter {
        &self.step_counter
    }

    /// Total duration in nanoseconds
    pub fn duration(&self) -> u64 {
        self.duration
    }
}
