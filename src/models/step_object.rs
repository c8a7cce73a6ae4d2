//! Step definition usage aggregated across all scenarios.

use serde::Serialize;

use super::{Status, StatusCounter, Step};

/// Every execution of one step definition, keyed by its match location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepObject {
    /// Step definition location, e.g. `AccountSteps.java:24`
    pub location: String,
    occurrences: u32,
    total_duration: u64,
    max_duration: u64,
    status_counter: StatusCounter,
}

impl StepObject {
    pub fn new(location: String) -> Self {
        StepObject {
            location,
            occurrences: 0,
            total_duration: 0,
            max_duration: 0,
            status_counter: StatusCounter::new(),
        }
    }

    /// Record one execution of this step definition.
    pub fn add_occurrence(&mut self, step: &Step) {
        self.occurrences += 1;
        self.total_duration += step.duration();
        self.max_duration = self.max_duration.max(step.duration());
        self.status_counter.increment(step.status());
    }

    pub fn occurrences(&self) -> u32 {
        self.occurrences
    }

    pub fn total_duration(&self) -> u64 {
        self.total_duration
    }

    pub fn max_duration(&self) -> u64 {
        self.max_duration
    }

    pub fn average_duration(&self) -> u64 {
        if self.occurrences == 0 {
            0
        } else {
            self.total_duration / u64::from(self.occurrences)
        }
    }

    pub fn status(&self) -> Status {
        self.status_counter.final_status()
    }

    pub fn status_counter(&self) -> &StatusCounter {
        &self.status_counter
    }
}
