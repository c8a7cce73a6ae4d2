//! Tag model grouping every scenario carrying one tag.

use serde::Serialize;

use super::{Scenario, Status, StatusCounter, file_name_component};

/// All scenarios of a report that carry the same tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagObject {
    /// Tag name, including the leading `@`
    pub name: String,
    pub scenarios: Vec<Scenario>,
    scenario_counter: StatusCounter,
    step_counter: StatusCounter,
    duration: u64,
}

impl TagObject {
    pub fn new(name: String) -> Self {
        TagObject {
            name,
            scenarios: Vec::new(),
            scenario_counter: StatusCounter::new(),
            step_counter: StatusCounter::new(),
            duration: 0,
        }
    }

    /// Add a tagged scenario and fold it into the statistics.
    pub fn add_scenario(&mut self, scenario: Scenario) {
        self.scenario_counter.increment(scenario.status());
        self.step_counter.merge(scenario.step_counter());
        self.duration += scenario.duration();
        self.scenarios.push(scenario);
    }

    /// Name of the page generated for this tag.
    pub fn report_file_name(&self) -> String {
        format!("report-tag_{}.html", file_name_component(&self.name))
    }

    pub fn status(&self) -> Status {
        self.scenario_counter.final_status()
    }

    pub fn passed_scenarios(&self) -> u32 {
        self.scenario_counter.value_for(Status::Passed)
    }

    pub fn failed_scenarios(&self) -> u32 {
        self.scenario_counter.total() - self.passed_scenarios()
    }

    pub fn step_counter(&self) -> &StatusCounter {
        &self.step_counter
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }
}
