//! Feature model representing one feature file of an input report.

use serde::Serialize;

use super::{Scenario, Status, StatusCounter, file_name_component};

/// A feature with its scenarios and derived statistics.
///
/// Statistics are computed once in [`Feature::new`]; the value is not
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub keyword: String,
    pub description: String,
    /// Tag names, including the leading `@`
    pub tags: Vec<String>,
    /// Scenarios and backgrounds in report order
    pub elements: Vec<Scenario>,
    /// Name of the page generated for this feature
    pub report_file_name: String,
    status: Status,
    scenario_counter: StatusCounter,
    step_counter: StatusCounter,
    duration: u64,
}

impl Feature {
    /// Create a new feature and compute its statistics.
    ///
    /// `json_file_no` is the index of the input file the feature came from and
    /// keeps report file names unique when several inputs share a uri.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        name: String,
        uri: String,
        keyword: String,
        description: String,
        tags: Vec<String>,
        elements: Vec<Scenario>,
        json_file_no: usize,
    ) -> Self {
        let scenario_counter: StatusCounter = elements
            .iter()
            .filter(|e| e.is_scenario())
            .map(Scenario::status)
            .collect();

        let mut step_counter = StatusCounter::new();
        for element in &elements {
            step_counter.merge(element.step_counter());
        }

        let duration = elements.iter().map(Scenario::duration).sum();
        let report_file_name = report_file_name(json_file_no, &uri, &id);

        Feature {
            id,
            name,
            uri,
            keyword,
            description,
            tags,
            status: scenario_counter.final_status(),
            elements,
            report_file_name,
            scenario_counter,
            step_counter,
            duration,
        }
    }

    /// Scenarios only, backgrounds excluded.
    pub fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.elements.iter().filter(|e| e.is_scenario())
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_passed(&self) -> bool {
        self.status.is_passed()
    }

    pub fn passed_scenarios(&self) -> u32 {
        self.scenario_counter.value_for(Status::Passed)
    }

    pub fn failed_scenarios(&self) -> u32 {
        self.scenario_counter.total() - self.passed_scenarios()
    }

    pub fn total_scenarios(&self) -> u32 {
        self.scenario_counter.total()
    }

    pub fn step_counter(&self) -> &StatusCounter {
        &self.step_counter
    }

    pub fn passed_steps(&self) -> u32 {
        self.step_counter.value_for(Status::Passed)
    }

    pub fn failed_steps(&self) -> u32 {
        self.step_counter.value_for(Status::Failed)
    }

    /// Total duration in nanoseconds
    pub fn duration(&self) -> u64 {
        self.duration
    }
}

/// Build a file-system safe page name for a feature.
fn report_file_name(json_file_no: usize, uri: &str, id: &str) -> String {
    let base = if uri.is_empty() { id } else { uri };
    format!(
        "report-feature_{}_{}.html",
        json_file_no,
        file_name_component(base)
    )
}
