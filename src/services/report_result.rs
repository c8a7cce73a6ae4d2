//! Aggregation of one report run: features, tags, steps and totals.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::models::{Feature, ReportStats, StepObject, TagObject};

/// Format used for the build time shown on every page.
pub const BUILD_TIME_FORMAT: &str = "%d %b %Y, %H:%M";

/// Everything derived from the parsed features of one run.
///
/// Tags and steps are held in maps keyed by name and location. Their natural
/// order is therefore ascending by key, which is what every overview sees.
#[derive(Debug, Clone)]
pub struct ReportResult {
    features: Vec<Feature>,
    tags: BTreeMap<String, TagObject>,
    steps: BTreeMap<String, StepObject>,
    stats: ReportStats,
    build_time: DateTime<Utc>,
}

impl ReportResult {
    /// Aggregate features, stamping the result with the current time.
    pub fn new(features: Vec<Feature>) -> Self {
        Self::with_build_time(features, Utc::now())
    }

    /// Aggregate features with an explicit build time.
    pub fn with_build_time(features: Vec<Feature>, build_time: DateTime<Utc>) -> Self {
        let mut tags: BTreeMap<String, TagObject> = BTreeMap::new();
        let mut steps: BTreeMap<String, StepObject> = BTreeMap::new();

        for feature in &features {
            for scenario in feature.scenarios() {
                for tag in &scenario.tags {
                    tags.entry(tag.clone())
                        .or_insert_with(|| TagObject::new(tag.clone()))
                        .add_scenario(scenario.clone());
                }
            }
            for element in &feature.elements {
                for step in &element.steps {
                    if let Some(location) = &step.location {
                        steps
                            .entry(location.clone())
                            .or_insert_with(|| StepObject::new(location.clone()))
                            .add_occurrence(step);
                    }
                }
            }
        }

        let stats = ReportStats::from_features(&features);

        ReportResult {
            features,
            tags,
            steps,
            stats,
            build_time,
        }
    }

    /// Features in input order.
    pub fn all_features(&self) -> &[Feature] {
        &self.features
    }

    /// Tags ascending by name.
    pub fn all_tags(&self) -> impl Iterator<Item = &TagObject> {
        self.tags.values()
    }

    /// Steps ascending by location.
    pub fn all_steps(&self) -> impl Iterator<Item = &StepObject> {
        self.steps.values()
    }

    pub fn tag(&self, name: &str) -> Option<&TagObject> {
        self.tags.get(name)
    }

    pub fn stats(&self) -> &ReportStats {
        &self.stats
    }

    pub fn build_time(&self) -> String {
        self.build_time.format(BUILD_TIME_FORMAT).to_string()
    }
}
