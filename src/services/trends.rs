//! Trends aggregator: persisted build history merged with the current run.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::{ReportStats, Trend, Trends};
use crate::pages::PageContext;

/// Persisted layout: one array per metric, index-aligned by build.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColumnarTrends {
    build_numbers: Vec<String>,
    passed_features: Vec<u32>,
    failed_features: Vec<u32>,
    passed_scenarios: Vec<u32>,
    failed_scenarios: Vec<u32>,
    passed_steps: Vec<u32>,
    failed_steps: Vec<u32>,
    skipped_steps: Vec<u32>,
    pending_steps: Vec<u32>,
    undefined_steps: Vec<u32>,
    durations: Vec<u64>,
}

impl From<&Trends> for ColumnarTrends {
    fn from(trends: &Trends) -> Self {
        let builds = trends.builds();
        let column = |f: fn(&Trend) -> u32| builds.iter().map(f).collect::<Vec<u32>>();

        ColumnarTrends {
            build_numbers: builds.iter().map(|t| t.build_number.clone()).collect(),
            passed_features: column(|t| t.passed_features),
            failed_features: column(|t| t.failed_features),
            passed_scenarios: column(|t| t.passed_scenarios),
            failed_scenarios: column(|t| t.failed_scenarios),
            passed_steps: column(|t| t.passed_steps),
            failed_steps: column(|t| t.failed_steps),
            skipped_steps: column(|t| t.skipped_steps),
            pending_steps: column(|t| t.pending_steps),
            undefined_steps: column(|t| t.undefined_steps),
            durations: builds.iter().map(|t| t.duration).collect(),
        }
    }
}

impl ColumnarTrends {
    fn into_trends(self) -> Result<Trends, String> {
        let len = self.build_numbers.len();
        let lengths = [
            self.passed_features.len(),
            self.failed_features.len(),
            self.passed_scenarios.len(),
            self.failed_scenarios.len(),
            self.passed_steps.len(),
            self.failed_steps.len(),
            self.skipped_steps.len(),
            self.pending_steps.len(),
            self.undefined_steps.len(),
            self.durations.len(),
        ];
        if lengths.iter().any(|l| *l != len) {
            return Err(format!(
                "trend columns differ in length: {} build numbers, columns {:?}",
                len, lengths
            ));
        }

        Ok((0..len)
            .map(|i| Trend {
                build_number: self.build_numbers[i].clone(),
                passed_features: self.passed_features[i],
                failed_features: self.failed_features[i],
                passed_scenarios: self.passed_scenarios[i],
                failed_scenarios: self.failed_scenarios[i],
                passed_steps: self.passed_steps[i],
                failed_steps: self.failed_steps[i],
                skipped_steps: self.skipped_steps[i],
                pending_steps: self.pending_steps[i],
                undefined_steps: self.undefined_steps[i],
                duration: self.durations[i],
            })
            .collect())
    }
}

/// Load a persisted trends record.
///
/// A missing file is the first run and yields an empty record. Besides the
/// column layout, a `{"builds": [...]}` list of entries is also read.
pub fn load_trends(path: &Path) -> AppResult<Trends> {
    if !path.exists() {
        info!("No trends file at {}, starting a new history", path.display());
        return Ok(Trends::new());
    }

    let load_error = |message: String| AppError::TrendsLoad {
        path: path.display().to_string(),
        message,
    };

    let content = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
    let trends = parse_trends(&content).map_err(load_error)?;

    debug!("Loaded {} builds from {}", trends.len(), path.display());
    Ok(trends)
}

fn parse_trends(content: &str) -> Result<Trends, String> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(|e| e.to_string())?;

    if value.get("builds").is_some() {
        serde_json::from_str::<Trends>(content).map_err(|e| format!("builds layout: {}", e))
    } else {
        serde_json::from_str::<ColumnarTrends>(content)
            .map_err(|e| format!("column layout: {}", e))?
            .into_trends()
    }
}

/// Write a trends record in the column layout, creating the parent
/// directory when needed.
pub fn save_trends(path: &Path, trends: &Trends) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::FileSystem(format!("Failed to create trends directory: {}", e))
        })?;
    }

    let json = serde_json::to_string_pretty(&ColumnarTrends::from(trends))?;
    std::fs::write(path, json)
        .map_err(|e| AppError::FileSystem(format!("Failed to write trends file: {}", e)))?;

    info!("Saved {} builds to {}", trends.len(), path.display());
    Ok(())
}

/// Append the current run as the newest build.
pub fn append_current_build(mut trends: Trends, build_number: &str, stats: &ReportStats) -> Trends {
    trends.add_build(Trend::from_stats(build_number, stats));
    trends
}

/// Keep only the newest `max_builds` builds; `max_builds <= 0` keeps all.
pub fn enforce_limit(mut trends: Trends, max_builds: i64) -> Trends {
    trends.limit_items(max_builds);
    trends
}

/// Derive the per-build series, oldest first, all of equal length.
pub fn build_context(trends: &Trends) -> PageContext {
    let builds = trends.builds();
    let series = |f: fn(&Trend) -> u32| builds.iter().map(f).collect::<Vec<u32>>();

    let mut context = PageContext::new();
    context.put(
        "buildNumbers",
        builds.iter().map(|t| t.build_number.clone()).collect::<Vec<_>>(),
    );
    context.put("passedFeatures", series(|t| t.passed_features));
    context.put("failedFeatures", series(|t| t.failed_features));
    context.put("passedScenarios", series(|t| t.passed_scenarios));
    context.put("failedScenarios", series(|t| t.failed_scenarios));
    context.put("passedSteps", series(|t| t.passed_steps));
    context.put("failedSteps", series(|t| t.failed_steps));
    context.put("skippedSteps", series(|t| t.skipped_steps));
    context.put("pendingSteps", series(|t| t.pending_steps));
    context.put("undefinedSteps", series(|t| t.undefined_steps));
    context.put(
        "durations",
        builds.iter().map(|t| t.duration).collect::<Vec<u64>>(),
    );
    context
}
