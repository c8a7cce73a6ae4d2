//! JSON report parser for behaviour-driven test results.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{ElementType, Feature, Scenario, Status, Step, StepResult};

// ============================================================================
// Report JSON Schema Structs
// ============================================================================

/// Feature entry of a report file (the file itself is an array of these).
#[derive(Debug, Deserialize)]
pub struct JsonFeature {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<JsonTag>,
    #[serde(default)]
    pub elements: Vec<JsonElement>,
}

/// Scenario or background entry.
#[derive(Debug, Deserialize)]
pub struct JsonElement {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub keyword: String,
    #[serde(default, rename = "type")]
    pub element_type: String,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub tags: Vec<JsonTag>,
    #[serde(default)]
    pub steps: Vec<JsonStep>,
}

/// Tag reference.
#[derive(Debug, Deserialize)]
pub struct JsonTag {
    pub name: String,
}

/// Executed step.
#[derive(Debug, Deserialize)]
pub struct JsonStep {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub result: Option<JsonResult>,
    #[serde(default, rename = "match")]
    pub step_match: Option<JsonMatch>,
}

/// Step outcome.
#[derive(Debug, Deserialize)]
pub struct JsonResult {
    pub status: String,
    /// Duration in nanoseconds
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Step definition match.
#[derive(Debug, Deserialize)]
pub struct JsonMatch {
    #[serde(default)]
    pub location: Option<String>,
}

// ============================================================================
// Parsing Logic
// ============================================================================

/// Reads report files into domain features.
#[derive(Debug, Clone)]
pub struct ReportParser {
    json_files: Vec<PathBuf>,
}

impl ReportParser {
    pub fn new(json_files: Vec<PathBuf>) -> Self {
        ReportParser { json_files }
    }

    /// Parse every configured file, preserving file and feature order.
    ///
    /// Empty files are skipped. Fails when a file cannot be read or parsed, or
    /// when no file contributed any feature.
    pub fn parse_json_files(&self) -> AppResult<Vec<Feature>> {
        if self.json_files.is_empty() {
            return Err(AppError::ParseFailed("No JSON report files were provided".to_string()));
        }

        let mut features = Vec::new();
        for (json_file_no, path) in self.json_files.iter().enumerate() {
            let parsed = parse_json_file(path, json_file_no)?;
            info!("File {} contains {} features", path.display(), parsed.len());
            features.extend(parsed);
        }

        if features.is_empty() {
            return Err(AppError::ParseFailed(
                "None of the report files contained any features".to_string(),
            ));
        }

        Ok(features)
    }
}

/// Parse a single report file.
fn parse_json_file(path: &Path, json_file_no: usize) -> AppResult<Vec<Feature>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AppError::ParseFailed(format!("Failed to read {}: {}", path.display(), e))
    })?;

    if content.trim().is_empty() {
        warn!("File {} is empty, skipping", path.display());
        return Ok(Vec::new());
    }

    parse_features_from_str(&content, json_file_no)
        .map_err(|e| AppError::ParseFailed(format!("{}: {}", path.display(), e)))
}

/// Parse report JSON text into features.
pub fn parse_features_from_str(content: &str, json_file_no: usize) -> AppResult<Vec<Feature>> {
    let raw: Vec<JsonFeature> = serde_json::from_str(content)?;
    Ok(raw
        .into_iter()
        .map(|feature| convert_feature(feature, json_file_no))
        .collect())
}

fn convert_feature(feature: JsonFeature, json_file_no: usize) -> Feature {
    let elements = feature.elements.into_iter().map(convert_element).collect();

    Feature::new(
        feature.id,
        feature.name,
        feature.uri,
        feature.keyword,
        feature.description,
        feature.tags.into_iter().map(|t| t.name).collect(),
        elements,
        json_file_no,
    )
}

fn convert_element(element: JsonElement) -> Scenario {
    let steps = element.steps.into_iter().map(convert_step).collect();

    Scenario::new(
        element.id,
        element.name,
        element.keyword,
        ElementType::parse(&element.element_type),
        element.line,
        element.tags.into_iter().map(|t| t.name).collect(),
        steps,
    )
}

fn convert_step(step: JsonStep) -> Step {
    let result = match step.result {
        Some(result) => StepResult {
            status: parse_step_status(&result.status),
            duration: result.duration,
            error_message: result.error_message,
        },
        None => StepResult::new(Status::Undefined, 0),
    };

    Step::new(
        step.keyword,
        step.name,
        result,
        step.step_match.and_then(|m| m.location),
    )
}

/// Parse step status string to enum.
fn parse_step_status(status: &str) -> Status {
    Status::parse(status).unwrap_or_else(|| {
        warn!("Unknown step status: {}, treating as failed", status);
        Status::Failed
    })
}
