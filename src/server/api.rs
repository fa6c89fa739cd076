use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::data::FeatureTable;
use crate::error::TeamError;
use crate::optimizer::{optimize_team, TeamScenario};

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub department: String,
    pub team_size: i64,
    pub total_budget: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub errors: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamErrorResponse {
    pub status: &'static str,
    pub kind: &'static str,
    pub message: String,
    /// Same text as `message`; the web console reads this key.
    pub detail: String,
}

impl From<&TeamError> for TeamErrorResponse {
    fn from(err: &TeamError) -> Self {
        let message = err.to_string();
        Self {
            status: "error",
            kind: err.kind(),
            detail: message.clone(),
            message,
        }
    }
}

#[derive(Debug, Error)]
pub enum GeneratePayloadError {
    #[error("{0}")]
    Parse(serde_json::Error),
    #[error("invalid team request")]
    Validation(ValidationErrorResponse),
    #[error(transparent)]
    Team(TeamError),
    #[error("failed to serialize team report: {0}")]
    Serialize(serde_json::Error),
}

pub fn health_payload(table: &FeatureTable) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "synergy-select",
        "version": env!("CARGO_PKG_VERSION"),
        "records": table.len(),
        "loaded_at": table.loaded_at().to_rfc3339(),
    }))
}

pub fn departments_payload(table: &FeatureTable) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "departments": table.department_summaries()
    }))
}

pub fn generate_payload(table: &FeatureTable, body: &str) -> Result<String, GeneratePayloadError> {
    let request: GenerateRequest =
        serde_json::from_str(body).map_err(GeneratePayloadError::Parse)?;
    validate_request(table, &request)?;

    let run_id = Uuid::new_v4();
    let span = info_span!("generate_team", %run_id, department = %request.department);
    let _entered = span.enter();
    info!(
        team_size = request.team_size,
        total_budget = request.total_budget,
        "received team request"
    );

    let scenario = TeamScenario {
        department: &request.department,
        team_size: request.team_size,
        total_budget: request.total_budget,
    };
    let report = optimize_team(table, &scenario).map_err(|err| {
        warn!(kind = err.kind(), error = %err, "team generation failed");
        GeneratePayloadError::Team(err)
    })?;

    serde_json::to_string_pretty(&report).map_err(GeneratePayloadError::Serialize)
}

fn validate_request(table: &FeatureTable, request: &GenerateRequest) -> Result<(), GeneratePayloadError> {
    let mut errors: Vec<ValidationIssue> = Vec::new();

    if request.department.trim().is_empty() {
        errors.push(ValidationIssue {
            field: "department",
            messages: vec!["must not be empty".to_string()],
        });
    } else if !table.is_known_department(&request.department) {
        errors.push(ValidationIssue {
            field: "department",
            messages: vec![format!("unknown department '{}'", request.department)],
        });
    }

    if request.team_size <= 0 {
        errors.push(ValidationIssue {
            field: "team_size",
            messages: vec!["must be a positive integer".to_string()],
        });
    }

    if !request.total_budget.is_finite() || request.total_budget < 0.0 {
        errors.push(ValidationIssue {
            field: "total_budget",
            messages: vec!["must be zero or greater".to_string()],
        });
    }

    if errors.is_empty() {
        return Ok(());
    }

    Err(GeneratePayloadError::Validation(ValidationErrorResponse {
        status: "error",
        message: "Validation failed",
        errors,
    }))
}
