use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Role bucket used by the 1:2:3 quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Role {
    Manager,
    Senior,
    Junior,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Manager, Role::Senior, Role::Junior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "Manager",
            Self::Senior => "Senior",
            Self::Junior => "Junior",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Self::Manager => "managers",
            Self::Senior => "seniors",
            Self::Junior => "juniors",
        }
    }

    /// Position of this role in per-role arrays.
    pub fn index(self) -> usize {
        match self {
            Self::Manager => 0,
            Self::Senior => 1,
            Self::Junior => 2,
        }
    }

    /// Maps an HR job title onto a role bucket. Unrecognised titles land in `Junior`.
    pub fn from_job_title(title: &str) -> Self {
        match title.trim().to_ascii_lowercase().as_str() {
            "manager" => Self::Manager,
            "consultant" | "engineer" | "specialist" => Self::Senior,
            _ => Self::Junior,
        }
    }

    pub fn is_known_job_title(title: &str) -> bool {
        matches!(
            title.trim().to_ascii_lowercase().as_str(),
            "manager"
                | "consultant"
                | "engineer"
                | "specialist"
                | "developer"
                | "analyst"
                | "technician"
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One employee of the feature table, with department-relative metrics already derived.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub id: u64,
    pub department: String,
    pub job_title: String,
    pub role: Role,
    pub monthly_salary: f64,
    pub gender: String,
    pub education_level: String,
    pub performance_score: f64,
    /// Performance-to-cost ratio, min-max normalized within the department.
    pub pcr: f64,
    pub velocity: f64,
    pub reliability: f64,
    pub capacity: f64,
    pub training_hours: f64,
    pub promotions: f64,
    /// Percentile rank of `pcr` within the department.
    pub cost_efficiency_rank: f64,
}

/// One row of the raw HR export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEmployeeRow {
    #[serde(rename = "Employee_ID")]
    pub employee_id: u64,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Gender", default)]
    pub gender: String,
    #[serde(rename = "Job_Title", default)]
    pub job_title: String,
    #[serde(rename = "Years_At_Company", default, deserialize_with = "deserialize_metric")]
    pub years_at_company: f64,
    #[serde(rename = "Education_Level", default)]
    pub education_level: String,
    #[serde(rename = "Performance_Score", default, deserialize_with = "deserialize_metric")]
    pub performance_score: f64,
    #[serde(rename = "Monthly_Salary", deserialize_with = "deserialize_metric")]
    pub monthly_salary: f64,
    #[serde(rename = "Work_Hours_Per_Week", default, deserialize_with = "deserialize_metric")]
    pub work_hours_per_week: f64,
    #[serde(rename = "Projects_Handled", default, deserialize_with = "deserialize_metric")]
    pub projects_handled: f64,
    #[serde(rename = "Overtime_Hours", default, deserialize_with = "deserialize_metric")]
    pub overtime_hours: f64,
    #[serde(rename = "Sick_Days", default, deserialize_with = "deserialize_metric")]
    pub sick_days: f64,
    #[serde(rename = "Training_Hours", default, deserialize_with = "deserialize_metric")]
    pub training_hours: f64,
    #[serde(rename = "Promotions", default, deserialize_with = "deserialize_metric")]
    pub promotions: f64,
    #[serde(rename = "Resigned", default, deserialize_with = "deserialize_flag")]
    pub resigned: bool,
}

/// Numeric cell where a blank counts as 0.
fn deserialize_metric<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|err| serde::de::Error::custom(format!("invalid number '{trimmed}': {err}")))
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid boolean flag '{other}'"
        ))),
    }
}
