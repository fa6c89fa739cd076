use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::Read;

use crate::data::employee::{RawEmployeeRow, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub rows: usize,
    pub active_rows: usize,
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.count(ValidationSeverity::Error) > 0
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

pub fn validate_employee_csv(path: &str) -> Result<ValidationReport, String> {
    let file = File::open(path).map_err(|err| format!("unable to read '{path}': {err}"))?;
    validate_employee_reader(file)
}

/// Data-quality pass over a raw HR export. Rows are checked independently;
/// a malformed row is reported rather than aborting the whole pass.
pub fn validate_employee_reader<R: Read>(reader: R) -> Result<ValidationReport, String> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut report = ValidationReport::default();
    let mut seen_ids = HashSet::new();
    let mut managers_by_department: BTreeMap<String, usize> = BTreeMap::new();

    for (index, result) in csv_reader.deserialize::<RawEmployeeRow>().enumerate() {
        report.rows += 1;
        let context = format!("row[{index}]");
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                report.push(ValidationSeverity::Error, context, format!("unparsable row: {err}"));
                continue;
            }
        };

        if !seen_ids.insert(row.employee_id) {
            report.push(
                ValidationSeverity::Error,
                format!("{context}.Employee_ID"),
                format!("duplicate id {}", row.employee_id),
            );
        }
        if row.department.trim().is_empty() {
            report.push(
                ValidationSeverity::Error,
                format!("{context}.Department"),
                "department must not be empty",
            );
        }
        if !(row.monthly_salary > 0.0) {
            report.push(
                ValidationSeverity::Error,
                format!("{context}.Monthly_Salary"),
                format!("salary must be positive, got {}", row.monthly_salary),
            );
        }
        if !Role::is_known_job_title(&row.job_title) {
            report.push(
                ValidationSeverity::Warning,
                format!("{context}.Job_Title"),
                format!("unrecognised job title '{}', treated as Junior", row.job_title),
            );
        }
        for (field, value) in [
            ("Years_At_Company", row.years_at_company),
            ("Work_Hours_Per_Week", row.work_hours_per_week),
            ("Projects_Handled", row.projects_handled),
            ("Overtime_Hours", row.overtime_hours),
            ("Sick_Days", row.sick_days),
            ("Training_Hours", row.training_hours),
            ("Promotions", row.promotions),
        ] {
            if value < 0.0 {
                report.push(
                    ValidationSeverity::Warning,
                    format!("{context}.{field}"),
                    format!("negative value {value}"),
                );
            }
        }

        if row.resigned {
            continue;
        }
        report.active_rows += 1;
        let managers = managers_by_department.entry(row.department.clone()).or_default();
        if Role::from_job_title(&row.job_title) == Role::Manager {
            *managers += 1;
        }
    }

    for (department, managers) in managers_by_department {
        if managers == 0 {
            report.push(
                ValidationSeverity::Info,
                format!("department '{department}'"),
                "no active manager candidates; every team request will fail",
            );
        }
    }

    Ok(report)
}
