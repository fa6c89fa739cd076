//! Build the feature table from an HR CSV export.
//! Metrics that compare employees (PCR, cost-efficiency rank) are derived per department.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

use crate::data::employee::{EmployeeRecord, RawEmployeeRow, Role};
use crate::data::feature_table::FeatureTable;
use crate::scoring::normalize::{min_max, percentile_ranks};

pub const DEFAULT_EMPLOYEE_DATA_PATH: &str = "data/employees.sample.csv";

/// Weekly hours treated as full capacity.
const STANDARD_WEEK_HOURS: f64 = 40.0;
/// Overtime beyond this many hours starts eating into capacity.
const OVERTIME_ALLOWANCE_HOURS: f64 = 20.0;
const OVERTIME_PENALTY_PER_HOUR: f64 = 0.05;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open employee data '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse employee data: {0}")]
    Csv(#[from] csv::Error),
}

pub fn load_feature_table(path: impl AsRef<Path>) -> Result<FeatureTable, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_feature_table(file)?;
    if table.is_empty() {
        warn!(path = %path.display(), "employee data has no active employees");
    }
    info!(
        path = %path.display(),
        records = table.len(),
        "loaded employee feature table"
    );
    Ok(table)
}

pub fn read_feature_table<R: Read>(reader: R) -> Result<FeatureTable, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let row: RawEmployeeRow = result?;
        rows.push(row);
    }
    Ok(build_feature_table(rows))
}

/// Filters out resigned and unpaid rows, then derives department-relative metrics.
pub fn build_feature_table(rows: Vec<RawEmployeeRow>) -> FeatureTable {
    let departments: BTreeSet<String> = rows.iter().map(|row| row.department.clone()).collect();

    let mut by_department: BTreeMap<String, Vec<RawEmployeeRow>> = BTreeMap::new();
    let mut resigned = 0_usize;
    for row in rows {
        if row.resigned {
            resigned += 1;
            continue;
        }
        if !(row.monthly_salary > 0.0) {
            warn!(
                employee_id = row.employee_id,
                salary = row.monthly_salary,
                "dropping employee with non-positive salary"
            );
            continue;
        }
        by_department
            .entry(row.department.clone())
            .or_default()
            .push(row);
    }
    if resigned > 0 {
        info!(resigned, "skipped resigned employees");
    }

    let groups: Vec<Vec<RawEmployeeRow>> = by_department.into_values().collect();
    let records: Vec<EmployeeRecord> = groups
        .into_par_iter()
        .map(derive_department_features)
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    FeatureTable::new(records, departments)
}

fn derive_department_features(rows: Vec<RawEmployeeRow>) -> Vec<EmployeeRecord> {
    let raw_pcr: Vec<f64> = rows
        .iter()
        .map(|row| row.performance_score / row.monthly_salary)
        .collect();
    let pcr = min_max(&raw_pcr);
    let cost_efficiency = percentile_ranks(&pcr);

    rows.into_iter()
        .zip(pcr)
        .zip(cost_efficiency)
        .map(|((row, pcr), cost_efficiency_rank)| EmployeeRecord {
            id: row.employee_id,
            role: Role::from_job_title(&row.job_title),
            velocity: velocity(row.projects_handled, row.years_at_company),
            reliability: reliability(row.sick_days),
            capacity: capacity(row.work_hours_per_week, row.overtime_hours),
            department: row.department,
            job_title: row.job_title,
            monthly_salary: row.monthly_salary,
            gender: row.gender,
            education_level: row.education_level,
            performance_score: row.performance_score,
            pcr,
            training_hours: row.training_hours,
            promotions: row.promotions,
            cost_efficiency_rank,
        })
        .collect()
}

/// Projects per year at the company; a zero tenure counts as one year.
pub fn velocity(projects_handled: f64, years_at_company: f64) -> f64 {
    let tenure = if years_at_company > 0.0 {
        years_at_company
    } else {
        1.0
    };
    projects_handled / tenure
}

pub fn reliability(sick_days: f64) -> f64 {
    1.0 / (1.0 + sick_days)
}

pub fn capacity(work_hours_per_week: f64, overtime_hours: f64) -> f64 {
    let base = work_hours_per_week / STANDARD_WEEK_HOURS;
    let penalty = (overtime_hours - OVERTIME_ALLOWANCE_HOURS).max(0.0) * OVERTIME_PENALTY_PER_HOUR;
    (base - penalty).max(0.0)
}
