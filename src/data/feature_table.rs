//! Read-only employee feature table. Loaded once, shared by every optimization run.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::data::employee::{EmployeeRecord, Role};

#[derive(Debug, Clone)]
pub struct FeatureTable {
    records: Vec<EmployeeRecord>,
    departments: BTreeSet<String>,
    loaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentSummary {
    pub department: String,
    pub headcount: usize,
    pub managers: usize,
    pub seniors: usize,
    pub juniors: usize,
}

impl FeatureTable {
    /// `departments` lists every department seen in the source, including ones
    /// with no active employee left.
    pub fn new(records: Vec<EmployeeRecord>, departments: BTreeSet<String>) -> Self {
        let mut departments = departments;
        departments.extend(records.iter().map(|record| record.department.clone()));
        Self {
            records,
            departments,
            loaded_at: Utc::now(),
        }
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn is_known_department(&self, department: &str) -> bool {
        self.departments.contains(department)
    }

    pub fn departments(&self) -> impl Iterator<Item = &str> {
        self.departments.iter().map(String::as_str)
    }

    /// Owned copy of one department's records, in table order.
    pub fn department_slice(&self, department: &str) -> Vec<EmployeeRecord> {
        self.records
            .iter()
            .filter(|record| record.department == department)
            .cloned()
            .collect()
    }

    pub fn department_summaries(&self) -> Vec<DepartmentSummary> {
        self.departments
            .iter()
            .map(|department| {
                let mut counts = [0_usize; 3];
                for record in self.records.iter().filter(|r| &r.department == department) {
                    counts[record.role.index()] += 1;
                }
                DepartmentSummary {
                    department: department.clone(),
                    headcount: counts.iter().sum(),
                    managers: counts[Role::Manager.index()],
                    seniors: counts[Role::Senior.index()],
                    juniors: counts[Role::Junior.index()],
                }
            })
            .collect()
    }
}
