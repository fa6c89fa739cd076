#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use synergy_select::data::{read_feature_table, FeatureTable};

pub const HEADER: &str = "Employee_ID,Department,Gender,Age,Job_Title,Years_At_Company,Education_Level,Performance_Score,Monthly_Salary,Work_Hours_Per_Week,Projects_Handled,Overtime_Hours,Sick_Days,Training_Hours,Promotions,Resigned";

/// Accumulates HR export rows. Secondary metrics vary with the id so scores differ.
#[derive(Debug, Default)]
pub struct CsvFixture {
    body: String,
    next_id: u64,
}

impl CsvFixture {
    pub fn new() -> Self {
        Self {
            body: format!("{HEADER}\n"),
            next_id: 1,
        }
    }

    pub fn employee(mut self, department: &str, job_title: &str, gender: &str, salary: f64) -> Self {
        self.push(department, job_title, gender, salary, false);
        self
    }

    pub fn resigned(mut self, department: &str, job_title: &str, gender: &str, salary: f64) -> Self {
        self.push(department, job_title, gender, salary, true);
        self
    }

    pub fn repeat(
        mut self,
        count: usize,
        department: &str,
        job_title: &str,
        gender: &str,
        salary: impl Fn(usize) -> f64,
    ) -> Self {
        for n in 0..count {
            self.push(department, job_title, gender, salary(n), false);
        }
        self
    }

    fn push(&mut self, department: &str, job_title: &str, gender: &str, salary: f64, resigned: bool) {
        let id = self.next_id;
        self.next_id += 1;
        let _ = writeln!(
            self.body,
            "{id},{department},{gender},{age},{job_title},{years},Bachelor,{perf},{salary},40,{projects},{overtime},{sick},{training},{promotions},{resigned}",
            age = 25 + id % 30,
            years = id % 9,
            perf = 1 + id % 5,
            projects = 5 + id % 17,
            overtime = id % 25,
            sick = id % 6,
            training = (id * 7) % 60,
            promotions = id % 3,
            resigned = if resigned { "True" } else { "False" },
        );
    }

    pub fn csv(&self) -> &str {
        &self.body
    }

    pub fn table(&self) -> FeatureTable {
        read_feature_table(self.body.as_bytes()).expect("fixture csv should parse")
    }

    pub fn write_temp(&self, name: &str) -> PathBuf {
        let path = unique_temp_path(name, "csv");
        fs::write(&path, &self.body).expect("fixture should be written");
        path
    }
}

pub fn unique_temp_path(name: &str, extension: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("synergy-select-{name}-{stamp}.{extension}"))
}

/// 3 managers, 6 seniors and 20 juniors with distinct, rising salaries.
pub fn engineering_department() -> CsvFixture {
    CsvFixture::new()
        .repeat(3, "Engineering", "Manager", "Male", |n| 9000.0 + 500.0 * n as f64)
        .repeat(6, "Engineering", "Engineer", "Female", |n| 7000.0 + 100.0 * n as f64)
        .repeat(10, "Engineering", "Developer", "Male", |n| 4000.0 + 100.0 * n as f64)
        .repeat(10, "Engineering", "Analyst", "Female", |n| 4050.0 + 100.0 * n as f64)
}

/// Cheapest 2/4/6 mix of [`engineering_department`].
pub const ENGINEERING_MINIMUM_COST: f64 = 18_500.0 + 28_600.0 + 24_750.0;
