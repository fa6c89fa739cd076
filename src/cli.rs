use std::path::PathBuf;

use tracing::error;

use crate::config::AppConfig;
use crate::data::validate::{validate_employee_csv, ValidationSeverity};
use crate::data::{load_feature_table, FeatureTable};
use crate::logging::init_tracing;
use crate::optimizer::generate_team;
use crate::server;

const USAGE: &str = "usage: synergy-select <serve|generate|departments|validate> [--data <csv>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Generate,
    Departments,
    Validate,
}

/// Positional arguments plus the flags every command understands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    pub positional: Vec<String>,
    pub data_path: Option<PathBuf>,
    pub as_table: bool,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("generate") => Some(Command::Generate),
        Some("departments") => Some(Command::Departments),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

/// Splits everything after the command name. `None` when `--data` has no value.
pub fn parse_invocation(args: &[String]) -> Option<Invocation> {
    let mut invocation = Invocation::default();
    let mut rest = args.iter().skip(2);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--table" => invocation.as_table = true,
            "--data" => invocation.data_path = Some(PathBuf::from(rest.next()?)),
            _ => invocation.positional.push(arg.clone()),
        }
    }
    Some(invocation)
}

pub fn run_with_args(args: &[String]) -> i32 {
    let Some(command) = parse_command(args) else {
        eprintln!("{USAGE}");
        return 2;
    };
    let Some(invocation) = parse_invocation(args) else {
        eprintln!("--data requires a path\n{USAGE}");
        return 2;
    };

    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return 1;
        }
    };
    if let Some(path) = &invocation.data_path {
        config.data_path = path.clone();
    }
    init_tracing(&config.log_filter);

    match command {
        Command::Serve => handle_serve(&config),
        Command::Generate => handle_generate(&config, &invocation),
        Command::Departments => handle_departments(&config),
        Command::Validate => handle_validate(&config, &invocation),
    }
}

fn load_table(config: &AppConfig) -> Option<FeatureTable> {
    match load_feature_table(&config.data_path) {
        Ok(table) => Some(table),
        Err(err) => {
            error!(error = %err, "failed to load employee data");
            eprintln!("failed to load employee data: {err}");
            None
        }
    }
}

fn handle_serve(config: &AppConfig) -> i32 {
    let Some(table) = load_table(config) else {
        return 1;
    };
    match server::run_server(&config.bind_addr, table) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_generate(config: &AppConfig, invocation: &Invocation) -> i32 {
    let [department, team_size, budget] = invocation.positional.as_slice() else {
        eprintln!("usage: synergy-select generate <department> <team_size> <total_budget> [--table]");
        return 2;
    };
    let Ok(team_size) = team_size.parse::<i64>() else {
        eprintln!("invalid team_size '{team_size}'");
        return 2;
    };
    let Ok(budget) = budget.parse::<f64>() else {
        eprintln!("invalid total_budget '{budget}'");
        return 2;
    };

    let Some(table) = load_table(config) else {
        return 1;
    };
    let report = match generate_team(&table, department, team_size, budget) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("team generation failed ({}): {err}", err.kind());
            return 1;
        }
    };

    if invocation.as_table {
        println!("employee_id\trole\tjob_title\tsalary\tsynergy");
        for member in &report.members {
            println!(
                "{}\t{}\t{}\t{:.2}\t{:.2}",
                member.employee_id, member.role, member.job_title, member.salary, member.synergy_score
            );
        }
        println!(
            "total_cost={:.2}\tbudget_remaining={:.2}\tsynergy_index={:.2}\tdiversity_balanced={}",
            report.total_cost, report.budget_remaining, report.synergy_index, report.diversity_balanced
        );
        return 0;
    }

    match serde_json::to_string_pretty(&report) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize team report: {err}");
            1
        }
    }
}

fn handle_departments(config: &AppConfig) -> i32 {
    let Some(table) = load_table(config) else {
        return 1;
    };
    match serde_json::to_string_pretty(&table.department_summaries()) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize departments: {err}");
            1
        }
    }
}

fn handle_validate(config: &AppConfig, invocation: &Invocation) -> i32 {
    let path = invocation
        .positional
        .first()
        .cloned()
        .unwrap_or_else(|| config.data_path.to_string_lossy().into_owned());

    let report = match validate_employee_csv(&path) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("validation failed: {err}");
            return 1;
        }
    };

    for diagnostic in &report.diagnostics {
        eprintln!("- {diagnostic}");
    }
    if report.has_errors() {
        eprintln!(
            "validation failed: {} error(s), {} warning(s)",
            report.count(ValidationSeverity::Error),
            report.count(ValidationSeverity::Warning)
        );
        return 1;
    }

    println!(
        "validation passed: {path} (rows={}, active={}, warnings={})",
        report.rows,
        report.active_rows,
        report.count(ValidationSeverity::Warning)
    );
    0
}
