pub mod budget;
pub mod diversity;
pub mod quota;
pub mod report;
pub mod team_state;

use tracing::info;

use crate::data::FeatureTable;
use crate::error::TeamError;
use crate::optimizer::budget::repair_budget;
use crate::optimizer::diversity::{rebalance_diversity, DiversityOutcome};
use crate::optimizer::quota::{select_by_quota, RoleQuota};
use crate::optimizer::report::{assemble_report, TeamReport};
use crate::optimizer::team_state::TeamState;
use crate::scoring::score_department;

#[derive(Debug, Clone)]
pub struct TeamScenario<'a> {
    pub department: &'a str,
    /// Signed so non-positive sizes surface as validation failures rather than parse errors.
    pub team_size: i64,
    pub total_budget: f64,
}

/// A finished run: the final team state plus what each repair stage did.
#[derive(Debug, Clone)]
pub struct TeamPlan {
    pub state: TeamState,
    pub quota: RoleQuota,
    pub total_budget: f64,
    pub budget_swaps: usize,
    pub diversity: DiversityOutcome,
}

impl TeamPlan {
    pub fn into_report(self) -> TeamReport {
        assemble_report(&self.state, self.total_budget, self.diversity.balanced)
    }
}

/// Score → select → budget repair → diversity repair, on an isolated copy of the
/// department's records. The feature table is only read.
pub fn plan_team(table: &FeatureTable, scenario: &TeamScenario<'_>) -> Result<TeamPlan, TeamError> {
    let quota = validate_scenario(table, scenario)?;
    let department = scenario.department;
    let budget = scenario.total_budget;

    let pool = score_department(department, table.department_slice(department))?;
    let pool_size = pool.len();
    let mut state = select_by_quota(department, pool, quota)?;
    let budget_swaps = repair_budget(&mut state, budget)?;
    let diversity = rebalance_diversity(&mut state, budget);

    info!(
        department,
        pool_size,
        team_size = state.team_size(),
        total_cost = state.total_cost(),
        budget,
        budget_swaps,
        diversity_swaps = diversity.swaps,
        balanced = diversity.balanced,
        "team planned"
    );

    Ok(TeamPlan {
        state,
        quota,
        total_budget: budget,
        budget_swaps,
        diversity,
    })
}

pub fn optimize_team(table: &FeatureTable, scenario: &TeamScenario<'_>) -> Result<TeamReport, TeamError> {
    plan_team(table, scenario).map(TeamPlan::into_report)
}

pub fn generate_team(
    table: &FeatureTable,
    department: &str,
    team_size: i64,
    total_budget: f64,
) -> Result<TeamReport, TeamError> {
    optimize_team(
        table,
        &TeamScenario {
            department,
            team_size,
            total_budget,
        },
    )
}

fn validate_scenario(table: &FeatureTable, scenario: &TeamScenario<'_>) -> Result<RoleQuota, TeamError> {
    if scenario.team_size <= 0 {
        return Err(TeamError::Validation(format!(
            "team_size must be positive, got {}",
            scenario.team_size
        )));
    }
    if !scenario.total_budget.is_finite() || scenario.total_budget < 0.0 {
        return Err(TeamError::Validation(format!(
            "total_budget must be a non-negative number, got {}",
            scenario.total_budget
        )));
    }
    if !table.is_known_department(scenario.department) {
        return Err(TeamError::Validation(format!(
            "unknown department '{}'",
            scenario.department
        )));
    }
    let team_size = usize::try_from(scenario.team_size)
        .map_err(|_| TeamError::Validation(format!("team_size {} is too large", scenario.team_size)))?;
    RoleQuota::for_team_size(team_size)
}
