use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::data::Role;
use crate::optimizer::diversity::gender_counts;
use crate::optimizer::team_state::{SelectionReason, TeamState};

/// One selected member as returned to API callers.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    #[serde(rename = "Employee_ID")]
    pub employee_id: u64,
    #[serde(rename = "Role")]
    pub role: Role,
    #[serde(rename = "Job_Title")]
    pub job_title: String,
    #[serde(rename = "Salary")]
    pub salary: f64,
    /// Synergy scaled to 0-100.
    #[serde(rename = "SynergyScore")]
    pub synergy_score: f64,
    #[serde(rename = "Explainability")]
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    #[serde(rename = "Team_List")]
    pub team_size: usize,
    #[serde(rename = "Candidates")]
    pub members: Vec<TeamMember>,
    #[serde(rename = "Total_Cost")]
    pub total_cost: f64,
    #[serde(rename = "Budget_Remaining")]
    pub budget_remaining: f64,
    /// Percentage per gender, one decimal.
    #[serde(rename = "Gender_Ratio")]
    pub gender_ratio: BTreeMap<String, f64>,
    #[serde(rename = "Education_Mix")]
    pub education_mix: Vec<String>,
    #[serde(rename = "Avg_Performance")]
    pub avg_performance: f64,
    #[serde(rename = "Synergy_Index")]
    pub synergy_index: f64,
    #[serde(rename = "Diversity_Balanced")]
    pub diversity_balanced: bool,
}

impl TeamReport {
    pub fn role_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for member in &self.members {
            counts[member.role.index()] += 1;
        }
        counts
    }
}

pub fn assemble_report(state: &TeamState, total_budget: f64, diversity_balanced: bool) -> TeamReport {
    let team_size = state.team_size();
    let total_cost = state.total_cost();

    let members: Vec<TeamMember> = state
        .selected_slots()
        .iter()
        .map(|slot| {
            let employee = state.employee(slot.index);
            TeamMember {
                employee_id: employee.id(),
                role: employee.role(),
                job_title: employee.record.job_title.clone(),
                salary: employee.salary(),
                synergy_score: round_to(employee.synergy_score * 100.0, 2),
                explanation: explain(employee.role(), slot.reason),
            }
        })
        .collect();

    let gender_ratio = gender_counts(state.selected())
        .into_iter()
        .map(|(gender, count)| {
            (
                gender.to_string(),
                round_to(count as f64 / team_size as f64 * 100.0, 1),
            )
        })
        .collect();

    let education_mix: BTreeSet<String> = state
        .selected()
        .map(|employee| employee.record.education_level.clone())
        .collect();

    let (performance_sum, synergy_sum) = state.selected().fold((0.0, 0.0), |(perf, syn), e| {
        (perf + e.record.performance_score, syn + e.synergy_score)
    });
    let divisor = team_size.max(1) as f64;

    TeamReport {
        team_size,
        members,
        total_cost,
        budget_remaining: total_budget - total_cost,
        gender_ratio,
        education_mix: education_mix.into_iter().collect(),
        avg_performance: round_to(performance_sum / divisor, 2),
        synergy_index: round_to((synergy_sum / divisor * 100.0).min(100.0), 2),
        diversity_balanced,
    }
}

fn explain(role: Role, reason: SelectionReason) -> String {
    match (reason, role) {
        (SelectionReason::Ranked, Role::Junior) => {
            "Selected for Junior role. Ranked on performance-to-cost ratio within the department."
                .to_string()
        }
        (SelectionReason::Ranked, role) => format!(
            "Selected for {role} role. High synergy index based on performance vs cost and alignment."
        ),
        (SelectionReason::BudgetSwap, role) => format!(
            "Selected for {role} role as the strongest lower-cost replacement to keep the team within budget."
        ),
        (SelectionReason::DiversitySwap, role) => format!(
            "Selected for {role} role to rebalance team gender diversity without exceeding the budget."
        ),
    }
}

/// Decimal rounding with ties to even, matching the quota's rounding rule.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::assemble_report;
    use crate::data::Role;
    use crate::optimizer::team_state::TeamState;
    use crate::optimizer::test_support::scored;

    #[test]
    fn summarises_cost_diversity_and_synergy() {
        let mut pool = vec![
            scored(1, Role::Manager, 9000.0, 0.5, 0.8, "Female"),
            scored(2, Role::Senior, 7000.0, 0.5, 0.6, "Male"),
            scored(3, Role::Junior, 4000.0, 0.5, 0.55, "Male"),
        ];
        pool[0].record.education_level = "PhD".to_string();
        pool[0].record.performance_score = 5.0;
        pool[1].record.performance_score = 4.0;
        pool[2].record.performance_score = 4.0;
        let state = TeamState::new(pool, vec![0, 1, 2], Default::default());

        let report = assemble_report(&state, 25_000.0, true);
        assert_eq!(report.team_size, 3);
        assert_eq!(report.total_cost, 20_000.0);
        assert_eq!(report.budget_remaining, 5_000.0);
        assert_eq!(report.gender_ratio.get("Female"), Some(&33.3));
        assert_eq!(report.gender_ratio.get("Male"), Some(&66.7));
        assert_eq!(report.education_mix, vec!["Bachelor".to_string(), "PhD".to_string()]);
        assert_eq!(report.avg_performance, 4.33);
        assert_eq!(report.synergy_index, 65.0);
        assert_eq!(report.members[0].synergy_score, 80.0);
        assert_eq!(report.role_counts(), [1, 1, 1]);
        assert!(report.members[2].explanation.contains("performance-to-cost"));
    }

    #[test]
    fn halfway_values_round_to_even() {
        let mut pool: Vec<_> = (0..16)
            .map(|id| {
                let gender = if id == 0 { "Female" } else { "Male" };
                scored(id, Role::Junior, 4000.0, 0.5, 0.5, gender)
            })
            .collect();
        // 16 * 3.0 + 2 = 50, so the average is exactly 3.125.
        pool[1].record.performance_score = 4.0;
        pool[2].record.performance_score = 4.0;
        let state = TeamState::new(pool, (0..16).collect(), Default::default());

        let report = assemble_report(&state, 100_000.0, false);
        assert_eq!(report.gender_ratio.get("Female"), Some(&6.2));
        assert_eq!(report.gender_ratio.get("Male"), Some(&93.8));
        assert_eq!(report.avg_performance, 3.12);
    }

    #[test]
    fn serializes_with_api_wire_names() {
        let state = TeamState::new(
            vec![scored(1, Role::Manager, 100.0, 0.5, 0.5, "Female")],
            vec![0],
            Default::default(),
        );
        let payload = serde_json::to_value(assemble_report(&state, 100.0, true))
            .expect("report serializes");
        for key in [
            "Team_List",
            "Candidates",
            "Total_Cost",
            "Budget_Remaining",
            "Gender_Ratio",
            "Education_Mix",
            "Avg_Performance",
            "Synergy_Index",
        ] {
            assert!(payload.get(key).is_some(), "missing {key}");
        }
        assert_eq!(payload["Candidates"][0]["Role"], "Manager");
        assert_eq!(payload["Candidates"][0]["Employee_ID"], 1);
    }
}
