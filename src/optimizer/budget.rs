//! Budget repair loop.
//!
//! While the team costs more than the budget, the member with the lowest
//! performance-to-cost ratio that has a strictly cheaper same-role alternative is
//! swapped for the best-synergy such alternative. Every swap lowers the total
//! cost, so the loop ends either feasible or with no cheaper swap left.

use tracing::debug;

use crate::error::TeamError;
use crate::optimizer::team_state::{SelectionReason, TeamState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetState {
    OverBudget,
    Feasible,
}

pub fn budget_state(state: &TeamState, budget: f64) -> BudgetState {
    if state.total_cost() > budget {
        BudgetState::OverBudget
    } else {
        BudgetState::Feasible
    }
}

/// Returns the number of swaps performed, or `BudgetInfeasible` carrying the
/// cheapest cost reachable under the role quota.
pub fn repair_budget(state: &mut TeamState, budget: f64) -> Result<usize, TeamError> {
    let mut swaps = 0;
    while budget_state(state, budget) == BudgetState::OverBudget {
        state.sort_selected_by(|left, right| left.pcr().total_cmp(&right.pcr()));

        let Some((position, incoming)) = find_cheaper_swap(state) else {
            return Err(TeamError::BudgetInfeasible {
                budget,
                minimum_cost: state.total_cost(),
            });
        };

        let outgoing = state.employee(state.selected_slots()[position].index);
        let replacement = state.employee(incoming);
        debug!(
            outgoing = outgoing.id(),
            incoming = replacement.id(),
            role = %outgoing.role(),
            saving = outgoing.salary() - replacement.salary(),
            "budget swap"
        );
        state.swap(position, incoming, SelectionReason::BudgetSwap);
        swaps += 1;
    }
    Ok(swaps)
}

fn find_cheaper_swap(state: &TeamState) -> Option<(usize, usize)> {
    state
        .selected_slots()
        .iter()
        .enumerate()
        .find_map(|(position, slot)| {
            let incumbent = state.employee(slot.index);
            state
                .best_available(incumbent.role(), |candidate| {
                    candidate.salary() < incumbent.salary()
                })
                .map(|incoming| (position, incoming))
        })
}
