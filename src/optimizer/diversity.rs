//! Diversity repair loop.
//!
//! When one gender holds more than 70% of the team, its lowest-synergy members are
//! offered for exchange against same-role candidates of any other gender whose extra
//! salary fits in the remaining budget slack. Rebalancing is best effort: if no
//! majority member admits a swap the team is returned as is.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::optimizer::team_state::{SelectionReason, TeamState};
use crate::scoring::ScoredEmployee;

/// Largest share of the team a single gender may hold.
pub const MAJORITY_SHARE_LIMIT: f64 = 0.70;

#[derive(Debug, Clone, PartialEq)]
pub enum DiversityCheck {
    Balanced,
    Imbalanced { majority: String, share: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiversityOutcome {
    pub swaps: usize,
    pub balanced: bool,
}

/// Members per gender, keyed in sorted order.
pub fn gender_counts<'a>(
    members: impl IntoIterator<Item = &'a ScoredEmployee>,
) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();
    for member in members {
        *counts.entry(member.gender()).or_insert(0) += 1;
    }
    counts
}

pub fn check_diversity<'a>(members: impl IntoIterator<Item = &'a ScoredEmployee>) -> DiversityCheck {
    let counts = gender_counts(members);
    let total: usize = counts.values().sum();
    if total == 0 {
        return DiversityCheck::Balanced;
    }
    counts
        .into_iter()
        .map(|(gender, count)| (gender, count as f64 / total as f64))
        .find(|(_, share)| *share > MAJORITY_SHARE_LIMIT)
        .map_or(DiversityCheck::Balanced, |(gender, share)| {
            DiversityCheck::Imbalanced {
                majority: gender.to_string(),
                share,
            }
        })
}

pub fn rebalance_diversity(state: &mut TeamState, budget: f64) -> DiversityOutcome {
    let mut swaps = 0;
    loop {
        let majority = match check_diversity(state.selected()) {
            DiversityCheck::Balanced => {
                return DiversityOutcome {
                    swaps,
                    balanced: true,
                }
            }
            DiversityCheck::Imbalanced { majority, .. } => majority,
        };

        let Some((position, incoming)) = find_minority_swap(state, &majority, budget) else {
            info!(
                majority = %majority,
                swaps,
                "no budget-neutral swap left; team stays imbalanced"
            );
            return DiversityOutcome {
                swaps,
                balanced: false,
            };
        };

        debug!(
            outgoing = state.employee(state.selected_slots()[position].index).id(),
            incoming = state.employee(incoming).id(),
            majority = %majority,
            "diversity swap"
        );
        state.swap(position, incoming, SelectionReason::DiversitySwap);
        swaps += 1;
    }
}

fn find_minority_swap(state: &TeamState, majority: &str, budget: f64) -> Option<(usize, usize)> {
    let mut candidates: Vec<(usize, &ScoredEmployee)> = state
        .selected_slots()
        .iter()
        .enumerate()
        .map(|(position, slot)| (position, state.employee(slot.index)))
        .filter(|(_, member)| member.gender() == majority)
        .collect();
    candidates.sort_by(|(_, left), (_, right)| left.synergy_score.total_cmp(&right.synergy_score));

    candidates.into_iter().find_map(|(position, incumbent)| {
        let slack = budget - state.total_cost();
        state
            .best_available(incumbent.role(), |candidate| {
                candidate.gender() != majority && candidate.salary() - incumbent.salary() <= slack
            })
            .map(|incoming| (position, incoming))
    })
}
