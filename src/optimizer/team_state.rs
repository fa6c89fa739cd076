//! Run-scoped team state: an arena of scored employees plus index sets for the
//! selected team and the per-role available pools.

use std::cmp::Ordering;

use crate::data::Role;
use crate::scoring::ScoredEmployee;

/// Why a member holds its place on the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    Ranked,
    BudgetSwap,
    DiversitySwap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub index: usize,
    pub reason: SelectionReason,
}

/// Every arena index lives in exactly one of `selected` or `available[role]`.
#[derive(Debug, Clone)]
pub struct TeamState {
    pool: Vec<ScoredEmployee>,
    selected: Vec<Slot>,
    available: [Vec<usize>; 3],
}

impl TeamState {
    pub(crate) fn new(
        pool: Vec<ScoredEmployee>,
        selected: Vec<usize>,
        available: [Vec<usize>; 3],
    ) -> Self {
        let selected = selected
            .into_iter()
            .map(|index| Slot {
                index,
                reason: SelectionReason::Ranked,
            })
            .collect();
        Self {
            pool,
            selected,
            available,
        }
    }

    pub fn employee(&self, index: usize) -> &ScoredEmployee {
        &self.pool[index]
    }

    pub fn pool(&self) -> &[ScoredEmployee] {
        &self.pool
    }

    pub fn selected_slots(&self) -> &[Slot] {
        &self.selected
    }

    pub fn selected(&self) -> impl Iterator<Item = &ScoredEmployee> + '_ {
        self.selected.iter().map(|slot| &self.pool[slot.index])
    }

    pub fn available_indices(&self, role: Role) -> &[usize] {
        &self.available[role.index()]
    }

    pub fn available(&self, role: Role) -> impl Iterator<Item = &ScoredEmployee> + '_ {
        self.available[role.index()]
            .iter()
            .map(|&index| &self.pool[index])
    }

    pub fn team_size(&self) -> usize {
        self.selected.len()
    }

    pub fn total_cost(&self) -> f64 {
        self.selected().map(ScoredEmployee::salary).sum()
    }

    pub fn role_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for member in self.selected() {
            counts[member.role().index()] += 1;
        }
        counts
    }

    /// Stable re-ordering of the team; equal members keep their relative order.
    pub(crate) fn sort_selected_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&ScoredEmployee, &ScoredEmployee) -> Ordering,
    {
        let pool = &self.pool;
        self.selected
            .sort_by(|left, right| compare(&pool[left.index], &pool[right.index]));
    }

    /// Highest-synergy available candidate of `role` accepted by `accept`.
    /// Ties go to the earliest candidate in pool order.
    pub(crate) fn best_available<F>(&self, role: Role, mut accept: F) -> Option<usize>
    where
        F: FnMut(&ScoredEmployee) -> bool,
    {
        let mut best: Option<usize> = None;
        for &index in &self.available[role.index()] {
            let candidate = &self.pool[index];
            if !accept(candidate) {
                continue;
            }
            let improves = best.map_or(true, |current| {
                candidate.synergy_score > self.pool[current].synergy_score
            });
            if improves {
                best = Some(index);
            }
        }
        best
    }

    /// Replaces the member at `position` with available candidate `incoming`.
    /// The outgoing member joins the back of its role's available pool and the
    /// newcomer joins the back of the team.
    pub(crate) fn swap(&mut self, position: usize, incoming: usize, reason: SelectionReason) {
        let outgoing = self.selected.remove(position);
        let role = self.pool[outgoing.index].role();
        debug_assert_eq!(role, self.pool[incoming].role());

        let pool = &mut self.available[role.index()];
        if let Some(at) = pool.iter().position(|&index| index == incoming) {
            pool.remove(at);
        }
        pool.push(outgoing.index);
        self.selected.push(Slot {
            index: incoming,
            reason,
        });
    }
}
