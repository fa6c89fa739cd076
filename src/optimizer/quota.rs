//! Role-quota selector: fixed 1:2:3 Manager:Senior:Junior mix.

use crate::data::Role;
use crate::error::{RoleShortfall, TeamError};
use crate::optimizer::team_state::TeamState;
use crate::scoring::ScoredEmployee;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleQuota {
    pub managers: usize,
    pub seniors: usize,
    pub juniors: usize,
}

impl RoleQuota {
    /// Scales the 1:2:3 ratio to `team_size`, rounding half to even and keeping
    /// at least one manager and one senior. Juniors take the remainder.
    pub fn for_team_size(team_size: usize) -> Result<Self, TeamError> {
        let size = team_size as f64;
        let managers = ((size / 6.0).round_ties_even() as usize).max(1);
        let seniors = ((size * 2.0 / 6.0).round_ties_even() as usize).max(1);
        let juniors = team_size.checked_sub(managers + seniors).ok_or_else(|| {
            TeamError::Validation(format!(
                "team_size {team_size} cannot hold the minimum role mix of {} members",
                managers + seniors
            ))
        })?;
        Ok(Self {
            managers,
            seniors,
            juniors,
        })
    }

    pub fn required(&self, role: Role) -> usize {
        match role {
            Role::Manager => self.managers,
            Role::Senior => self.seniors,
            Role::Junior => self.juniors,
        }
    }

    pub fn total(&self) -> usize {
        self.managers + self.seniors + self.juniors
    }

    pub fn as_counts(&self) -> [usize; 3] {
        [self.managers, self.seniors, self.juniors]
    }
}

/// Ranks each role's candidates and fills the quota from the top.
/// Managers and seniors rank by synergy; juniors rank by performance-to-cost ratio.
pub fn select_by_quota(
    department: &str,
    pool: Vec<ScoredEmployee>,
    quota: RoleQuota,
) -> Result<TeamState, TeamError> {
    let mut ranked: [Vec<usize>; 3] = Default::default();
    for (index, employee) in pool.iter().enumerate() {
        ranked[employee.role().index()].push(index);
    }

    for role in Role::ALL {
        let bucket = &mut ranked[role.index()];
        match role {
            Role::Manager | Role::Senior => {
                bucket.sort_by(|&a, &b| pool[b].synergy_score.total_cmp(&pool[a].synergy_score))
            }
            Role::Junior => bucket.sort_by(|&a, &b| pool[b].pcr().total_cmp(&pool[a].pcr())),
        }
    }

    let shortfalls: Vec<RoleShortfall> = Role::ALL
        .into_iter()
        .filter_map(|role| {
            let required = quota.required(role);
            let available = ranked[role.index()].len();
            (available < required).then_some(RoleShortfall {
                role,
                required,
                available,
            })
        })
        .collect();
    if !shortfalls.is_empty() {
        return Err(TeamError::InsufficientPool {
            department: department.to_string(),
            shortfalls,
        });
    }

    let mut selected = Vec::with_capacity(quota.total());
    let mut available: [Vec<usize>; 3] = Default::default();
    for role in Role::ALL {
        let bucket = std::mem::take(&mut ranked[role.index()]);
        let (top, rest) = bucket.split_at(quota.required(role));
        selected.extend_from_slice(top);
        available[role.index()] = rest.to_vec();
    }

    Ok(TeamState::new(pool, selected, available))
}
