use std::fmt;

use thiserror::Error;

use crate::data::Role;

/// Terminal failures of a team-generation run. None of them carries a partial team.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TeamError {
    #[error("no eligible employees found for department '{department}'")]
    EmptyPool { department: String },

    #[error(
        "not enough employees in {department} to fill the role quota: {}",
        join_shortfalls(.shortfalls)
    )]
    InsufficientPool {
        department: String,
        shortfalls: Vec<RoleShortfall>,
    },

    #[error(
        "unable to form a team within the budget of {budget:.2}; minimum achievable cost is {minimum_cost:.2}"
    )]
    BudgetInfeasible { budget: f64, minimum_cost: f64 },

    #[error("invalid request: {0}")]
    Validation(String),
}

impl TeamError {
    /// Stable machine-readable code for API consumers.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyPool { .. } => "empty_pool",
            Self::InsufficientPool { .. } => "insufficient_pool",
            Self::BudgetInfeasible { .. } => "budget_infeasible",
            Self::Validation(_) => "validation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleShortfall {
    pub role: Role,
    pub required: usize,
    pub available: usize,
}

impl fmt::Display for RoleShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} required={}, available={}",
            self.role.plural(),
            self.required,
            self.available
        )
    }
}

fn join_shortfalls(shortfalls: &[RoleShortfall]) -> String {
    shortfalls
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
