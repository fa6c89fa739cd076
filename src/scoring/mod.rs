//! Scoring engine: reduces each employee of one department to a comparable synergy score.
//!
//! All normalization is relative to the department slice handed in, never across
//! departments. Weights are fixed design constants.

pub mod normalize;

use crate::data::{EmployeeRecord, Role};
use crate::error::TeamError;
use crate::scoring::normalize::min_max;

const FINANCIAL_PCR_WEIGHT: f64 = 0.7;
const FINANCIAL_RANK_WEIGHT: f64 = 0.3;

const PRODUCTIVITY_VELOCITY_WEIGHT: f64 = 0.4;
const PRODUCTIVITY_RELIABILITY_WEIGHT: f64 = 0.3;
const PRODUCTIVITY_CAPACITY_WEIGHT: f64 = 0.3;

const GROWTH_TRAINING_WEIGHT: f64 = 0.6;
const GROWTH_PROMOTIONS_WEIGHT: f64 = 0.4;

/// Juniors are weighted for growth potential.
const JUNIOR_EXPERIENCE_BOOST: f64 = 1.5;

/// Diversity is enforced structurally by the repair loop, so every candidate scores the same here.
pub const NEUTRAL_DIVERSITY_SCORE: f64 = 0.5;

const SYNERGY_FINANCIAL_WEIGHT: f64 = 0.4;
const SYNERGY_PRODUCTIVITY_WEIGHT: f64 = 0.3;
const SYNERGY_EXPERIENCE_WEIGHT: f64 = 0.2;
const SYNERGY_DIVERSITY_WEIGHT: f64 = 0.1;

/// An employee record plus its derived sub-scores. Never mutated after scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEmployee {
    pub record: EmployeeRecord,
    pub financial_score: f64,
    pub velocity_norm: f64,
    pub productivity_score: f64,
    pub training_norm: f64,
    pub promotions_norm: f64,
    pub growth_score: f64,
    pub experience_score: f64,
    pub diversity_score: f64,
    pub synergy_score: f64,
}

impl ScoredEmployee {
    pub fn id(&self) -> u64 {
        self.record.id
    }

    pub fn role(&self) -> Role {
        self.record.role
    }

    pub fn salary(&self) -> f64 {
        self.record.monthly_salary
    }

    pub fn gender(&self) -> &str {
        &self.record.gender
    }

    pub fn pcr(&self) -> f64 {
        self.record.pcr
    }
}

/// Scores one department's slice. Fails with `EmptyPool` when the slice is empty.
pub fn score_department(
    department: &str,
    records: Vec<EmployeeRecord>,
) -> Result<Vec<ScoredEmployee>, TeamError> {
    if records.is_empty() {
        return Err(TeamError::EmptyPool {
            department: department.to_string(),
        });
    }

    let velocity_norm = min_max(&column(&records, |r| r.velocity));
    let training_norm = min_max(&column(&records, |r| r.training_hours));
    let promotions_norm = min_max(&column(&records, |r| r.promotions));

    let scored = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let financial_score =
                FINANCIAL_PCR_WEIGHT * record.pcr + FINANCIAL_RANK_WEIGHT * record.cost_efficiency_rank;
            let productivity_score = PRODUCTIVITY_VELOCITY_WEIGHT * velocity_norm[i]
                + PRODUCTIVITY_RELIABILITY_WEIGHT * record.reliability
                + PRODUCTIVITY_CAPACITY_WEIGHT * record.capacity;
            let growth_score =
                GROWTH_TRAINING_WEIGHT * training_norm[i] + GROWTH_PROMOTIONS_WEIGHT * promotions_norm[i];
            let experience_score = if record.role == Role::Junior {
                growth_score * JUNIOR_EXPERIENCE_BOOST
            } else {
                growth_score
            };
            let synergy_score = SYNERGY_FINANCIAL_WEIGHT * financial_score
                + SYNERGY_PRODUCTIVITY_WEIGHT * productivity_score
                + SYNERGY_EXPERIENCE_WEIGHT * experience_score
                + SYNERGY_DIVERSITY_WEIGHT * NEUTRAL_DIVERSITY_SCORE;

            ScoredEmployee {
                record,
                financial_score,
                velocity_norm: velocity_norm[i],
                productivity_score,
                training_norm: training_norm[i],
                promotions_norm: promotions_norm[i],
                growth_score,
                experience_score,
                diversity_score: NEUTRAL_DIVERSITY_SCORE,
                synergy_score,
            }
        })
        .collect();

    Ok(scored)
}

fn column(records: &[EmployeeRecord], field: impl Fn(&EmployeeRecord) -> f64) -> Vec<f64> {
    records.iter().map(field).collect()
}
