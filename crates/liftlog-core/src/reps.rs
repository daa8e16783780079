//! # reps
//!
//! why: the reps field is free text and every set still needs a rep count
//! relations: used by series.rs to compute total reps and volume
//! what: RepsShape policy table, evaluate() total function

use tracing::debug;

/// Total reps assumed when an expression is not `sets*reps` (3 sets of 8)
pub const DEFAULT_TOTAL_REPS: u32 = 3 * 8;

/// How a reps expression is interpreted
///
/// | cleaned expression         | shape                 | total               |
/// |----------------------------|-----------------------|---------------------|
/// | `a*b`                      | `Product { a, b }`    | `a * b`             |
/// | `a*b` with bad field       | `Product` (field = 0) | `0`                 |
/// | anything else              | `Fallback`            | `DEFAULT_TOTAL_REPS`|
///
/// Cleaning removes all whitespace, then drops everything from the first `-`
/// onwards, so a range such as `8-10` is read as its lower bound `8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepsShape {
    Product { sets: u32, reps: u32 },
    Fallback,
}

impl RepsShape {
    pub fn classify(expr: &str) -> Self {
        let cleaned: String = expr.chars().filter(|c| !c.is_whitespace()).collect();
        let lower_bound = cleaned.split('-').next().unwrap_or_default();

        let fields: Vec<&str> = lower_bound.split('*').collect();
        match fields.as_slice() {
            [sets, reps] => Self::Product {
                sets: parse_or_zero(sets),
                reps: parse_or_zero(reps),
            },
            _ => Self::Fallback,
        }
    }

    pub fn total(self) -> u32 {
        match self {
            Self::Product { sets, reps } => sets.saturating_mul(reps),
            Self::Fallback => DEFAULT_TOTAL_REPS,
        }
    }
}

fn parse_or_zero(field: &str) -> u32 {
    field.parse().unwrap_or(0)
}

/// Total reps for a free-form expression. Never fails.
pub fn evaluate(expr: &str) -> u32 {
    let shape = RepsShape::classify(expr);
    if shape == RepsShape::Fallback {
        debug!(expr, "reps expression not of form sets*reps, using default");
    }
    shape.total()
}
