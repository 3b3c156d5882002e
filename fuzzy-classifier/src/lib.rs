//! Fuzzy classification of household electricity usage.
//!
//! A daily kWh figure is fuzzified into Low/Medium/High, defuzzified into a
//! 0..100 score and category, and turned into a list of suggestions.

use crate::{
    breakdown::{Appliance, UsageBreakdown},
    config::Config,
    errors::ClassifierError,
    inference::{classify, Category},
    membership::MembershipVector,
    suggestion::{suggest, ApplianceUsage},
};
use serde::Serialize;

pub mod breakdown;
pub mod config;
pub mod consts;
pub mod errors;
pub mod inference;
pub mod membership;
pub mod suggestion;
pub mod summary;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub category: Category,
    pub score: u8,
    pub membership: MembershipVector,
    pub suggestions: Vec<String>,
}

/// Classifies a day's total usage and derives suggestions from it.
///
/// Negative or non-finite figures are rejected rather than clamped.
pub fn evaluate(
    total_kwh: f64,
    appliances: &[ApplianceUsage],
) -> Result<Evaluation, ClassifierError> {
    let result = classify(total_kwh)?;
    if let Some(invalid) = appliances
        .iter()
        .find(|a| !a.kwh_used.is_finite() || a.kwh_used < 0.0)
    {
        return Err(ClassifierError::InvalidApplianceUsage {
            name: invalid.name.clone(),
            kwh_used: invalid.kwh_used,
        });
    }

    let suggestions = suggest(&result, total_kwh, appliances);

    Ok(Evaluation {
        category: result.category,
        score: result.score,
        membership: result.membership,
        suggestions,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub breakdown: UsageBreakdown,
    pub evaluation: Evaluation,
}

/// Computes the day's usage from appliance ratings and evaluates it
pub fn analyze(config: &Config, appliances: &[Appliance]) -> Result<Analysis, ClassifierError> {
    let breakdown = UsageBreakdown::calculate(appliances, config.price_per_kwh)?;
    let evaluation = evaluate(breakdown.total_kwh, &breakdown.to_usage())?;

    Ok(Analysis {
        breakdown,
        evaluation,
    })
}
