use crate::{consts::MAX_HOURS_PER_DAY, errors::ClassifierError, suggestion::ApplianceUsage};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Appliance {
    pub name: String,
    /// Rated power in watts
    pub wattage: f64,
    pub hours_per_day: f64,
}

impl Appliance {
    pub fn new(name: impl Into<String>, wattage: f64, hours_per_day: f64) -> Self {
        Self {
            name: name.into(),
            wattage,
            hours_per_day,
        }
    }

    fn validate(&self) -> Result<(), ClassifierError> {
        let reason = if !self.wattage.is_finite() || self.wattage < 0.0 {
            format!("wattage {} W", self.wattage)
        } else if !(0.0..=MAX_HOURS_PER_DAY).contains(&self.hours_per_day) {
            format!("{} hours per day", self.hours_per_day)
        } else {
            return Ok(());
        };
        Err(ClassifierError::InvalidAppliance {
            name: self.name.clone(),
            reason,
        })
    }

    pub fn kwh_per_day(&self) -> f64 {
        self.wattage * self.hours_per_day / 1000.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplianceCost {
    pub name: String,
    pub kwh_used: f64,
    pub cost: f64,
}

/// Per-appliance energy and cost for one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageBreakdown {
    /// Unrounded sum, this is what gets classified
    pub total_kwh: f64,
    pub total_cost: f64,
    pub price_per_kwh: f64,
    pub appliances: Vec<ApplianceCost>,
}

impl UsageBreakdown {
    pub fn calculate(
        appliances: &[Appliance],
        price_per_kwh: f64,
    ) -> Result<Self, ClassifierError> {
        if appliances.is_empty() {
            return Err(ClassifierError::NoAppliances);
        }
        if !price_per_kwh.is_finite() || price_per_kwh < 0.0 {
            return Err(ClassifierError::InvalidPrice(price_per_kwh));
        }

        let mut total_kwh = 0.0;
        let mut costs = Vec::with_capacity(appliances.len());
        for appliance in appliances {
            appliance.validate()?;

            let kwh_used = appliance.kwh_per_day();
            total_kwh += kwh_used;
            costs.push(ApplianceCost {
                name: appliance.name.clone(),
                kwh_used: round_to(kwh_used, 3),
                cost: round_to(kwh_used * price_per_kwh, 2),
            });
        }

        Ok(UsageBreakdown {
            total_kwh,
            total_cost: total_kwh * price_per_kwh,
            price_per_kwh,
            appliances: costs,
        })
    }

    /// Usage figures in the shape the suggestion generator ranks
    pub fn to_usage(&self) -> Vec<ApplianceUsage> {
        self.appliances
            .iter()
            .map(|a| ApplianceUsage::new(a.name.clone(), a.kwh_used))
            .collect()
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
