use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceReading {
    pub name: String,
    /// Rated power in watts
    pub wattage: f64,
    pub hours_per_day: f64,
}

#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct UsageRequest {
    /// Day the usage belongs to, today when missing
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub appliances: Vec<ApplianceReading>,
}
