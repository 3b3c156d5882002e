use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Category {
    Hemat,
    Normal,
    Boros,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy)]
pub struct Membership {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct FuzzyResult {
    pub category: Category,
    pub score: u8,
    pub membership: Membership,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceCost {
    pub name: String,
    pub kwh_used: f64,
    pub cost: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    pub date: NaiveDate,
    pub total_kwh: f64,
    pub total_cost: f64,
    pub price_per_kwh: f64,
    pub appliances: Vec<ApplianceCost>,
    pub fuzzy_result: FuzzyResult,
    pub suggestions: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct CategoryBreakdown {
    #[serde(rename = "Hemat")]
    pub hemat: u32,
    #[serde(rename = "Normal")]
    pub normal: u32,
    #[serde(rename = "Boros")]
    pub boros: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub total_kwh: f64,
    pub total_cost: f64,
    pub average_daily: f64,
    pub estimated_monthly: f64,
    pub estimated_monthly_cost: f64,
    pub category_breakdown: CategoryBreakdown,
    pub days_tracked: u32,
}
