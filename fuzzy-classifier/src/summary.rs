use crate::{breakdown::round_to, consts::DAYS_PER_MONTH, inference::Category};
use chrono::NaiveDate;
use serde::Serialize;

/// Outcome of one day's evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub total_kwh: f64,
    pub total_cost: f64,
    pub price_per_kwh: f64,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub hemat: u32,
    pub normal: u32,
    pub boros: u32,
}

impl CategoryBreakdown {
    fn count(&mut self, category: Category) {
        match category {
            Category::Hemat => self.hemat += 1,
            Category::Normal => self.normal += 1,
            Category::Boros => self.boros += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UsageSummary {
    pub total_kwh: f64,
    pub total_cost: f64,
    pub average_daily: f64,
    pub estimated_monthly: f64,
    pub estimated_monthly_cost: f64,
    pub category_breakdown: CategoryBreakdown,
    pub days_tracked: u32,
}

impl UsageSummary {
    /// Aggregates the records, which are expected oldest first
    pub fn from_records(records: &[DailyRecord]) -> Self {
        let Some(oldest) = records.first() else {
            return Self::default();
        };

        let mut total_kwh = 0.0;
        let mut total_cost = 0.0;
        let mut category_breakdown = CategoryBreakdown::default();
        for record in records {
            total_kwh += record.total_kwh;
            total_cost += record.total_cost;
            category_breakdown.count(record.category);
        }

        let average_daily = total_kwh / records.len() as f64;
        let estimated_monthly = average_daily * DAYS_PER_MONTH;

        UsageSummary {
            total_kwh: round_to(total_kwh, 2),
            total_cost: round_to(total_cost, 2),
            average_daily: round_to(average_daily, 2),
            estimated_monthly: round_to(estimated_monthly, 2),
            estimated_monthly_cost: round_to(estimated_monthly * oldest.price_per_kwh, 2),
            category_breakdown,
            days_tracked: records.len() as u32,
        }
    }
}
