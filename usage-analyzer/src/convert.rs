use chrono::NaiveDate;
use fuzzy_classifier::{
    breakdown::{round_to, Appliance},
    inference::Category,
    summary::{DailyRecord, UsageSummary},
    Analysis,
};
use usage_monitor_lib::{appliance::dto::UsageRequest, fuzzy::dto};

pub fn appliances(request: &UsageRequest) -> Vec<Appliance> {
    request
        .appliances
        .iter()
        .map(|a| Appliance::new(a.name.clone(), a.wattage, a.hours_per_day))
        .collect()
}

pub fn category(category: Category) -> dto::Category {
    match category {
        Category::Hemat => dto::Category::Hemat,
        Category::Normal => dto::Category::Normal,
        Category::Boros => dto::Category::Boros,
    }
}

pub fn report(date: NaiveDate, analysis: &Analysis) -> dto::UsageReport {
    let breakdown = &analysis.breakdown;
    let evaluation = &analysis.evaluation;

    dto::UsageReport {
        date,
        total_kwh: round_to(breakdown.total_kwh, 3),
        total_cost: round_to(breakdown.total_cost, 2),
        price_per_kwh: breakdown.price_per_kwh,
        appliances: breakdown
            .appliances
            .iter()
            .map(|a| dto::ApplianceCost {
                name: a.name.clone(),
                kwh_used: a.kwh_used,
                cost: a.cost,
            })
            .collect(),
        fuzzy_result: dto::FuzzyResult {
            category: category(evaluation.category),
            score: evaluation.score,
            membership: dto::Membership {
                low: evaluation.membership.low,
                medium: evaluation.membership.medium,
                high: evaluation.membership.high,
            },
        },
        suggestions: evaluation.suggestions.clone(),
    }
}

pub fn daily_record(date: NaiveDate, analysis: &Analysis) -> DailyRecord {
    DailyRecord {
        date,
        total_kwh: round_to(analysis.breakdown.total_kwh, 3),
        total_cost: round_to(analysis.breakdown.total_cost, 2),
        price_per_kwh: analysis.breakdown.price_per_kwh,
        category: analysis.evaluation.category,
    }
}

pub fn summary(summary: &UsageSummary) -> dto::UsageSummary {
    dto::UsageSummary {
        total_kwh: summary.total_kwh,
        total_cost: summary.total_cost,
        average_daily: summary.average_daily,
        estimated_monthly: summary.estimated_monthly,
        estimated_monthly_cost: summary.estimated_monthly_cost,
        category_breakdown: dto::CategoryBreakdown {
            hemat: summary.category_breakdown.hemat,
            normal: summary.category_breakdown.normal,
            boros: summary.category_breakdown.boros,
        },
        days_tracked: summary.days_tracked,
    }
}
