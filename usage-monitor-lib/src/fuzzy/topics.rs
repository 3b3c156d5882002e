use crate::fuzzy::dto::*;
use crate::topic::Topic;
#[rustfmt::skip]

pub const FUZZY_REPORT_TOPIC: Topic<UsageReport> = Topic::new("Fuzzy/report");
pub const FUZZY_SUMMARY_TOPIC: Topic<UsageSummary> = Topic::new("Fuzzy/summary");
