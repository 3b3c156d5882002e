//! Fixed parameters of the consumption model. Breakpoints are in kWh per day.

/// `low` is fully true up to this reading
pub const LOW_FULL_UNTIL: f64 = 3.0;
/// `low` reaches zero here
pub const LOW_ZERO_FROM: f64 = 7.0;

pub const MEDIUM_RISE_FROM: f64 = 5.0;
pub const MEDIUM_PLATEAU_FROM: f64 = 8.0;
pub const MEDIUM_PLATEAU_UNTIL: f64 = 12.0;
pub const MEDIUM_ZERO_FROM: f64 = 15.0;

pub const HIGH_RISE_FROM: f64 = 10.0;
pub const HIGH_FULL_FROM: f64 = 15.0;

/// Singleton consequents of the three rules
pub const HEMAT_SINGLETON: f64 = 20.0;
pub const NORMAL_SINGLETON: f64 = 50.0;
pub const BOROS_SINGLETON: f64 = 85.0;

/// Scores below this are Hemat
pub const NORMAL_THRESHOLD: f64 = 35.0;
/// Scores at or above this are Boros
pub const BOROS_THRESHOLD: f64 = 65.0;

/// Score reported when no rule fires
pub const FALLBACK_SCORE: f64 = NORMAL_SINGLETON;

/// Totals above this get the general LED tip
pub const GENERAL_TIP_THRESHOLD_KWH: f64 = 5.0;

pub const DEFAULT_PRICE_PER_KWH: f64 = 1445.0;
pub const DEFAULT_HISTORY_DAYS: u32 = 30;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const MAX_HOURS_PER_DAY: f64 = 24.0;
