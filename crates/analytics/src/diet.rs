//! Cross-month diet proxy split.

use features::MonthStats;
use ocean_common::round_half_up;

/// Integer percentage split of the cross-month channel totals.
///
/// The three channel buckets are rounded shares of the summed monthly means;
/// the telemetry remainder tops the split up to 100 but never goes negative,
/// so rounded shares that overshoot leave it at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DietBreakdown {
    pub thermal_pct: i64,
    pub chlorophyll_pct: i64,
    pub frontal_pct: i64,
    pub telemetry_pct: i64,
}

/// Split the summed monthly channel means into integer percentages.
///
/// A run whose totals sum to zero divides by 1 instead, leaving the whole
/// split to the telemetry bucket.
pub fn diet_breakdown(months: &[MonthStats]) -> DietBreakdown {
    let sst_total: f64 = months.iter().map(|m| m.sst_mean).sum();
    let chl_total: f64 = months.iter().map(|m| m.chl_mean).sum();
    let front_total: f64 = months.iter().map(|m| m.front_mean).sum();

    let mut base_total = sst_total + chl_total + front_total;
    if base_total == 0.0 {
        base_total = 1.0;
    }

    let thermal_pct = round_half_up(sst_total / base_total * 100.0);
    let chlorophyll_pct = round_half_up(chl_total / base_total * 100.0);
    let frontal_pct = round_half_up(front_total / base_total * 100.0);
    let telemetry_pct = (100 - (thermal_pct + chlorophyll_pct + frontal_pct)).max(0);

    DietBreakdown {
        thermal_pct,
        chlorophyll_pct,
        frontal_pct,
        telemetry_pct,
    }
}
