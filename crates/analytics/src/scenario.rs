//! Scenario selection over a chronological run of months.

use features::MonthStats;

/// Scenario id for the representative baseline month.
pub const SCENARIO_BASELINE: &str = "gulf_stream";
/// Scenario id for the warmest month.
pub const SCENARIO_WARM: &str = "gulf_stream_warm";
/// Scenario id for the month with the sharpest fronts.
pub const SCENARIO_NIGHT: &str = "gulf_stream_night";
/// Scenario id for the lowest-chlorophyll month.
pub const SCENARIO_RELAX: &str = "gulf_stream_relax";

/// A named month chosen by a selection rule.
#[derive(Debug, Clone, Copy)]
pub struct Scenario<'a> {
    pub id: &'static str,
    pub label: &'static str,
    pub stats: &'a MonthStats,
}

/// Choose the four catalog scenarios from a run of months.
///
/// Returns `None` for an empty run. The same month may back more than one
/// scenario.
pub fn select_scenarios(months: &[MonthStats]) -> Option<[Scenario<'_>; 4]> {
    Some([
        Scenario {
            id: SCENARIO_BASELINE,
            label: "Gulf Stream baseline",
            stats: middle_by_activity(months)?,
        },
        Scenario {
            id: SCENARIO_WARM,
            label: "Warm eddy pulse",
            stats: max_by_sst(months)?,
        },
        Scenario {
            id: SCENARIO_NIGHT,
            label: "Night migration",
            stats: max_by_front(months)?,
        },
        Scenario {
            id: SCENARIO_RELAX,
            label: "Bloom relaxation",
            stats: min_by_chl(months)?,
        },
    ])
}

/// The month at the midpoint of the activity ordering.
///
/// Months are sorted ascending by activity mean (stable, so ties keep their
/// chronological order) and the element at index `len / 2` is taken. For
/// even-length runs this lands on the upper middle.
pub fn middle_by_activity(months: &[MonthStats]) -> Option<&MonthStats> {
    if months.is_empty() {
        return None;
    }
    let mut ordered: Vec<&MonthStats> = months.iter().collect();
    ordered.sort_by(|a, b| a.activity_mean.total_cmp(&b.activity_mean));
    Some(ordered[ordered.len() / 2])
}

/// The earliest month with the highest SST mean.
pub fn max_by_sst(months: &[MonthStats]) -> Option<&MonthStats> {
    extremal(months, |candidate, best| candidate.sst_mean > best.sst_mean)
}

/// The earliest month with the highest front mean.
pub fn max_by_front(months: &[MonthStats]) -> Option<&MonthStats> {
    extremal(months, |candidate, best| {
        candidate.front_mean > best.front_mean
    })
}

/// The earliest month with the lowest chlorophyll mean.
pub fn min_by_chl(months: &[MonthStats]) -> Option<&MonthStats> {
    extremal(months, |candidate, best| candidate.chl_mean < best.chl_mean)
}

/// First element that no later element strictly beats.
fn extremal(
    months: &[MonthStats],
    better: impl Fn(&MonthStats, &MonthStats) -> bool,
) -> Option<&MonthStats> {
    months.iter().fold(None, |best, candidate| match best {
        Some(current) if !better(candidate, current) => Some(current),
        _ => Some(candidate),
    })
}
