//! Cross-month analytics over derived ocean features.
//!
//! Everything here consumes the per-month aggregates produced by the feature
//! deriver: scenario selection picks representative and extremal months,
//! scatter sampling thins the combined cell cloud, and the correlation and
//! diet modules reduce the sampled data to compact summaries.

pub mod correlation;
pub mod diet;
pub mod scatter;
pub mod scenario;
pub mod summary;

pub use correlation::{correlation_matrix, CorrelationCell, CorrelationMatrix, VARIABLES};
pub use diet::{diet_breakdown, DietBreakdown};
pub use scatter::{
    percentile, sample_scatter, ScatterPoint, DEFAULT_SCATTER_LIMIT, TAG_PERCENTILE,
};
pub use scenario::{
    select_scenarios, Scenario, SCENARIO_BASELINE, SCENARIO_NIGHT, SCENARIO_RELAX, SCENARIO_WARM,
};
pub use summary::chl_level_label;
