pub mod age;
pub mod breakdown;
pub mod metrics;
pub mod range;
pub mod scores;
pub mod thresholds;

pub use age::AgeGroup;
pub use breakdown::{MetricStatus, PillarBreakdown, SubmetricBreakdown, VitalityBreakdown};
pub use metrics::{DailyRecord, PillarId, RawMetrics, SubmetricId};
pub use range::{MetricRange, NormalizedRange, ScoringDirection};
pub use scores::{PillarScore, SubmetricScore, VitalitySnapshot};
pub use thresholds::ScoringProfile;
