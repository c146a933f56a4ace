pub mod config;
pub mod factors;
pub mod engine;
pub mod validation;

pub use config::*;
pub use factors::{snap_to_scale, Complexity, LayerType, SliceType, FIBONACCI_SCALE};
pub use engine::{
    estimate, explain_estimate, explain_slice, score_slice, EstimateBreakdown, EstimateResult,
    Slice, SliceBreakdown, Task,
};
pub use validation::{validate_config, validate_task};
