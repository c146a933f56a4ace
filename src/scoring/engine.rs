use serde::{Deserialize, Serialize};

use super::config::EstimateConfig;
use super::factors::{snap_to_scale, Complexity, LayerType, SliceType};

/// One architecturally-classified unit of work within a task.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Slice {
    #[serde(rename = "type")]
    pub slice_type: SliceType,
    pub complexity: Complexity,
    pub layer: LayerType,
    #[serde(default)]
    pub is_shared_across_features: bool,
    /// Number of other slices this one depends on
    #[serde(default)]
    pub dependency_count: u32,
    #[serde(default)]
    pub is_business_critical: bool,
}

impl Slice {
    pub fn new(slice_type: SliceType, complexity: Complexity, layer: LayerType) -> Self {
        Self {
            slice_type,
            complexity,
            layer,
            is_shared_across_features: false,
            dependency_count: 0,
            is_business_critical: false,
        }
    }
}

/// A unit of work to estimate: its slices plus the whole-task flags.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub slices: Vec<Slice>,
    #[serde(default)]
    pub has_test: bool,
    #[serde(default)]
    pub is_refactor: bool,
}

/// Every intermediate value that went into one slice's score.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SliceBreakdown {
    pub slice_type: SliceType,
    pub layer: LayerType,
    pub base_point: f64,
    pub multiplier: f64,
    pub layer_weight: f64,
    pub dependency_penalty: f64,
    pub shared_bonus: f64,
    pub business_bonus: f64,
    /// Sum before rounding
    pub raw: f64,
    pub points: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EstimateBreakdown {
    pub slices: Vec<SliceBreakdown>,
    pub slice_total: i64,
    pub test_bonus: f64,
    pub refactor_bonus: f64,
    /// Sum before snapping to the scale
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    pub story_points: u32,
    pub breakdown: EstimateBreakdown,
}

/// Score a single slice, keeping every intermediate value.
pub fn explain_slice(slice: &Slice, config: &EstimateConfig) -> SliceBreakdown {
    let base_point = config.base_point.get(slice.slice_type).unwrap_or(1.0);
    let multiplier = config
        .complexity_multiplier
        .get(slice.complexity)
        .unwrap_or(1.0);
    let layer_weight = config.layer_weight.get(slice.layer).unwrap_or(0.0);

    let raw_penalty = slice.dependency_count as f64 * config.dependency_weight;
    let dependency_penalty = raw_penalty.min(config.max_dependency_penalty);

    let shared_bonus = if slice.is_shared_across_features {
        config.bonus.shared_across_features
    } else {
        0.0
    };
    let business_bonus = if slice.is_business_critical {
        config.bonus.business_critical
    } else {
        0.0
    };

    let raw = base_point * multiplier + layer_weight + dependency_penalty + shared_bonus + business_bonus;

    SliceBreakdown {
        slice_type: slice.slice_type,
        layer: slice.layer,
        base_point,
        multiplier,
        layer_weight,
        dependency_penalty,
        shared_bonus,
        business_bonus,
        raw,
        points: raw.ceil() as i64,
    }
}

/// Point value of a single slice, rounded up to a whole number.
pub fn score_slice(slice: &Slice, config: &EstimateConfig) -> i64 {
    explain_slice(slice, config).points
}

/// Estimate a task and return the story points together with the breakdown.
pub fn explain_estimate(
    slices: &[Slice],
    has_test: bool,
    is_refactor: bool,
    config: &EstimateConfig,
) -> EstimateResult {
    let slices: Vec<SliceBreakdown> = slices.iter().map(|s| explain_slice(s, config)).collect();
    let slice_total: i64 = slices.iter().map(|b| b.points).sum();

    let test_bonus = if has_test { config.bonus.has_test } else { 0.0 };
    let refactor_bonus = if is_refactor {
        config.bonus.is_refactor
    } else {
        0.0
    };
    let total = slice_total as f64 + test_bonus + refactor_bonus;

    EstimateResult {
        story_points: snap_to_scale(total),
        breakdown: EstimateBreakdown {
            slices,
            slice_total,
            test_bonus,
            refactor_bonus,
            total,
        },
    }
}

/// Story points for a task, snapped to the Fibonacci scale.
pub fn estimate(
    slices: &[Slice],
    has_test: bool,
    is_refactor: bool,
    config: &EstimateConfig,
) -> u32 {
    explain_estimate(slices, has_test, is_refactor, config).story_points
}

impl Task {
    pub fn estimate(&self, config: &EstimateConfig) -> EstimateResult {
        explain_estimate(&self.slices, self.has_test, self.is_refactor, config)
    }
}
