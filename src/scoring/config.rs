use serde::{Deserialize, Serialize};

use super::factors::{Complexity, LayerType, SliceType};

/// Complete estimation configuration.
///
/// Every weight and bonus used by the scoring engine lives here. A value is
/// produced by [`resolve`], which overlays an optional [`PartialConfig`] on top
/// of the built-in defaults.
///
/// Example YAML:
/// ```yaml
/// basePoint: { ui: 1.5, api: 2, model: 1.5, lib: 2.5, route: 1, shared: 3 }
/// layerWeight: { shared: 1.2, entities: 1, features: 0.8, widgets: 0.5, pages: 0, app: 0.3 }
/// complexityMultiplier: { low: 1, medium: 1.5, high: 2 }
/// dependencyWeight: 0.2
/// maxDependencyPenalty: 2
/// bonus: { sharedAcrossFeatures: 1, businessCritical: 1.5, hasTest: 1, isRefactor: 2 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EstimateConfig {
    pub base_point: BasePoints,
    pub layer_weight: LayerWeights,
    pub complexity_multiplier: ComplexityMultipliers,
    /// Penalty added per dependency
    pub dependency_weight: f64,
    /// Upper clamp on the total dependency penalty of one slice
    pub max_dependency_penalty: f64,
    pub bonus: Bonus,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            base_point: BasePoints {
                ui: Some(1.5),
                api: Some(2.0),
                model: Some(1.5),
                lib: Some(2.5),
                route: Some(1.0),
                shared: Some(3.0),
            },
            layer_weight: LayerWeights {
                shared: Some(1.2),
                entities: Some(1.0),
                features: Some(0.8),
                widgets: Some(0.5),
                pages: Some(0.0),
                app: Some(0.3),
            },
            complexity_multiplier: ComplexityMultipliers {
                low: Some(1.0),
                medium: Some(1.5),
                high: Some(2.0),
            },
            dependency_weight: 0.2,
            max_dependency_penalty: 2.0,
            bonus: Bonus {
                shared_across_features: 1.0,
                business_critical: 1.5,
                has_test: 1.0,
                is_refactor: 2.0,
            },
        }
    }
}

/// Base point per slice type. A missing entry means "use the fallback".
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BasePoints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lib: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<f64>,
}

impl BasePoints {
    pub fn get(&self, slice_type: SliceType) -> Option<f64> {
        match slice_type {
            SliceType::Ui => self.ui,
            SliceType::Api => self.api,
            SliceType::Model => self.model,
            SliceType::Lib => self.lib,
            SliceType::Route => self.route,
            SliceType::Shared => self.shared,
            SliceType::Unknown => None,
        }
    }
}

/// Additive weight per architectural layer. May be zero or negative.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LayerWeights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widgets: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<f64>,
}

impl LayerWeights {
    pub fn get(&self, layer: LayerType) -> Option<f64> {
        match layer {
            LayerType::Shared => self.shared,
            LayerType::Entities => self.entities,
            LayerType::Features => self.features,
            LayerType::Widgets => self.widgets,
            LayerType::Pages => self.pages,
            LayerType::App => self.app,
            LayerType::Unknown => None,
        }
    }
}

/// Multiplier per complexity level.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ComplexityMultipliers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
}

impl ComplexityMultipliers {
    pub fn get(&self, complexity: Complexity) -> Option<f64> {
        match complexity {
            Complexity::Low => self.low,
            Complexity::Medium => self.medium,
            Complexity::High => self.high,
            Complexity::Unknown => None,
        }
    }
}

/// Flat bonuses. Keys left out of an override's `bonus` group count as 0.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bonus {
    #[serde(default)]
    pub shared_across_features: f64,
    #[serde(default)]
    pub business_critical: f64,
    #[serde(default)]
    pub has_test: f64,
    #[serde(default)]
    pub is_refactor: f64,
}

/// Caller-supplied overrides. Each present group replaces the default group
/// wholesale; nested keys are never merged individually.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartialConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_point: Option<BasePoints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_weight: Option<LayerWeights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity_multiplier: Option<ComplexityMultipliers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_dependency_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus: Option<Bonus>,
}

/// Build the effective configuration from the defaults and an optional override.
pub fn resolve(overrides: Option<PartialConfig>) -> EstimateConfig {
    let defaults = EstimateConfig::default();
    let Some(o) = overrides else {
        return defaults;
    };

    EstimateConfig {
        base_point: o.base_point.unwrap_or(defaults.base_point),
        layer_weight: o.layer_weight.unwrap_or(defaults.layer_weight),
        complexity_multiplier: o
            .complexity_multiplier
            .unwrap_or(defaults.complexity_multiplier),
        dependency_weight: o.dependency_weight.unwrap_or(defaults.dependency_weight),
        max_dependency_penalty: o
            .max_dependency_penalty
            .unwrap_or(defaults.max_dependency_penalty),
        bonus: o.bonus.unwrap_or(defaults.bonus),
    }
}
