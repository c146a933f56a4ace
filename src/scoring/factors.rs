use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of work a slice represents. Determines its base point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SliceType {
    Ui,
    Api,
    Model,
    Lib,
    Route,
    Shared,
    /// Any value outside the known set. Falls back to a base point of 1.
    #[serde(other)]
    Unknown,
}

impl SliceType {
    pub const ALL: [SliceType; 6] = [
        SliceType::Ui,
        SliceType::Api,
        SliceType::Model,
        SliceType::Lib,
        SliceType::Route,
        SliceType::Shared,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SliceType::Ui => "ui",
            SliceType::Api => "api",
            SliceType::Model => "model",
            SliceType::Lib => "lib",
            SliceType::Route => "route",
            SliceType::Shared => "shared",
            SliceType::Unknown => "unknown",
        }
    }
}

/// Complexity of a slice. Determines a multiplicative factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
    /// Any value outside the known set. Falls back to a multiplier of 1.
    #[serde(other)]
    Unknown,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Low, Complexity::Medium, Complexity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
            Complexity::Unknown => "unknown",
        }
    }
}

/// Architectural layer a slice lives in. Determines an additive weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Shared,
    Entities,
    Features,
    Widgets,
    Pages,
    App,
    /// Any value outside the known set. Falls back to a weight of 0.
    #[serde(other)]
    Unknown,
}

impl LayerType {
    pub const ALL: [LayerType; 6] = [
        LayerType::Shared,
        LayerType::Entities,
        LayerType::Features,
        LayerType::Widgets,
        LayerType::Pages,
        LayerType::App,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayerType::Shared => "shared",
            LayerType::Entities => "entities",
            LayerType::Features => "features",
            LayerType::Widgets => "widgets",
            LayerType::Pages => "pages",
            LayerType::App => "app",
            LayerType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SliceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allowed story point values, ascending.
pub const FIBONACCI_SCALE: [u32; 7] = [1, 2, 3, 5, 8, 13, 21];

/// Snap a raw total to the smallest scale value that is >= `total`.
/// Totals above the top of the scale saturate to it.
pub fn snap_to_scale(total: f64) -> u32 {
    let top = FIBONACCI_SCALE[FIBONACCI_SCALE.len() - 1];
    FIBONACCI_SCALE
        .iter()
        .copied()
        .find(|&f| total <= f as f64)
        .unwrap_or(top)
}
