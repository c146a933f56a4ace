use super::config::EstimateConfig;
use super::engine::Task;
use super::factors::{Complexity, LayerType, SliceType};

/// Validate an estimation configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &EstimateConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for t in SliceType::ALL {
        if let Some(v) = config.base_point.get(t) {
            check_non_negative(&mut errors, &format!("basePoint.{}", t), v);
        }
    }

    // Layer weights may be negative; they only need to be real numbers
    for l in LayerType::ALL {
        if let Some(v) = config.layer_weight.get(l) {
            if !v.is_finite() {
                errors.push(format!("layerWeight.{}: must be a finite number", l));
            }
        }
    }

    for c in Complexity::ALL {
        if let Some(v) = config.complexity_multiplier.get(c) {
            if !v.is_finite() || v <= 0.0 {
                errors.push(format!("complexityMultiplier.{}: must be positive", c));
            }
        }
    }

    check_non_negative(&mut errors, "dependencyWeight", config.dependency_weight);
    check_non_negative(&mut errors, "maxDependencyPenalty", config.max_dependency_penalty);

    let bonus = &config.bonus;
    check_non_negative(&mut errors, "bonus.sharedAcrossFeatures", bonus.shared_across_features);
    check_non_negative(&mut errors, "bonus.businessCritical", bonus.business_critical);
    check_non_negative(&mut errors, "bonus.hasTest", bonus.has_test);
    check_non_negative(&mut errors, "bonus.isRefactor", bonus.is_refactor);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_non_negative(errors: &mut Vec<String>, key: &str, value: f64) {
    if !value.is_finite() || value < 0.0 {
        errors.push(format!("{}: must be non-negative", key));
    }
}

/// Warnings for slices whose attributes fell outside the known values.
/// Such slices still score, using the fallback for the unrecognized attribute.
pub fn validate_task(task: &Task) -> Vec<String> {
    let mut warnings = Vec::new();

    for (i, slice) in task.slices.iter().enumerate() {
        if slice.slice_type == SliceType::Unknown {
            warnings.push(format!(
                "slices[{}].type: unrecognized value, base point falls back to 1",
                i
            ));
        }
        if slice.complexity == Complexity::Unknown {
            warnings.push(format!(
                "slices[{}].complexity: unrecognized value, multiplier falls back to 1",
                i
            ));
        }
        if slice.layer == LayerType::Unknown {
            warnings.push(format!(
                "slices[{}].layer: unrecognized value, contributes 0",
                i
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Bonus, ComplexityMultipliers, LayerWeights, Slice};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&EstimateConfig::default()).is_ok());
    }

    #[test]
    fn test_negative_layer_weight_is_valid() {
        let mut config = EstimateConfig::default();
        config.layer_weight = LayerWeights {
            pages: Some(-1.0),
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_negative_base_point() {
        let mut config = EstimateConfig::default();
        config.base_point.api = Some(-2.0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("basePoint.api"));
    }

    #[test]
    fn test_zero_multiplier() {
        let mut config = EstimateConfig::default();
        config.complexity_multiplier = ComplexityMultipliers {
            high: Some(0.0),
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("complexityMultiplier.high"));
    }

    #[test]
    fn test_non_finite_layer_weight() {
        let mut config = EstimateConfig::default();
        config.layer_weight.app = Some(f64::NAN);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("layerWeight.app"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = EstimateConfig::default();
        config.dependency_weight = -0.1; // Error 1
        config.bonus = Bonus {
            shared_across_features: -1.0, // Error 2
            business_critical: 1.5,
            has_test: -1.0, // Error 3
            is_refactor: 2.0,
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("dependencyWeight"));
        assert!(errors[1].contains("bonus.sharedAcrossFeatures"));
        assert!(errors[2].contains("bonus.hasTest"));
    }

    #[test]
    fn test_validate_task_known_values() {
        let task = Task {
            slices: vec![Slice::new(SliceType::Api, Complexity::Low, LayerType::App)],
            has_test: false,
            is_refactor: false,
        };
        assert!(validate_task(&task).is_empty());
    }

    #[test]
    fn test_validate_task_reports_unknown_values() {
        let task = Task {
            slices: vec![
                Slice::new(SliceType::Api, Complexity::Low, LayerType::App),
                Slice::new(SliceType::Unknown, Complexity::Low, LayerType::Unknown),
            ],
            has_test: false,
            is_refactor: false,
        };
        let warnings = validate_task(&task);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("slices[1].type"));
        assert!(warnings[1].starts_with("slices[1].layer"));
    }
}
