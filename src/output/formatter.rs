use std::io::IsTerminal;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::scoring::{EstimateBreakdown, EstimateResult, SliceBreakdown};

const SEPARATOR_WIDTH: usize = 40;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a weight or bonus compactly: at most two decimals, no trailing zeros
/// (2.0 -> "2", 0.6000000000000001 -> "0.6", 1.25 -> "1.25")
pub fn format_number(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Format the per-slice breakdown block shown in report mode
pub fn format_slice_breakdown(slice: &SliceBreakdown, use_colors: bool) -> String {
    let header = format!("Slice: {} ({})", slice.slice_type, slice.layer);
    let points = format!("{} pt", slice.points);

    let (header, points) = if use_colors {
        (header.bold().to_string(), points.green().bold().to_string())
    } else {
        (header, points)
    };

    let lines = [
        "-".repeat(SEPARATOR_WIDTH),
        header,
        format!(
            "  basePoint({}) x multiplier({})",
            format_number(slice.base_point),
            format_number(slice.multiplier)
        ),
        format!("  + layerWeight({})", format_number(slice.layer_weight)),
        format!("  + dependencyPenalty({})", format_number(slice.dependency_penalty)),
        format!("  + sharedBonus({})", format_number(slice.shared_bonus)),
        format!("  + businessBonus({})", format_number(slice.business_bonus)),
        format!("  = {}", points),
    ];
    lines.join("\n")
}

/// Format the whole-task adjustments and the total before snapping
pub fn format_task_summary(breakdown: &EstimateBreakdown, use_colors: bool) -> String {
    let total = format_number(breakdown.total);
    let total = if use_colors {
        total.cyan().to_string()
    } else {
        total
    };
    format!(
        "Slices: {}\nTest bonus: +{}\nRefactor bonus: +{}\nTotal: {}",
        breakdown.slice_total,
        format_number(breakdown.test_bonus),
        format_number(breakdown.refactor_bonus),
        total
    )
}

/// Format the full report: every slice, then the task summary
pub fn format_report(result: &EstimateResult, use_colors: bool) -> String {
    let mut sections: Vec<String> = result
        .breakdown
        .slices
        .iter()
        .map(|s| format_slice_breakdown(s, use_colors))
        .collect();
    sections.push(format!("\n{}", format_task_summary(&result.breakdown, use_colors)));
    sections.join("\n")
}

/// Render the result and its breakdown as pretty-printed JSON
pub fn format_json(result: &EstimateResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize estimate")
}

/// Format the final answer line
pub fn format_story_points(points: u32, use_colors: bool) -> String {
    if use_colors {
        format!("Estimated story points: {}", format!("{} SP", points).green().bold())
    } else {
        format!("Estimated story points: {} SP", points)
    }
}
