pub mod formatter;

pub use formatter::{
    format_json, format_number, format_report, format_slice_breakdown, format_story_points,
    format_task_summary, should_use_colors,
};
