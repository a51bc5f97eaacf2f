pub mod formatter;

pub use formatter::{
    format_evaluation, format_feedback, format_profile, format_report, should_use_colors,
};
