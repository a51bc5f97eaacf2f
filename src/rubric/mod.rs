pub mod engine;
pub mod schema;
pub mod validation;

pub use engine::{performance_level, score, CategoryScore, Rubric, ScoreReport};
pub use schema::{
    BonusRules, CategoryDef, IndicatorDef, PenaltyRules, RubricDefinition, SubcriterionDef,
};
pub use validation::validate_rubric;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Default rubric file path (~/.config/debate-score/rubric.yaml)
pub fn default_rubric_path() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("debate-score").join("rubric.yaml")
}

/// Load a rubric definition from a YAML file.
///
/// With an explicit path the file must exist. Without one, the default path
/// is used when present; otherwise the built-in rubric definition is
/// returned, matching how the scorer ships usable out of the box.
///
/// # Errors
///
/// Returns an error if an explicitly named file does not exist, cannot be
/// read, or contains invalid YAML. Semantic validation happens separately in
/// [`Rubric::new`].
pub fn load_definition(path: Option<PathBuf>) -> Result<RubricDefinition> {
    let (rubric_path, explicit) = match path {
        Some(p) => (p, true),
        None => (default_rubric_path(), false),
    };

    if !rubric_path.exists() {
        if explicit {
            anyhow::bail!("Rubric file not found at {}", rubric_path.display());
        }
        return Ok(RubricDefinition::default());
    }

    let contents = fs::read_to_string(&rubric_path)
        .with_context(|| format!("Failed to read rubric file at {}", rubric_path.display()))?;

    let definition: RubricDefinition = serde_saphyr::from_str(&contents).with_context(|| {
        format!(
            "Failed to parse rubric: invalid YAML in {}",
            rubric_path.display()
        )
    })?;

    Ok(definition)
}
