//! Cleaning plan files.
//!
//! A plan is a list of `[[rules]]`, each naming a transform `kind`, its
//! parameters and the columns it applies to:
//!
//! ```toml
//! [[rules]]
//! columns = ["phone", "fax"]
//! transform = { kind = "phone", min_digits = 9 }
//!
//! [[rules]]
//! columns = ["price"]
//! transform = { kind = "monetary" }
//! ```
//!
//! Files ending in `.json` are read as JSON with the same shape.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tidy_normalization::CleaningPlan;

/// Transform kinds with a one-line description, in listing order.
pub const TRANSFORM_CATALOG: [(&str, &str); 9] = [
    ("phone", "Keep digits only; too few digits becomes empty"),
    ("monetary", "Currency text to a number; (50) is -50"),
    ("percentage", "\"50%\" to 0.5; --lenient accepts bare decimals"),
    ("email", "Lowercase and check the address shape"),
    ("url", "Strip scheme, www. and one trailing slash"),
    ("scientific", "Scientific notation or decimal to a finite number"),
    ("roman", "Canonical roman numeral (I..MMMCMXCIX) to an integer"),
    ("encrypt", "Toy XOR cipher to hex; renames the column to <name>_encrypted"),
    ("decrypt", "Reverse of encrypt; strips the _encrypted suffix"),
];

/// Load a cleaning plan from a TOML or JSON file.
pub fn load_plan(path: &Path) -> Result<CleaningPlan> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read plan {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let plan: CleaningPlan = if is_json {
        serde_json::from_str(&text).with_context(|| format!("parse plan {}", path.display()))?
    } else {
        toml::from_str(&text).with_context(|| format!("parse plan {}", path.display()))?
    };
    tracing::debug!(
        path = %path.display(),
        rules = plan.rules.len(),
        "Loaded cleaning plan"
    );
    Ok(plan)
}
