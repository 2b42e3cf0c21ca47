use crate::error::{CliError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use xtalscene::engine::policy::{ViewCategory, VisibilityPolicy};

/// Optional display configuration, merged underneath the command-line flags.
///
/// ```toml
/// [display]
/// bonds = false
/// hidden-elements = ["H"]
/// ```
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default)]
    pub display: DisplaySection,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct DisplaySection {
    /// Show atom spheres.
    pub atoms: Option<bool>,
    /// Show bond segments.
    pub bonds: Option<bool>,
    /// Show the unit-cell wireframe.
    pub unit_cell: Option<bool>,
    /// Elements hidden from the start.
    #[serde(default)]
    pub hidden_elements: Vec<String>,
}

impl DisplayConfig {
    /// Loads and parses a display configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Display configuration loaded.");
        Ok(config)
    }

    /// Applies the configuration to a policy already rebuilt for a structure.
    ///
    /// Unset options leave the policy untouched. Hidden elements that the
    /// structure does not contain are reported and skipped.
    pub fn apply(&self, policy: &mut VisibilityPolicy) {
        let section = &self.display;
        if let Some(atoms) = section.atoms {
            policy.set_category(ViewCategory::Atoms, atoms);
        }
        if let Some(bonds) = section.bonds {
            policy.set_category(ViewCategory::Bonds, bonds);
        }
        if let Some(unit_cell) = section.unit_cell {
            policy.set_category(ViewCategory::UnitCell, unit_cell);
        }
        for symbol in &section.hidden_elements {
            if !policy.set_element(symbol, false) {
                warn!(%symbol, "Configured hidden element not present in this structure; ignoring.");
            }
        }
    }
}
