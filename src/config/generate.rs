// generate.rs - Configuration handed to the generation engine

use serde::{Deserialize, Serialize};

use super::transformers::TransformerRegistry;

pub const DEFAULT_BUILD_TAGS: &str = "goverter";
pub const DEFAULT_OUTPUT_CONSTRAINT: &str = "!goverter";
pub const DEFAULT_WORKING_DIR: &str = "";

/// Provenance label for setting lines given with `-g`/`-global`
pub const COMMAND_LINE_LOCATION: &str = "command line (-g, -global)";

/// Raw setting lines together with where they came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLines {
    pub lines: Vec<String>,
    /// Only used to attribute diagnostics
    pub location: String,
}

impl RawLines {
    pub fn new(lines: Vec<String>, location: &str) -> Self {
        Self {
            lines,
            location: location.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Package selectors, never empty when produced by the parser
    pub package_patterns: Vec<String>,
    pub build_tags: String,
    pub output_build_constraint: String,
    pub working_dir: String,
    // Kept after the plain values so the TOML rendering stays valid
    pub global: RawLines,
    #[serde(skip)]
    pub enum_transformers: TransformerRegistry,
}

impl GenerateConfig {
    /// Configuration with defaults for everything but the patterns
    pub fn new(package_patterns: Vec<String>) -> Self {
        Self {
            package_patterns,
            build_tags: DEFAULT_BUILD_TAGS.to_string(),
            output_build_constraint: DEFAULT_OUTPUT_CONSTRAINT.to_string(),
            working_dir: DEFAULT_WORKING_DIR.to_string(),
            global: RawLines::new(Vec::new(), COMMAND_LINE_LOCATION),
            enum_transformers: TransformerRegistry::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
