// command.rs - Parse outcome handed to the host

use crate::config::GenerateConfig;

/// What the host should do next
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the generator with this configuration
    Generate { config: Box<GenerateConfig> },
    /// Print the usage text and exit successfully
    Help { usage: String },
    /// Print version information and exit successfully
    Version,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Generate { .. } => "gen",
            Command::Help { .. } => "help",
            Command::Version => "version",
        }
    }

    pub fn config(&self) -> Option<&GenerateConfig> {
        match self {
            Command::Generate { config } => Some(config.as_ref()),
            _ => None,
        }
    }
}
