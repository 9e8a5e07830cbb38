// lib.rs - goverter-cli library root

//! # goverter-cli - Command line front-end for the goverter converter generator
//!
//! Turns a process argument vector into a [`Command`]: generate with a
//! [`GenerateConfig`], show help, or show version. The generator itself is
//! not part of this crate; it receives the configuration.
//!
//! ## Basic Usage
//!
//! ```rust
//! use goverter_cli::prelude::*;
//!
//! let args: Vec<String> = ["goverter", "gen", "-g", "skipCopySameType", "./example/..."]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! match parse(&args)? {
//!     Command::Generate { config } => {
//!         assert_eq!(config.package_patterns, vec!["./example/..."]);
//!         assert_eq!(config.global.lines, vec!["skipCopySameType"]);
//!     }
//!     Command::Help { usage } => println!("{}", usage),
//!     Command::Version => println!("{}", get_info()),
//! }
//! # Ok::<(), UsageError>(())
//! ```

pub mod cli;
pub mod config;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{parse, parse_gen, usage, Command, UsageError};
    pub use crate::config::{EnumTransformer, GenerateConfig, RawLines, TransformerRegistry};
    pub use crate::get_info;
}

// Re-export main types at the root level for convenience
pub use cli::{parse, usage, Command, UsageError};
pub use config::{GenerateConfig, RawLines};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version line printed by `version`
pub fn get_info() -> String {
    format!("goverter-cli v{}", VERSION)
}
