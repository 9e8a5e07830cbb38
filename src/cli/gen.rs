// gen.rs - Arguments of the `gen` sub-command

use super::command::Command;
use super::error::UsageError;
use super::flags::FlagSet;
use super::usage::usage;
use crate::config::{
    GenerateConfig, RawLines, TransformerRegistry, COMMAND_LINE_LOCATION, DEFAULT_BUILD_TAGS,
    DEFAULT_OUTPUT_CONSTRAINT, DEFAULT_WORKING_DIR,
};

/// Parse the tokens following `gen`: options first, then at least one pattern
pub fn parse_gen(cmd: &str, args: &[String]) -> Result<Command, UsageError> {
    let mut fs = FlagSet::new(cmd);

    let global = fs.strings();
    fs.bind("global", global);
    fs.bind("g", global);

    let build_tags = fs.string("build-tags", DEFAULT_BUILD_TAGS);
    let output_constraint = fs.string("output-constraint", DEFAULT_OUTPUT_CONSTRAINT);
    let cwd = fs.string("cwd", DEFAULT_WORKING_DIR);

    if let Err(e) = fs.parse(args) {
        if e.is_help() {
            return Ok(Command::Help { usage: usage(cmd) });
        }
        return Err(UsageError::new(e.to_string(), cmd));
    }

    let patterns = fs.args();
    if patterns.is_empty() {
        return Err(UsageError::new("missing PATTERN", cmd));
    }

    let config = GenerateConfig {
        package_patterns: patterns.to_vec(),
        build_tags: fs.value(build_tags).to_string(),
        output_build_constraint: fs.value(output_constraint).to_string(),
        working_dir: fs.value(cwd).to_string(),
        global: RawLines::new(fs.values(global).to_vec(), COMMAND_LINE_LOCATION),
        enum_transformers: TransformerRegistry::new(),
    };
    log::debug!(
        "gen: {} pattern(s), {} global line(s)",
        config.package_patterns.len(),
        config.global.lines.len()
    );

    Ok(Command::Generate {
        config: Box::new(config),
    })
}
