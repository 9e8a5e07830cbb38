// mod.rs - CLI module

pub mod command;
pub mod error;
pub mod flags;
pub mod gen;
pub mod usage;

// Re-export main types for convenience
pub use command::Command;
pub use error::UsageError;
pub use flags::{FlagError, FlagSet, Strings};
pub use gen::parse_gen;
pub use usage::usage;

/// Parse a full argument vector, `args[0]` being the invoked command name
pub fn parse(args: &[String]) -> Result<Command, UsageError> {
    let Some((cmd, rest)) = args.split_first() else {
        return Err(UsageError::new("invalid args", "unknown"));
    };

    // Only the implicit help flag exists at this level
    let mut fs = FlagSet::new(cmd);
    if let Err(e) = fs.parse(rest) {
        if e.is_help() {
            return Ok(Command::Help { usage: usage(cmd) });
        }
        return Err(UsageError::new(e.to_string(), cmd));
    }

    let Some((sub, sub_args)) = fs.args().split_first() else {
        return Err(UsageError::new("missing command", cmd));
    };
    log::debug!("{}: dispatching sub-command {:?}", cmd, sub);

    match sub.as_str() {
        "gen" => parse_gen(cmd, sub_args),
        "version" => Ok(Command::Version),
        "help" => Ok(Command::Help { usage: usage(cmd) }),
        other => Err(UsageError::new(format!("unknown command {}", other), cmd)),
    }
}
