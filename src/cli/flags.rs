// flags.rs - Single-dash flag set with aliasable accumulators

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Failures reported while walking the flag tokens.
///
/// `Help` is not a failure from the user's point of view: callers must
/// check for it before turning anything else into a usage error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    #[error("flag: help requested")]
    Help,
    #[error("bad flag syntax: {0}")]
    BadSyntax(String),
    #[error("flag provided but not defined: -{0}")]
    Undefined(String),
    #[error("flag needs an argument: -{0}")]
    MissingValue(String),
}

impl FlagError {
    pub fn is_help(&self) -> bool {
        matches!(self, FlagError::Help)
    }
}

/// Ordered, append-only accumulator for repeatable flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Strings(Vec<String>);

impl Strings {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.0.push(value.into());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for Strings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(" "))
    }
}

/// Handle to a single-valued string flag declared on a [`FlagSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringFlag(usize);

/// Handle to an accumulator slot; any number of flag names can be bound to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFlag(usize);

#[derive(Debug)]
enum Slot {
    Single(String),
    List(Strings),
}

impl Slot {
    fn set(&mut self, value: String) {
        match self {
            Slot::Single(current) => *current = value,
            Slot::List(values) => values.push(value),
        }
    }
}

/// Per-call flag table.
///
/// Flags are written as `-name value`, `-name=value` or with two dashes.
/// Parsing stops at the first token that is not a flag, or right after a
/// bare `--`; whatever follows is left in [`FlagSet::args`]. Undeclared
/// `-h`/`-help` are reported as [`FlagError::Help`].
#[derive(Debug)]
pub struct FlagSet {
    name: String,
    slots: Vec<Slot>,
    lookup: HashMap<String, usize>,
    args: Vec<String>,
}

enum Step<'a> {
    Continue(&'a [String]),
    Stop(&'a [String]),
}

impl FlagSet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slots: Vec::new(),
            lookup: HashMap::new(),
            args: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare a string flag that keeps its last value, starting at `default`
    pub fn string(&mut self, name: &str, default: &str) -> StringFlag {
        let slot = self.push_slot(Slot::Single(default.to_string()));
        self.bind_name(name, slot);
        StringFlag(slot)
    }

    /// Create an empty accumulator. Bind names to it with [`FlagSet::bind`].
    pub fn strings(&mut self) -> ListFlag {
        ListFlag(self.push_slot(Slot::List(Strings::new())))
    }

    /// Register `name` as another spelling that appends to `list`
    pub fn bind(&mut self, name: &str, list: ListFlag) {
        self.bind_name(name, list.0);
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), FlagError> {
        let mut remaining = args;
        loop {
            match self.parse_one(remaining)? {
                Step::Continue(rest) => remaining = rest,
                Step::Stop(rest) => {
                    self.args = rest.to_vec();
                    return Ok(());
                }
            }
        }
    }

    /// Arguments left over after the flags
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn value(&self, flag: StringFlag) -> &str {
        match self.slots.get(flag.0) {
            Some(Slot::Single(value)) => value,
            _ => "",
        }
    }

    pub fn values(&self, flag: ListFlag) -> &[String] {
        match self.slots.get(flag.0) {
            Some(Slot::List(values)) => values.as_slice(),
            _ => &[],
        }
    }

    fn push_slot(&mut self, slot: Slot) -> usize {
        self.slots.push(slot);
        self.slots.len() - 1
    }

    fn bind_name(&mut self, name: &str, slot: usize) {
        debug_assert!(
            !self.lookup.contains_key(name),
            "{}: flag redefined: {}",
            self.name,
            name
        );
        self.lookup.insert(name.to_string(), slot);
    }

    fn parse_one<'a>(&mut self, args: &'a [String]) -> Result<Step<'a>, FlagError> {
        let Some((token, rest)) = args.split_first() else {
            return Ok(Step::Stop(args));
        };
        if token.len() < 2 || !token.starts_with('-') {
            return Ok(Step::Stop(args));
        }

        let dashes = if token.starts_with("--") {
            if token.len() == 2 {
                // "--" terminates the flags and is itself dropped
                return Ok(Step::Stop(rest));
            }
            2
        } else {
            1
        };

        let body = &token[dashes..];
        if body.starts_with('-') || body.starts_with('=') {
            return Err(FlagError::BadSyntax(token.clone()));
        }

        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let Some(&slot) = self.lookup.get(name) else {
            if name == "help" || name == "h" {
                return Err(FlagError::Help);
            }
            return Err(FlagError::Undefined(name.to_string()));
        };

        let (value, rest) = match inline {
            Some(value) => (value.to_string(), rest),
            None => match rest.split_first() {
                Some((value, tail)) => (value.clone(), tail),
                None => return Err(FlagError::MissingValue(name.to_string())),
            },
        };

        log::debug!("{}: -{} = {:?}", self.name, name, value);
        self.slots[slot].set(value);
        Ok(Step::Continue(rest))
    }
}
