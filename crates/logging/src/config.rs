//! crates/logging/src/config.rs
//! Verbosity configuration and `--debug` token parsing.

use super::levels::{DebugFlag, DebugLevels};

/// Complete verbosity configuration.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct VerbosityConfig {
    /// Per-flag debug levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create config from a `-v` count.
    ///
    /// - 0: everything silent
    /// - 1: registry and hash at level 2
    /// - 2: hash raised to 3, io enabled at 3
    /// - 3+: every flag at 3
    #[must_use]
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        if level >= 1 {
            config.debug.registry = 2;
            config.debug.hash = 2;
        }

        if level >= 2 {
            config.debug.hash = 3;
            config.debug.io = 3;
        }

        if level >= 3 {
            config.debug.set_all(3);
        }

        config
    }

    /// Apply a debug flag token such as `hash2`, `io`, `ALL` or `NONE`.
    ///
    /// A token without digits enables the flag at level 1.
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        match name {
            "ALL" | "all" => self.debug.set_all(level),
            "NONE" | "none" => self.debug.set_all(0),
            _ => match DebugFlag::from_name(name) {
                Some(flag) => self.debug.set(flag, level),
                None => return Err(format!("unknown debug flag: {name}")),
            },
        }
        Ok(())
    }

    /// Apply a comma-separated list of debug tokens, stopping at the first error.
    pub fn apply_debug_flags(&mut self, list: &str) -> Result<(), String> {
        list.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .try_for_each(|token| self.apply_debug_flag(token))
    }

    /// Renders the configuration as a `tracing_subscriber` filter string.
    ///
    /// Events outside the crate's targets stay at `warn`.
    #[must_use]
    pub fn directives(&self) -> String {
        let mut directives = String::from("warn");
        for flag in DebugFlag::ALL {
            directives.push(',');
            directives.push_str(flag.target());
            directives.push('=');
            directives.push_str(level_to_directive(self.debug.get(flag)));
        }
        directives
    }
}

const fn level_to_directive(level: u8) -> &'static str {
    match level {
        0 => "off",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Split a token like `hash2` into `("hash", 2)`.
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_owned());
    }

    let digit_pos = token.find(|c: char| c.is_ascii_digit());

    match digit_pos {
        Some(pos) => {
            let name = &token[..pos];
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((name, level))
        }
        None => Ok((token, 1)),
    }
}
