#![cfg(feature = "std")]

//! Stderr logger configured from `SEA_BATTLE_LOG`.
//!
//! The variable holds comma separated directives, each either a bare level
//! (`debug`) or `module=level` (`sea_battle::placement=trace`). A bare level
//! applies to the game's own modules; records from other crates are never let
//! through below `warn` unless a directive names them.

use log::{self, LevelFilter, Metadata, Record};
use std::{env, sync::OnceLock};

const ENV_VAR: &str = "SEA_BATTLE_LOG";

/// Targets the bare level applies to: the library and both binaries.
const OWN_TARGETS: [&str; 2] = ["sea_battle", "sim"];

/// Per-module levels parsed from a directive string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    default: LevelFilter,
    modules: Vec<(String, LevelFilter)>,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            default: LevelFilter::Warn,
            modules: Vec::new(),
        }
    }
}

impl LogFilter {
    /// Parse `directives`. Unknown levels and empty entries are skipped.
    pub fn parse(directives: &str) -> Self {
        let mut filter = Self::default();
        for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.split_once('=') {
                Some((module, level)) => {
                    if let Ok(level) = level.trim().parse() {
                        filter.modules.push((module.trim().into(), level));
                    }
                }
                None => {
                    if let Ok(level) = directive.parse() {
                        filter.default = level;
                    }
                }
            }
        }
        filter
    }

    /// Level in force for records from `target`. The longest matching
    /// module directive wins.
    pub fn level_for(&self, target: &str) -> LevelFilter {
        let named = self
            .modules
            .iter()
            .filter(|(module, _)| covers(module, target))
            .max_by_key(|(module, _)| module.len())
            .map(|&(_, level)| level);
        match named {
            Some(level) => level,
            None if OWN_TARGETS.iter().any(|own| covers(own, target)) => self.default,
            None => self.default.min(LevelFilter::Warn),
        }
    }

    /// Most verbose level any target can reach.
    pub fn max_level(&self) -> LevelFilter {
        self.modules
            .iter()
            .map(|&(_, level)| level)
            .fold(self.default, Ord::max)
    }
}

/// `module` is `target` itself or one of its parents.
fn covers(module: &str, target: &str) -> bool {
    target
        .strip_prefix(module)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

/// Writes to stderr so log lines never land inside a drawn board.
struct StderrLogger {
    filter: OnceLock<LogFilter>,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.filter
            .get()
            .is_some_and(|filter| metadata.level() <= filter.level_for(metadata.target()))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger {
    filter: OnceLock::new(),
};

/// Filter described by `SEA_BATTLE_LOG`, `warn` everywhere when the variable
/// is unset.
pub fn log_filter_from_env() -> LogFilter {
    env::var(ENV_VAR)
        .map(|directives| LogFilter::parse(&directives))
        .unwrap_or_default()
}

/// Install the logger. Calling it again is harmless.
pub fn init_logging() {
    let filter = LOGGER.filter.get_or_init(log_filter_from_env);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(filter.max_level()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_applies_to_own_modules_only() {
        let filter = LogFilter::parse("debug");
        assert_eq!(filter.level_for("sea_battle::placement"), LevelFilter::Debug);
        assert_eq!(filter.level_for("sim"), LevelFilter::Debug);
        assert_eq!(filter.level_for("rand::rngs"), LevelFilter::Warn);
        assert_eq!(filter.max_level(), LevelFilter::Debug);
    }

    #[test]
    fn longest_module_directive_wins() {
        let filter = LogFilter::parse("info, sea_battle=warn, sea_battle::player=trace");
        assert_eq!(filter.level_for("sea_battle::player"), LevelFilter::Trace);
        assert_eq!(filter.level_for("sea_battle::board"), LevelFilter::Warn);
        assert_eq!(filter.level_for("sea_battle_extra"), LevelFilter::Warn);
        assert_eq!(filter.level_for("sim"), LevelFilter::Info);
        assert_eq!(filter.max_level(), LevelFilter::Trace);
    }

    #[test]
    fn foreign_crates_can_be_named() {
        let filter = LogFilter::parse("clap=debug");
        assert_eq!(filter.level_for("clap::builder"), LevelFilter::Debug);
        assert_eq!(filter.level_for("sea_battle"), LevelFilter::Warn);
    }

    #[test]
    fn junk_falls_back_to_warn() {
        assert_eq!(LogFilter::parse("loud,,x=y"), LogFilter::default());
        assert_eq!(LogFilter::parse("").level_for("sea_battle"), LevelFilter::Warn);
    }
}
