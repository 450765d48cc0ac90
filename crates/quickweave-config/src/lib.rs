//! Layered configuration for the quickweave toolchain.
//!
//! Settings resolve in the usual `ortho_config` order: built-in defaults, then
//! the TOML file named by `--config-path` or `QUICKWEAVE_CONFIG_PATH`, then
//! `QUICKWEAVE_*` environment variables, and finally command-line flags.

mod defaults;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use self::defaults::{
    DEFAULT_LANGUAGE_LEVEL, DEFAULT_LOG_FILTER, DEFAULT_WEAVER_PROGRAM, default_java_program,
    default_language_level, default_log_filter, default_log_format, default_weaver_program,
};
pub use self::logging::{LogFormat, LogFormatParseError};

/// Resolved configuration shared by the library and the binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "QUICKWEAVE")]
pub struct Config {
    /// Executable used to launch the weaving compiler directly.
    #[ortho_config(default = defaults::default_weaver_program())]
    pub weaver_program: String,
    /// Launcher used when the compiler is run from an `aspectjtools` jar.
    #[ortho_config(default = defaults::default_java_program())]
    pub java_program: String,
    /// Path to `aspectjtools.jar`; when set the compiler runs on the JVM.
    #[serde(default)]
    pub aspectj_tools_jar: Option<String>,
    /// Language level passed through `-source`.
    #[ortho_config(default = defaults::default_language_level())]
    pub source_level: String,
    /// Language level passed through `-target`.
    #[ortho_config(default = defaults::default_language_level())]
    pub target_level: String,
    /// Additional archive name markers that select dependency archives.
    #[serde(default)]
    pub extra_archive_markers: Vec<String>,
    /// Tracing filter expression.
    #[ortho_config(default = defaults::default_log_filter_string())]
    pub log_filter: String,
    /// Log line format.
    #[ortho_config(default = defaults::default_log_format())]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weaver_program: default_weaver_program(),
            java_program: default_java_program(),
            aspectj_tools_jar: None,
            source_level: default_language_level(),
            target_level: default_language_level(),
            extra_archive_markers: Vec::new(),
            log_filter: defaults::default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Executable used to launch the weaving compiler directly.
    #[must_use]
    pub fn weaver_program(&self) -> &str {
        self.weaver_program.as_str()
    }

    /// Launcher used for the JVM-hosted compiler.
    #[must_use]
    pub fn java_program(&self) -> &str {
        self.java_program.as_str()
    }

    /// Location of `aspectjtools.jar`, when configured.
    #[must_use]
    pub fn aspectj_tools_jar(&self) -> Option<&str> {
        self.aspectj_tools_jar.as_deref()
    }

    /// Language level for `-source`.
    #[must_use]
    pub fn source_level(&self) -> &str {
        self.source_level.as_str()
    }

    /// Language level for `-target`.
    #[must_use]
    pub fn target_level(&self) -> &str {
        self.target_level.as_str()
    }

    /// Archive markers configured on top of the built-in set.
    #[must_use]
    pub fn extra_archive_markers(&self) -> &[String] {
        &self.extra_archive_markers
    }

    /// Tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Log line format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}
