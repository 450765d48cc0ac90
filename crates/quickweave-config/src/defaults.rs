//! Built-in configuration defaults.

/// Executable name of the stand-alone weaving compiler.
pub const DEFAULT_WEAVER_PROGRAM: &str = "ajc";

/// Language level used for both `-source` and `-target`.
pub const DEFAULT_LANGUAGE_LEVEL: &str = "1.7";

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "info";

const DEFAULT_JAVA_PROGRAM: &str = "java";

/// Owned weaver program name used where allocation is required (e.g. serde).
#[must_use]
pub fn default_weaver_program() -> String {
    DEFAULT_WEAVER_PROGRAM.to_owned()
}

/// JVM launcher used when the compiler runs from `aspectjtools.jar`.
#[must_use]
pub fn default_java_program() -> String {
    DEFAULT_JAVA_PROGRAM.to_owned()
}

/// Owned default language level.
#[must_use]
pub fn default_language_level() -> String {
    DEFAULT_LANGUAGE_LEVEL.to_owned()
}

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

pub(crate) fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format. Build output is read by people, so lines stay compact.
#[must_use]
pub const fn default_log_format() -> crate::logging::LogFormat {
    crate::logging::LogFormat::Compact
}
