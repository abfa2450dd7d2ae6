//! Runtime registry.
//!
//! Each supported language runtime gets one static [`RuntimeConfig`] record
//! describing how its handlers are spelled on disk: which wrapper handler the
//! layer injects, which file extensions a handler module may carry, and which
//! splitting rule turns the dotted handler identifier into a module path.
//! Adding a runtime means adding one record here.

use std::fmt;
use std::path::Path;

/// Directory where the managed platform installs the language runtime.
pub const DEFAULT_LANG_BIN: &str = "/var/lang/bin";

/// Supported language runtimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Runtime {
    Node,
    Python,
}

impl Runtime {
    /// Tag used in runtime binary names (`node18`, `python3.12`, ...).
    pub fn tag(&self) -> &'static str {
        match self {
            Runtime::Node => "node",
            Runtime::Python => "python",
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Runtime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "node" | "nodejs" => Ok(Runtime::Node),
            "python" => Ok(Runtime::Python),
            other => Err(format!("unknown runtime '{other}'")),
        }
    }
}

/// How a dotted handler identifier maps to a module path on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleSplit {
    /// Every `.` separates path segments; the final segment is the method.
    Generic,
    /// `/` separates directories; only the basename is split on `.`.
    Node,
}

/// Static per-runtime descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Language this record describes.
    pub language: Runtime,

    /// Handler identifier the layer injects when correctly attached.
    pub wrapper_name: &'static str,

    /// Canonical on-disk extension. Informational for Node, where several
    /// extensions are acceptable; see `extensions`.
    pub file_type: &'static str,

    /// Candidate extensions probed for handler presence, in preference order.
    pub extensions: &'static [&'static str],

    /// Splitting rule for this runtime's handler identifiers.
    pub split: ModuleSplit,
}

static NODE: RuntimeConfig = RuntimeConfig {
    language: Runtime::Node,
    wrapper_name: "newrelic-lambda-wrapper.handler",
    file_type: "js",
    extensions: &["js", "cjs", "mjs"],
    split: ModuleSplit::Node,
};

static PYTHON: RuntimeConfig = RuntimeConfig {
    language: Runtime::Python,
    wrapper_name: "newrelic_lambda_wrapper.handler",
    file_type: "py",
    extensions: &["py"],
    split: ModuleSplit::Generic,
};

static REGISTRY: [&RuntimeConfig; 2] = [&NODE, &PYTHON];

/// All registered runtimes.
pub fn all() -> &'static [&'static RuntimeConfig] {
    &REGISTRY
}

/// Look up the record for a runtime tag.
pub fn config_for(runtime: Runtime) -> &'static RuntimeConfig {
    match runtime {
        Runtime::Node => &NODE,
        Runtime::Python => &PYTHON,
    }
}

/// Detect the active runtime by probing the language installation.
///
/// The platform installs the runtime binary under `lang_bin` with a name
/// starting with the runtime tag (`node18`, `python3.12`). Returns `None`
/// for an unrecognized or absent installation, which callers treat as
/// "unknown runtime, skip validation".
pub fn detect(lang_bin: &Path) -> Option<&'static RuntimeConfig> {
    let entries = std::fs::read_dir(lang_bin).ok()?;

    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        for config in all() {
            if name.starts_with(config.language.tag()) {
                return Some(config);
            }
        }
    }

    None
}
