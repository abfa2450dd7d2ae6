//! Handler identifier resolution.
//!
//! Pure string transformations from a dotted handler identifier (for
//! example `path/to/app.handler`) to candidate file paths under the
//! deployment root. No I/O happens here; the presence probe lives in
//! [`crate::checks`].

use crate::runtime::{ModuleSplit, RuntimeConfig};

/// Strip the method name from a generic handler identifier.
///
/// Legacy runtimes spell the module path and method with the same `.`
/// separator, so every `.` is a segment boundary: the final segment is the
/// method and the rest rejoin with `/`. An identifier without a `.` has no
/// module path and yields the empty string.
pub fn strip_method(handler: &str) -> String {
    let segments: Vec<&str> = handler.split('.').collect();
    segments[..segments.len() - 1].join("/")
}

/// Strip the method name from a Node handler identifier.
///
/// Node allows `.` in directory names, so only the basename is split: the
/// directory prefix is preserved as written and the basename is truncated at
/// its first `.`.
pub fn strip_method_node(handler: &str) -> String {
    let (dir, basename) = match handler.rfind('/') {
        Some(idx) => handler.split_at(idx + 1),
        None => ("", handler),
    };

    let module = basename.split('.').next().unwrap_or_default();
    format!("{dir}{module}")
}

/// Apply the runtime's splitting rule.
pub fn strip_method_for(runtime: &RuntimeConfig, handler: &str) -> String {
    match runtime.split {
        ModuleSplit::Generic => strip_method(handler),
        ModuleSplit::Node => strip_method_node(handler),
    }
}

/// Assemble a candidate file path under the deployment root.
///
/// The root is a POSIX-style absolute directory without a trailing
/// separator; assembly is plain concatenation with no normalization.
pub fn format_candidate(task_root: &str, module: &str, extension: &str) -> String {
    format!("{task_root}/{module}.{extension}")
}

/// All candidate file paths for a handler under the given runtime, in the
/// runtime's extension preference order.
pub fn candidates(runtime: &RuntimeConfig, task_root: &str, handler: &str) -> Vec<String> {
    let module = strip_method_for(runtime, handler);
    runtime
        .extensions
        .iter()
        .map(|ext| format_candidate(task_root, &module, ext))
        .collect()
}
