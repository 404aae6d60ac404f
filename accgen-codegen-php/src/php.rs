//! Small PHP syntax helpers.

use std::path::{Path, PathBuf};

use accgen_ir::NAMESPACE_SEPARATOR;

/// Banner placed below `<?php` in every generated file.
pub const GENERATED_HEADER: &str =
    "// Generated by accgen. Do not edit, changes are overwritten on the next run.";

/// Render `value` as a single-quoted PHP string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Directory generated artifacts of a class directory are written to.
///
/// Each segment of the generated sub-namespace becomes one directory level.
pub(crate) fn generated_dir(base: &Path, directory: &Path, generated_namespace: &str) -> PathBuf {
    generated_namespace
        .split(NAMESPACE_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .fold(base.join(directory), |path, segment| path.join(segment))
}
