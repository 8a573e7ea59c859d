//! Fixed lookup tables that decide which files count toward the formatter gate.

use std::ffi::OsStr;
use std::path::Path;

/// File suffixes the formatter is expected to handle, leading dot included.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".mjs", ".cjs", ".ts", ".tsx", ".mts", ".cts", ".json", ".css", ".scss",
    ".less", ".html", ".vue", ".md", ".mdx", ".yaml", ".yml", ".graphql",
];

/// Directory basenames never descended into.
pub const IGNORED_DIR_NAMES: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "coverage",
    ".next",
    ".nuxt",
    "out",
    "target",
    ".cache",
    ".turbo",
    "vendor",
];

/// Whether `path` ends in an allowed suffix. Case-sensitive.
///
/// Dotfiles such as `.ts` have no extension and never match.
pub fn has_allowed_extension(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(OsStr::to_str) else {
        return false;
    };
    ALLOWED_EXTENSIONS
        .iter()
        .any(|allowed| allowed.strip_prefix('.') == Some(ext))
}

pub fn is_ignored_dir(name: &OsStr) -> bool {
    name.to_str()
        .is_some_and(|name| IGNORED_DIR_NAMES.contains(&name))
}
