//! Ignore patterns identifying files that are copied byte-for-byte instead of
//! being rendered. The default set matches common raster image formats, which
//! would be corrupted by a templating pass.

use crate::error::{Error, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// Patterns applied when the caller does not configure their own.
pub const DEFAULT_RAW_COPY_PATTERNS: [&str; 8] = [
    "*.png", "*.jpg", "*.jpeg", "*.gif", "*.bmp", "*.ico", "*.webp", "*.tiff",
];

/// Compiles a list of glob patterns into a matcher.
///
/// Matching is case-insensitive, so `LOGO.PNG` is treated the same as
/// `logo.png`. Patterns match anywhere in the relative path
/// (`*.png` matches `assets/logo.png`).
pub fn build_raw_copy_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .literal_separator(false)
            .build()
            .map_err(|e| Error::ConfigError(format!("invalid ignore pattern '{pattern}': {e}")))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| Error::ConfigError(format!("ignore pattern set failed to compile: {e}")))
}

/// The default matcher used when no patterns are configured.
pub fn default_raw_copy_set() -> Result<GlobSet> {
    let patterns: Vec<String> =
        DEFAULT_RAW_COPY_PATTERNS.iter().map(|s| s.to_string()).collect();
    build_raw_copy_set(&patterns)
}
