//! Scaffold configuration.
//! A `ScaffoldConfig` is built once by the caller, resolved at the start of a
//! run and passed by reference into each component; only the answer mapping
//! and the hook contexts are mutable after that point.

use crate::error::Result;
use crate::hooks::{AfterContext, BeforeContext};
use crate::ignore::DEFAULT_RAW_COPY_PATTERNS;
use crate::prompt::QuestionRegistry;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Hook run before any file is written. Its return value REPLACES the answer
/// mapping wholesale; returning the context's answers unchanged is a no-op.
pub type BeforeCreationHook =
    Box<dyn Fn(&BeforeContext) -> Result<serde_json::Map<String, serde_json::Value>>>;

/// Hook run after every file has been written.
pub type AfterCreationHook = Box<dyn Fn(&AfterContext) -> Result<()>>;

/// Caller hook to customize the question registry before prompting.
pub type SetupQuestions = Box<dyn Fn(&mut QuestionRegistry) -> Result<()>>;

/// Remaps the caller-given creation path to the effective one. Applied
/// exactly once, before resolution.
pub type RemapCreatePath = Box<dyn Fn(&Path) -> PathBuf>;

/// Everything a scaffold run needs besides the command-line input.
pub struct ScaffoldConfig {
    /// Directory to look up template folders in
    pub templates_directory: PathBuf,
    /// Prefix for the template folder names
    pub templates_prefix: String,
    /// Template used when none is selected
    pub default_template: String,
    /// Which registered questions to ask, in order. `None` asks all of them
    /// in registration order.
    pub question_selectors: Option<Vec<String>>,
    /// Extra directories for resolving included templates
    pub partials: Vec<PathBuf>,
    /// Extra directories for resolving layout templates
    pub layouts: Vec<PathBuf>,
    /// Relative paths matching any of these globs are copied byte-for-byte
    /// instead of rendered
    pub raw_copy_patterns: Vec<String>,
    /// Suffix stripped from rendered output paths (marks "this file is a
    /// template" in the tree)
    pub template_suffix: String,
    pub remap_create_path: Option<RemapCreatePath>,
    pub setup_questions: Option<SetupQuestions>,
    pub before_creation_hook: Option<BeforeCreationHook>,
    pub after_creation_hook: Option<AfterCreationHook>,
}

impl ScaffoldConfig {
    pub fn new<P: AsRef<Path>>(templates_directory: P, default_template: &str) -> Self {
        Self {
            templates_directory: templates_directory.as_ref().to_path_buf(),
            templates_prefix: String::new(),
            default_template: default_template.to_string(),
            question_selectors: None,
            partials: Vec::new(),
            layouts: Vec::new(),
            raw_copy_patterns: DEFAULT_RAW_COPY_PATTERNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            template_suffix: ".liquid".to_string(),
            remap_create_path: None,
            setup_questions: None,
            before_creation_hook: None,
            after_creation_hook: None,
        }
    }

    pub fn with_templates_prefix(mut self, prefix: &str) -> Self {
        self.templates_prefix = prefix.to_string();
        self
    }

    pub fn with_question_selectors(mut self, selectors: Vec<String>) -> Self {
        self.question_selectors = Some(selectors);
        self
    }

    pub fn with_partials(mut self, partials: Vec<PathBuf>) -> Self {
        self.partials = partials;
        self
    }

    pub fn with_layouts(mut self, layouts: Vec<PathBuf>) -> Self {
        self.layouts = layouts;
        self
    }

    pub fn with_raw_copy_patterns(mut self, patterns: Vec<String>) -> Self {
        self.raw_copy_patterns = patterns;
        self
    }

    pub fn with_template_suffix(mut self, suffix: &str) -> Self {
        self.template_suffix = suffix.to_string();
        self
    }

    pub fn with_remap_create_path(mut self, remap: RemapCreatePath) -> Self {
        self.remap_create_path = Some(remap);
        self
    }

    pub fn with_setup_questions(mut self, setup: SetupQuestions) -> Self {
        self.setup_questions = Some(setup);
        self
    }

    pub fn with_before_creation_hook(mut self, hook: BeforeCreationHook) -> Self {
        self.before_creation_hook = Some(hook);
        self
    }

    pub fn with_after_creation_hook(mut self, hook: AfterCreationHook) -> Self {
        self.after_creation_hook = Some(hook);
        self
    }

    /// The read-only view hooks receive: the plain-data configuration with
    /// all hook-setup fields stripped.
    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            templates_directory: self.templates_directory.clone(),
            templates_prefix: self.templates_prefix.clone(),
            default_template: self.default_template.clone(),
            question_selectors: self.question_selectors.clone(),
            partials: self.partials.clone(),
            layouts: self.layouts.clone(),
            raw_copy_patterns: self.raw_copy_patterns.clone(),
            template_suffix: self.template_suffix.clone(),
        }
    }
}

/// Hook-visible scaffold configuration. Deliberately excludes the hook and
/// setup closures so hooks cannot re-enter the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSnapshot {
    pub templates_directory: PathBuf,
    pub templates_prefix: String,
    pub default_template: String,
    pub question_selectors: Option<Vec<String>>,
    pub partials: Vec<PathBuf>,
    pub layouts: Vec<PathBuf>,
    pub raw_copy_patterns: Vec<String>,
    pub template_suffix: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScaffoldConfig::new("./templates", "base");
        assert_eq!(config.templates_prefix, "");
        assert_eq!(config.template_suffix, ".liquid");
        assert!(config.raw_copy_patterns.contains(&"*.png".to_string()));
        assert!(config.before_creation_hook.is_none());
    }

    #[test]
    fn test_snapshot_is_serializable() {
        let config = ScaffoldConfig::new("./templates", "base").with_templates_prefix("tpl-");
        let snapshot = config.snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["templates_prefix"], "tpl-");
        assert_eq!(json["default_template"], "base");
    }
}
