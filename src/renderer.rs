//! Template rendering for Stencil, built on MiniJinja.
//! The same engine renders file names (ad-hoc template strings) and file
//! contents (named templates resolved against the template root plus optional
//! partial/layout search directories).

use crate::error::{Error, Result};
use minijinja::{Environment, UndefinedBehavior};
use std::path::{Path, PathBuf};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;

    /// Renders a template file, resolved against the configured search
    /// paths, with the given context.
    fn render_file(&self, relative_path: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
///
/// Undefined variables are a hard error rather than an empty string, so a
/// typo in a template fails the affected file instead of silently producing
/// broken output.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates an engine without file-resolution roots. `render_file` on such
    /// an engine fails for every path; use [`MiniJinjaRenderer::with_search_paths`]
    /// when file contents need to be rendered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }

    /// Creates an engine that resolves named template files against `root`
    /// first, then each partials directory, then each layouts directory, in
    /// order. The first existing file wins.
    pub fn with_search_paths(
        root: &Path,
        partials: &[PathBuf],
        layouts: &[PathBuf],
    ) -> Self {
        let mut search_paths = vec![root.to_path_buf()];
        search_paths.extend_from_slice(partials);
        search_paths.extend_from_slice(layouts);

        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_loader(move |name| {
            for search_path in &search_paths {
                let candidate = search_path.join(name);
                if candidate.is_file() {
                    return match std::fs::read_to_string(&candidate) {
                        Ok(source) => Ok(Some(source)),
                        Err(err) => Err(minijinja::Error::new(
                            minijinja::ErrorKind::InvalidOperation,
                            format!("could not read template '{}'", candidate.display()),
                        )
                        .with_source(err)),
                    };
                }
            }
            Ok(None)
        });

        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env.render_str(template, context).map_err(Error::MinijinjaError)
    }

    fn render_file(&self, relative_path: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(relative_path).map_err(Error::MinijinjaError)?;
        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_string() {
        let engine = MiniJinjaRenderer::new();
        let context = serde_json::json!({ "name": "test", "value": 42 });

        let result = engine.render("Hello {{ name }}!", &context).unwrap();
        assert_eq!(result, "Hello test!");

        let result = engine.render("Value: {{ value }}", &context).unwrap();
        assert_eq!(result, "Value: 42");
    }

    #[test]
    fn test_undefined_variable_is_an_error() {
        let engine = MiniJinjaRenderer::new();
        let context = serde_json::json!({});
        assert!(engine.render("{{ missing }}", &context).is_err());
    }

    #[test]
    fn test_truthiness_of_empty_values() {
        let engine = MiniJinjaRenderer::new();
        let context = serde_json::json!({ "empty": "", "zero": 0, "no": false });

        let rendered = engine
            .render(
                "{% if empty %}e{% endif %}{% if zero %}z{% endif %}{% if no %}n{% endif %}ok",
                &context,
            )
            .unwrap();
        assert_eq!(rendered, "ok");
    }

    #[test]
    fn test_render_file_searches_roots_in_order() {
        let root = tempfile::TempDir::new().unwrap();
        let partials = tempfile::TempDir::new().unwrap();
        std::fs::write(partials.path().join("greeting.txt"), "Hi {{ name }}").unwrap();

        let engine = MiniJinjaRenderer::with_search_paths(
            root.path(),
            &[partials.path().to_path_buf()],
            &[],
        );
        let context = serde_json::json!({ "name": "Ada" });

        let rendered = engine.render_file("greeting.txt", &context).unwrap();
        assert_eq!(rendered, "Hi Ada");

        assert!(engine.render_file("nope.txt", &context).is_err());
    }
}
