//! Core scaffold orchestration.
//! Resolves paths, collects answers, runs the before/after hooks and drives
//! the render-and-write pipeline over every file in the template tree.

use crate::config::ScaffoldConfig;
use crate::error::{Error, Result};
use crate::hooks::{AfterContext, BeforeContext, HookContext};
use crate::ignore::build_raw_copy_set;
use crate::prompt::{Prompter, QuestionRegistry};
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use crate::walker::walk_template_dir;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Command-line level input to a scaffold run.
#[derive(Debug, Default)]
pub struct ScaffoldRun {
    /// Destination directory, as given by the caller
    pub create_path: Option<String>,
    /// Selected template name; falls back to the configured default
    pub template: Option<String>,
    /// Answers supplied up front; matching questions are not asked
    pub initial_answers: serde_json::Map<String, serde_json::Value>,
}

/// Fully resolved paths for one invocation. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub original_create_path: PathBuf,
    pub resolved_create_path: PathBuf,
    pub resolved_template_directory: PathBuf,
    pub template_name: String,
}

/// Resolves `path` to absolute form against the current working directory.
fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Fails when `create_path` exists and already contains entries. A missing
/// directory is fine; it is created later.
pub fn ensure_create_path_empty(create_path: &Path) -> Result<()> {
    if create_path.exists() && fs::read_dir(create_path)?.next().is_some() {
        return Err(Error::CreatePathNotEmpty {
            create_path: create_path.display().to_string(),
        });
    }
    Ok(())
}

/// Resolves the creation paths and template directory for one run.
///
/// The caller-supplied remap function is applied exactly once, before
/// resolution. The selected template directory is
/// `{templates_directory}/{templates_prefix}{template}` and must exist.
pub fn resolve_request(config: &ScaffoldConfig, run: &ScaffoldRun) -> Result<ScaffoldRequest> {
    let create_path = run.create_path.as_deref().ok_or(Error::NoCreatePath)?;
    let original = PathBuf::from(create_path);

    let remapped = match &config.remap_create_path {
        Some(remap) => remap(&original),
        None => original.clone(),
    };

    let original_create_path = absolutize(&original)?;
    let resolved_create_path = absolutize(&remapped)?;

    ensure_create_path_empty(&resolved_create_path)?;
    fs::create_dir_all(&resolved_create_path)?;

    let template_name =
        run.template.clone().unwrap_or_else(|| config.default_template.clone());
    let resolved_template_directory = config
        .templates_directory
        .join(format!("{}{}", config.templates_prefix, template_name));

    if !resolved_template_directory.exists() {
        return Err(Error::TemplateDoesNotExist {
            template_dir: resolved_template_directory.display().to_string(),
        });
    }

    Ok(ScaffoldRequest {
        original_create_path,
        resolved_create_path,
        resolved_template_directory,
        template_name,
    })
}

/// Strips the configured template suffix from a rendered relative path.
/// The suffix only marks "this file is a template" in the tree; it never
/// survives into the output.
pub fn strip_template_suffix(rendered_path: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return rendered_path.to_string();
    }
    rendered_path.strip_suffix(suffix).unwrap_or(rendered_path).to_string()
}

/// Renders (or copies) a single template file into the creation directory.
fn create_rendered_file(
    relative_path: &Path,
    request: &ScaffoldRequest,
    config: &ScaffoldConfig,
    engine: &dyn TemplateRenderer,
    raw_copy: &globset::GlobSet,
    context: &serde_json::Value,
) -> Result<()> {
    let relative_str = relative_path
        .to_str()
        .ok_or_else(|| Error::ConfigError("invalid path".to_string()))?
        .replace(std::path::MAIN_SEPARATOR, "/");

    // File names may themselves contain variable references.
    let rendered_relative = engine.render(&relative_str, context)?;
    let target_relative = strip_template_suffix(&rendered_relative, &config.template_suffix);

    let source = request.resolved_template_directory.join(relative_path);
    let target = request.resolved_create_path.join(&target_relative);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    if raw_copy.is_match(&relative_str) {
        debug!("Copying file verbatim: {relative_str}");
        fs::copy(&source, &target)?;
    } else {
        debug!("Rendering file: {relative_str}");
        let content = engine.render_file(&relative_str, context)?;
        fs::write(&target, content)?;
    }

    // The rendered branch writes a fresh default-permission file, and copy
    // does not preserve mode everywhere, so the source bits are re-applied
    // in both branches.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&source)?.permissions().mode() & 0o777;
        fs::set_permissions(&target, fs::Permissions::from_mode(mode))?;
    }

    Ok(())
}

/// Runs the whole scaffold pipeline: path resolution, answer collection, the
/// before hook, the render-and-write batch and the after hook, strictly in
/// that order.
///
/// A failure in any single file aborts the batch; files already written stay
/// on disk (partial trees are accepted behavior, not rolled back).
pub fn scaffold(
    config: &ScaffoldConfig,
    run: &ScaffoldRun,
    prompter: &dyn Prompter,
) -> Result<ScaffoldRequest> {
    let request = resolve_request(config, run)?;

    let mut registry = QuestionRegistry::with_builtins();
    if let Some(setup) = &config.setup_questions {
        setup(&mut registry)?;
    }

    let mut answers = registry.collect_answers(
        config.question_selectors.as_deref(),
        &run.initial_answers,
        prompter,
    )?;
    // Record which template produced the project.
    answers.insert(
        "template".to_string(),
        serde_json::Value::String(request.template_name.clone()),
    );

    if let Some(before_hook) = &config.before_creation_hook {
        let context = BeforeContext {
            context: HookContext {
                resolved_create_path: request.resolved_create_path.clone(),
                resolved_original_create_path: request.original_create_path.clone(),
                resolved_template_directory: request.resolved_template_directory.clone(),
                config: config.snapshot(),
                answers: answers.clone(),
            },
        };
        // Full replace, not a merge. Whatever the hook returns is the new
        // answer mapping.
        answers = before_hook(&context)?;
    }

    let engine = MiniJinjaRenderer::with_search_paths(
        &request.resolved_template_directory,
        &config.partials,
        &config.layouts,
    );
    let raw_copy = build_raw_copy_set(&config.raw_copy_patterns)?;
    let context = serde_json::Value::Object(answers.clone());

    println!("Creating a new project in: {}", request.resolved_create_path.display());

    for relative_path in walk_template_dir(&request.resolved_template_directory)? {
        create_rendered_file(&relative_path, &request, config, &engine, &raw_copy, &context)
            .map_err(|e| Error::process_error(&relative_path.display().to_string(), e))?;
    }

    if let Some(after_hook) = &config.after_creation_hook {
        let context = AfterContext {
            context: HookContext {
                resolved_create_path: request.resolved_create_path.clone(),
                resolved_original_create_path: request.original_create_path.clone(),
                resolved_template_directory: request.resolved_template_directory.clone(),
                config: config.snapshot(),
                answers,
            },
        };
        after_hook(&context)?;
    }

    Ok(request)
}
