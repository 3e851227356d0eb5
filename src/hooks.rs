//! Before- and after-creation hook contexts.
//! Both variants share the resolved paths, a configuration snapshot and the
//! current answer mapping; only the after variant hands out the package
//! manager aware helper, since before creation there is nothing to install
//! into yet.

use crate::config::ConfigSnapshot;
use crate::error::Result;
use crate::runner::{CommandOutput, CommandRunner};
use log::info;
use std::path::PathBuf;

/// Fields common to both hook variants. Constructed fresh for each hook
/// invocation and discarded after the hook returns.
#[derive(Debug, Clone)]
pub struct HookContext {
    /// Where the project is being created (possibly remapped)
    pub resolved_create_path: PathBuf,
    /// The creation path exactly as the caller gave it, resolved
    pub resolved_original_create_path: PathBuf,
    /// The selected template directory
    pub resolved_template_directory: PathBuf,
    /// Read-only scaffold configuration, hook-setup fields stripped
    pub config: ConfigSnapshot,
    /// The current answer mapping
    pub answers: serde_json::Map<String, serde_json::Value>,
}

/// Context passed to a before-creation hook.
#[derive(Debug, Clone)]
pub struct BeforeContext {
    pub context: HookContext,
}

impl BeforeContext {
    /// A plain command runner bound to the (not yet populated) creation path.
    pub fn runner(&self) -> CommandRunner {
        CommandRunner::new(&self.context.resolved_create_path)
    }
}

/// Options accepted by the after-creation hook helper factory.
#[derive(Debug, Clone)]
pub struct RunnerOptions {
    /// Package manager used by `install_dependencies`
    pub package_manager: String,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self { package_manager: "npm".to_string() }
    }
}

/// Context passed to an after-creation hook.
#[derive(Debug, Clone)]
pub struct AfterContext {
    pub context: HookContext,
}

impl AfterContext {
    /// Creates an [`AfterHookHelper`] bound to the new project directory.
    /// May be called any number of times; each call yields an independent
    /// helper.
    pub fn helper(&self, options: Option<RunnerOptions>) -> AfterHookHelper {
        AfterHookHelper {
            runner: CommandRunner::new(&self.context.resolved_create_path),
            options: options.unwrap_or_default(),
        }
    }
}

/// Predefined post-creation actions, plus raw command execution, all run in
/// the freshly created project directory.
#[derive(Debug, Clone)]
pub struct AfterHookHelper {
    runner: CommandRunner,
    options: RunnerOptions,
}

impl AfterHookHelper {
    /// Runs an arbitrary command in the new project.
    pub fn run_command(&self, command: &str, args: &[&str]) -> Result<CommandOutput> {
        self.runner.run(command, args)
    }

    /// Initializes a git repository in the new project.
    pub fn init_git(&self) -> Result<()> {
        self.runner.run("git", &["init"])?;
        info!("Repository initialized");
        Ok(())
    }

    /// Installs dependencies with the configured package manager.
    pub fn install_dependencies(&self) -> Result<()> {
        self.runner.run(&self.options.package_manager, &["install"])?;
        info!("Dependencies installed");
        Ok(())
    }
}
