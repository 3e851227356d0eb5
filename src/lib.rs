//! Stencil is a project-scaffolding engine.
//! Given a template directory and a set of user-provided answers it
//! materializes a new project directory by rendering file names and contents,
//! copying binary assets verbatim, preserving Unix permission bits and
//! running optional before/after creation hooks.

/// Command-line interface module for the Stencil application
pub mod cli;

/// Scaffold configuration and the hook-visible snapshot of it
pub mod config;

/// Error types and handling for the Stencil application
pub mod error;

/// Before/after creation hook contexts and the after-hook helper
pub mod hooks;

/// Ignore patterns for files copied byte-for-byte without rendering
pub mod ignore;

/// Core scaffold orchestration
/// Combines all components to generate the final output
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality (MiniJinja)
pub mod renderer;

/// External command execution for hooks
pub mod runner;

/// Recursive template file enumeration
pub mod walker;
