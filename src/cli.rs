//! Command-line interface implementation for Stencil.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for Stencil.
#[derive(Parser, Debug)]
#[command(author, version, about = "Stencil: project scaffolding from directory templates", long_about = None)]
pub struct Args {
    /// Directory where the generated project will be created
    #[arg(value_name = "CREATE_PATH")]
    pub create_path: Option<String>,

    /// Name of the template to use instead of the default one
    #[arg(short, long)]
    pub template: Option<String>,

    /// Directory to look up template folders in
    #[arg(long, value_name = "DIR", default_value = "templates")]
    pub templates_dir: PathBuf,

    /// Prefix of the template folder names
    #[arg(long, default_value = "")]
    pub templates_prefix: String,

    /// Template used when --template is not given
    #[arg(long, default_value = "default")]
    pub default_template: String,

    /// Pre-seeded answer as NAME=VALUE; repeatable.
    /// A question answered this way is not asked interactively.
    #[arg(short, long = "answer", value_name = "NAME=VALUE", value_parser = parse_answer)]
    pub answers: Vec<(String, String)>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_answer(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => {
            Ok((name.to_string(), value.to_string()))
        }
        _ => Err(format!("invalid answer '{s}', expected NAME=VALUE")),
    }
}

impl Args {
    /// Turns the repeated `--answer` flags into an initial answer mapping.
    /// `true`/`false` values become booleans, everything else stays a string.
    pub fn initial_answers(&self) -> serde_json::Map<String, serde_json::Value> {
        self.answers
            .iter()
            .map(|(name, value)| {
                let value = match value.as_str() {
                    "true" => serde_json::Value::Bool(true),
                    "false" => serde_json::Value::Bool(false),
                    other => serde_json::Value::String(other.to_string()),
                };
                (name.clone(), value)
            })
            .collect()
    }
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
