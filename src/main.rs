//! Stencil's main application entry point.
//! Wires command-line arguments into a scaffold configuration and runs the
//! pipeline with the interactive prompter.

use stencil::{
    cli::get_args,
    config::ScaffoldConfig,
    error::default_error_handler,
    processor::{scaffold, ScaffoldRun},
    prompt::DialoguerPrompter,
};

fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    let config = ScaffoldConfig::new(&args.templates_dir, &args.default_template)
        .with_templates_prefix(&args.templates_prefix);

    let run = ScaffoldRun {
        create_path: args.create_path.clone(),
        template: args.template.clone(),
        initial_answers: args.initial_answers(),
    };

    let prompter = DialoguerPrompter::new();

    match scaffold(&config, &run, &prompter) {
        Ok(request) => {
            println!(
                "Project created successfully in {}.",
                request.resolved_create_path.display()
            );
        }
        Err(err) => default_error_handler(err),
    }
}
