use std::fs;
use std::path::Path;

use stencil::config::ScaffoldConfig;
use stencil::error::{Error, Result};
use stencil::processor::{scaffold, ScaffoldRun};
use stencil::prompt::{Prompter, Question};
use tempfile::TempDir;

/// Prompter for tests: every question must be pre-seeded, prompting is a bug.
struct NoPrompt;

impl Prompter for NoPrompt {
    fn prompt(&self, name: &str, _question: &Question) -> Result<serde_json::Value> {
        panic!("unexpected interactive prompt for question '{name}'");
    }
}

fn write_template_file(template_dir: &Path, relative: &str, content: &[u8]) {
    let path = template_dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Lays out `{templates}/demo` inside a fresh temp dir and returns
/// (tempdir, config, template_dir).
fn setup() -> (TempDir, ScaffoldConfig, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let templates = temp_dir.path().join("templates");
    let template_dir = templates.join("demo");
    fs::create_dir_all(&template_dir).unwrap();

    let config = ScaffoldConfig::new(&templates, "demo")
        .with_question_selectors(vec!["name".to_string()]);
    (temp_dir, config, template_dir)
}

fn run_for(create_path: &Path, name: &str) -> ScaffoldRun {
    let mut initial_answers = serde_json::Map::new();
    initial_answers
        .insert("name".to_string(), serde_json::Value::String(name.to_string()));
    ScaffoldRun {
        create_path: Some(create_path.display().to_string()),
        template: None,
        initial_answers,
    }
}

#[test]
fn test_renders_path_and_content_with_suffix_stripped() {
    let (temp_dir, config, template_dir) = setup();
    write_template_file(&template_dir, "{{name}}.txt.liquid", b"Hello {{name}}!");

    let create_path = temp_dir.path().join("out");
    scaffold(&config, &run_for(&create_path, "Ada"), &NoPrompt).unwrap();

    let rendered = fs::read_to_string(create_path.join("Ada.txt")).unwrap();
    assert_eq!(rendered, "Hello Ada!");
}

#[test]
fn test_ignored_file_is_copied_byte_for_byte() {
    let (temp_dir, config, template_dir) = setup();
    // Not valid UTF-8 and full of template-looking braces
    let payload: Vec<u8> = vec![0x89, 0x50, 0x4e, 0x47, 0x7b, 0x7b, 0xff, 0x00, 0x7d, 0x7d];
    write_template_file(&template_dir, "logo.png", &payload);

    let create_path = temp_dir.path().join("out");
    scaffold(&config, &run_for(&create_path, "Ada"), &NoPrompt).unwrap();

    let copied = fs::read(create_path.join("logo.png")).unwrap();
    assert_eq!(copied, payload);
}

#[test]
fn test_nested_files_mirror_the_template_tree() {
    let (temp_dir, config, template_dir) = setup();
    write_template_file(&template_dir, "src/{{name}}/main.rs.liquid", b"// {{name}}");
    write_template_file(&template_dir, "README.md", b"# {{name}}");

    let create_path = temp_dir.path().join("out");
    scaffold(&config, &run_for(&create_path, "ada"), &NoPrompt).unwrap();

    assert_eq!(
        fs::read_to_string(create_path.join("src/ada/main.rs")).unwrap(),
        "// ada"
    );
    // No suffix means the path is kept, but the content is still rendered
    assert_eq!(fs::read_to_string(create_path.join("README.md")).unwrap(), "# ada");
}

#[cfg(unix)]
#[test]
fn test_permission_bits_are_preserved() {
    use std::os::unix::fs::PermissionsExt;

    let (temp_dir, config, template_dir) = setup();
    write_template_file(&template_dir, "setup.sh.liquid", b"#!/bin/sh\necho {{name}}\n");
    let source = template_dir.join("setup.sh.liquid");
    fs::set_permissions(&source, fs::Permissions::from_mode(0o755)).unwrap();

    let create_path = temp_dir.path().join("out");
    scaffold(&config, &run_for(&create_path, "Ada"), &NoPrompt).unwrap();

    let mode = fs::metadata(create_path.join("setup.sh")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn test_non_empty_create_path_fails_before_writing() {
    let (temp_dir, config, template_dir) = setup();
    write_template_file(&template_dir, "file.txt", b"content");

    let create_path = temp_dir.path().join("out");
    fs::create_dir_all(&create_path).unwrap();
    fs::write(create_path.join("existing"), "occupied").unwrap();

    match scaffold(&config, &run_for(&create_path, "Ada"), &NoPrompt) {
        Err(Error::CreatePathNotEmpty { .. }) => {}
        other => panic!("Expected CreatePathNotEmpty, got {:?}", other.map(|_| ())),
    }

    // Nothing was written next to the pre-existing file
    assert_eq!(fs::read_dir(&create_path).unwrap().count(), 1);
}

#[test]
fn test_missing_template_directory_fails() {
    let (temp_dir, config, _template_dir) = setup();

    let run = ScaffoldRun {
        create_path: Some(temp_dir.path().join("out").display().to_string()),
        template: Some("nope".to_string()),
        initial_answers: run_for(Path::new("unused"), "Ada").initial_answers,
    };

    match scaffold(&config, &run, &NoPrompt) {
        Err(Error::TemplateDoesNotExist { template_dir }) => {
            assert!(template_dir.ends_with("nope"));
        }
        other => panic!("Expected TemplateDoesNotExist, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_missing_create_path_fails() {
    let (_temp_dir, config, _template_dir) = setup();
    let run = ScaffoldRun::default();

    match scaffold(&config, &run, &NoPrompt) {
        Err(Error::NoCreatePath) => {}
        other => panic!("Expected NoCreatePath, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_undefined_variable_names_the_offending_file() {
    let (temp_dir, config, template_dir) = setup();
    write_template_file(&template_dir, "broken.txt.liquid", b"{{ not_an_answer }}");

    let create_path = temp_dir.path().join("out");
    match scaffold(&config, &run_for(&create_path, "Ada"), &NoPrompt) {
        Err(Error::ProcessError { relative_path, .. }) => {
            assert_eq!(relative_path, "broken.txt.liquid");
        }
        other => panic!("Expected ProcessError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_extra_initial_answers_are_template_variables() {
    let (temp_dir, config, template_dir) = setup();
    write_template_file(&template_dir, "out.txt.liquid", b"{{ extra }}");

    let create_path = temp_dir.path().join("out");
    let mut run = run_for(&create_path, "Ada");
    // `extra` matches no registered question; it must still reach the
    // renderer as a variable
    run.initial_answers
        .insert("extra".to_string(), serde_json::Value::String("foo".to_string()));
    scaffold(&config, &run, &NoPrompt).unwrap();

    assert_eq!(fs::read_to_string(create_path.join("out.txt")).unwrap(), "foo");
}

#[test]
fn test_synthetic_template_answer_is_available() {
    let (temp_dir, config, template_dir) = setup();
    write_template_file(&template_dir, "origin.txt.liquid", b"from {{ template }}");

    let create_path = temp_dir.path().join("out");
    scaffold(&config, &run_for(&create_path, "Ada"), &NoPrompt).unwrap();

    assert_eq!(
        fs::read_to_string(create_path.join("origin.txt")).unwrap(),
        "from demo"
    );
}

#[test]
fn test_template_selection_with_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let templates = temp_dir.path().join("templates");
    let template_dir = templates.join("tpl-svc");
    fs::create_dir_all(&template_dir).unwrap();
    write_template_file(&template_dir, "kind.txt.liquid", b"{{ template }}");

    let config = ScaffoldConfig::new(&templates, "base")
        .with_templates_prefix("tpl-")
        .with_question_selectors(vec![]);

    let create_path = temp_dir.path().join("out");
    let run = ScaffoldRun {
        create_path: Some(create_path.display().to_string()),
        template: Some("svc".to_string()),
        initial_answers: serde_json::Map::new(),
    };
    scaffold(&config, &run, &NoPrompt).unwrap();

    assert_eq!(fs::read_to_string(create_path.join("kind.txt")).unwrap(), "svc");
}

#[test]
fn test_remap_create_path_is_applied_once() {
    let (temp_dir, config, template_dir) = setup();
    write_template_file(&template_dir, "file.txt", b"x{{name}}");

    let remapped_root = temp_dir.path().join("remapped");
    let remapped_clone = remapped_root.clone();
    let config = config.with_remap_create_path(Box::new(move |original| {
        remapped_clone.join(original.file_name().unwrap())
    }));

    let create_path = temp_dir.path().join("out");
    let request = scaffold(&config, &run_for(&create_path, "y"), &NoPrompt).unwrap();

    assert_eq!(request.resolved_create_path, remapped_root.join("out"));
    assert!(remapped_root.join("out/file.txt").exists());
    // The original path is kept around for hooks, but nothing is written there
    assert!(!create_path.exists());
}
