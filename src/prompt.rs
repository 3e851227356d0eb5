//! User input and interaction handling.
//! Questions are registered by name in an ordered registry; a scaffold run
//! selects which ones to ask and in what order (no selectors means nothing is
//! asked). Answers supplied up front (via `--answer`) skip the corresponding
//! prompt and pass through into the answer mapping even when no question
//! matches them.

use crate::error::{Error, Result};
use dialoguer::{Confirm, FuzzySelect, Input};
use indexmap::IndexMap;

/// The interaction style of a question.
#[derive(Debug, Clone)]
pub enum QuestionKind {
    /// Free-form text input
    Text,
    /// Yes/no confirmation
    Confirm,
    /// Selection from a fixed list of choices
    Select { choices: Vec<String> },
}

/// A single named question presented to the user.
#[derive(Debug, Clone)]
pub struct Question {
    /// The message shown when prompting
    pub message: String,
    /// Default value, pre-filled or pre-selected
    pub default: Option<serde_json::Value>,
    pub kind: QuestionKind,
}

impl Question {
    pub fn text(message: &str) -> Self {
        Self { message: message.to_string(), default: None, kind: QuestionKind::Text }
    }

    pub fn confirm(message: &str) -> Self {
        Self { message: message.to_string(), default: None, kind: QuestionKind::Confirm }
    }

    pub fn select(message: &str, choices: Vec<String>) -> Self {
        Self {
            message: message.to_string(),
            default: None,
            kind: QuestionKind::Select { choices },
        }
    }

    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Trait for asking a single question, so tests can script answers instead of
/// driving a terminal.
pub trait Prompter {
    fn prompt(&self, name: &str, question: &Question) -> Result<serde_json::Value>;
}

/// Dialoguer-backed interactive prompter.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn prompt(&self, _name: &str, question: &Question) -> Result<serde_json::Value> {
        match &question.kind {
            QuestionKind::Text => {
                let mut input = Input::<String>::new().with_prompt(&question.message);
                if let Some(default) = question.default.as_ref().and_then(|v| v.as_str()) {
                    input = input.default(default.to_string());
                }
                let value = input
                    .interact_text()
                    .map_err(|e| Error::PromptError(e.to_string()))?;
                Ok(serde_json::Value::String(value))
            }
            QuestionKind::Confirm => {
                let default = question
                    .default
                    .as_ref()
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false);
                let value = Confirm::new()
                    .with_prompt(&question.message)
                    .default(default)
                    .interact()
                    .map_err(|e| Error::PromptError(e.to_string()))?;
                Ok(serde_json::Value::Bool(value))
            }
            QuestionKind::Select { choices } => {
                let default_index = question
                    .default
                    .as_ref()
                    .and_then(|v| v.as_str())
                    .and_then(|s| choices.iter().position(|choice| choice == s))
                    .unwrap_or(0);
                let selection = FuzzySelect::new()
                    .with_prompt(&question.message)
                    .items(choices)
                    .default(default_index)
                    .interact()
                    .map_err(|e| Error::PromptError(e.to_string()))?;
                Ok(serde_json::Value::String(choices[selection].clone()))
            }
        }
    }
}

/// Ordered, name-keyed collection of registered questions.
///
/// Registration order defines the default prompt order. Registering a name
/// twice is a configuration error unless `override` is requested.
#[derive(Debug, Default)]
pub struct QuestionRegistry {
    questions: IndexMap<String, Question>,
}

impl QuestionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { questions: IndexMap::new() }
    }

    /// Creates a registry pre-populated with the built-in questions
    /// (`name`, `description`, `license`).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, question) in builtin_questions() {
            // Built-in names are distinct, registration cannot fail here.
            let _ = registry.register(&name, question, false);
        }
        registry
    }

    /// Registers a question under `name`.
    ///
    /// # Errors
    /// * `Error::ConfigError` if `name` is already registered and
    ///   `override_existing` is false
    pub fn register(
        &mut self,
        name: &str,
        question: Question,
        override_existing: bool,
    ) -> Result<()> {
        if self.questions.contains_key(name) && !override_existing {
            return Err(Error::ConfigError(format!(
                "Question with name '{name}' exists already. Try to add your question under a different name or set override to true"
            )));
        }
        // shift_remove keeps the remaining registration order intact; the
        // overriding question goes to the end like a fresh registration.
        self.questions.shift_remove(name);
        self.questions.insert(name.to_string(), question);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Question> {
        self.questions.get(name)
    }

    /// Resolves `selectors` to registered questions, in selector order.
    /// With no selectors, no questions are selected and nothing is asked.
    ///
    /// # Errors
    /// * `Error::ConfigError` if a selector names an unregistered question
    pub fn select(&self, selectors: Option<&[String]>) -> Result<Vec<(&str, &Question)>> {
        match selectors {
            Some(selectors) => selectors
                .iter()
                .map(|selector| {
                    self.questions
                        .get_key_value(selector.as_str())
                        .map(|(name, question)| (name.as_str(), question))
                        .ok_or_else(|| {
                            Error::ConfigError(format!(
                                "Question with name '{selector}' could not be found. Did you register it?"
                            ))
                        })
                })
                .collect(),
            None => Ok(Vec::new()),
        }
    }

    /// Prompts the selected questions and returns the answer mapping.
    /// A question whose name appears in `initial_answers` is skipped and the
    /// supplied value used verbatim. Initial answers with no matching
    /// question pass through into the mapping untouched, so extra `--answer`
    /// flags are usable as template variables.
    pub fn collect_answers(
        &self,
        selectors: Option<&[String]>,
        initial_answers: &serde_json::Map<String, serde_json::Value>,
        prompter: &dyn Prompter,
    ) -> Result<serde_json::Map<String, serde_json::Value>> {
        let mut answers = initial_answers.clone();

        for (name, question) in self.select(selectors)? {
            if !answers.contains_key(name) {
                answers.insert(name.to_string(), prompter.prompt(name, question)?);
            }
        }

        Ok(answers)
    }
}

/// The questions every scaffold setup starts with.
pub fn builtin_questions() -> Vec<(String, Question)> {
    vec![
        (
            "name".to_string(),
            Question::text("What is the name of your project?"),
        ),
        (
            "description".to_string(),
            Question::text("What is the description of your project?")
                .with_default(serde_json::Value::String("description".to_string())),
        ),
        (
            "license".to_string(),
            Question::select(
                "What license do you want to use?",
                vec![
                    "MIT".to_string(),
                    "Apache-2.0".to_string(),
                    "GPL-3.0".to_string(),
                    "BSD-3-Clause".to_string(),
                    "MPL-2.0".to_string(),
                    "Unlicense".to_string(),
                ],
            )
            .with_default(serde_json::Value::String("MIT".to_string())),
        ),
    ]
}
