//! Question set model and TOML loading.
//!
//! Question sets are small TOML files with a `[questionnaire]` header and a
//! list of `[[questions]]` entries. A compiled-in default set is used when
//! no file is supplied.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single prompt shown to the user.
///
/// The text is printed verbatim, with no newline appended, so prompts
/// normally end with a space and the answer is typed on the same line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Prompt text.
    pub text: String,
}

/// An ordered, immutable list of yes/no questions.
///
/// Questions are numbered from 1 in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Unique identifier for this question set.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of this question set.
    #[serde(default)]
    pub description: String,
    /// The questions, in prompt order.
    pub questions: Vec<Question>,
}

impl QuestionSet {
    /// The compiled-in default question set.
    pub fn builtin() -> Self {
        let texts = [
            "Did you sleep at least seven hours? ",
            "Did you eat breakfast? ",
            "Did you exercise today? ",
            "Did you spend time outside? ",
            "Are you feeling good about tomorrow? ",
        ];
        QuestionSet {
            id: "daily-checkin".into(),
            name: "Daily Check-in".into(),
            description: "Five quick yes/no questions about your day".into(),
            questions: texts
                .iter()
                .map(|t| Question {
                    text: (*t).to_string(),
                })
                .collect(),
        }
    }

    /// Load a question set from `path`, or fall back to the builtin set.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => parse_question_set(p),
            None => {
                tracing::debug!("no question file given, using builtin set");
                Ok(QuestionSet::builtin())
            }
        }
    }

    /// Number of questions in the set.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns `true` when the set has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Intermediate TOML structure for parsing question files.
#[derive(Debug, Deserialize)]
struct TomlQuestionFile {
    questionnaire: TomlQuestionnaireHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestionnaireHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    text: String,
}

/// Parse a single TOML file into a `QuestionSet`.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question file: {}", path.display()))?;

    parse_question_set_str(&content, path)
}

/// Parse a TOML string into a `QuestionSet` (useful for testing).
pub fn parse_question_set_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let parsed: TomlQuestionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(QuestionSet {
        id: parsed.questionnaire.id,
        name: parsed.questionnaire.name,
        description: parsed.questionnaire.description,
        questions: parsed
            .questions
            .into_iter()
            .map(|q| Question { text: q.text })
            .collect(),
    })
}

/// A warning from question set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based question number (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a question set for common issues.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.questions.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "question set has no questions".into(),
        });
    }

    for (i, q) in set.questions.iter().enumerate() {
        let number = i + 1;
        if q.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question: Some(number),
                message: "question text is empty".into(),
            });
        } else if !q.text.ends_with(' ') && !q.text.ends_with('\n') {
            warnings.push(ValidationWarning {
                question: Some(number),
                message: "prompt does not end with a space; the typed answer will run into it"
                    .into(),
            });
        }
    }

    warnings
}
