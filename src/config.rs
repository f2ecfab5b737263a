//! Loading an optional question bank from TOML.
//!
//! The bank extends the built-in catalog with extra sources, subject labels and
//! questions. See `BankConfig` and `QuestionCfg` for the expected schema.

use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{AnswerOption, Difficulty, Question, SourceDescriptor};
use crate::error::{CatalogError, Result};

pub const BANK_PATH_ENV: &str = "VESTIBULAR_BANK_PATH";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct BankConfig {
  #[serde(default)]
  pub sources: Vec<SourceDescriptor>,
  #[serde(default)]
  pub subjects: Vec<String>,
  #[serde(default)]
  pub questions: Vec<QuestionCfg>,
}

/// Question entry accepted in the bank. `id` and `sourceLabel` may be omitted
/// and are derived from the source, year and number.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionCfg {
  #[serde(default)] pub id: Option<String>,
  pub source: String,
  #[serde(default)] pub source_label: Option<String>,
  pub year: u16,
  pub number: u32,
  pub subject: String,
  #[serde(default)] pub topic: String,
  pub text: String,
  pub options: Vec<AnswerOption>,
  pub correct_answer: String,
  #[serde(default)] pub explanation: String,
  pub difficulty: Difficulty,
}

impl QuestionCfg {
  /// Fill in derived fields. `sources` is searched for the label used in the
  /// default `sourceLabel`; an unknown source falls back to its code.
  pub fn into_question(self, sources: &[SourceDescriptor]) -> Question {
    let id = self
      .id
      .filter(|s| !s.trim().is_empty())
      .unwrap_or_else(|| Question::canonical_id(&self.source, self.year, self.number));
    let source_label = self.source_label.unwrap_or_else(|| {
      let label = sources
        .iter()
        .find(|s| s.id == self.source)
        .map(|s| s.label.as_str())
        .unwrap_or(self.source.as_str());
      format!("{} {}", label, self.year)
    });

    Question {
      id,
      source: self.source,
      source_label,
      year: self.year,
      number: self.number,
      subject: self.subject,
      topic: self.topic,
      text: self.text,
      options: self.options,
      correct_answer: self.correct_answer,
      explanation: self.explanation,
      difficulty: self.difficulty,
    }
  }
}

pub fn parse_bank_config(s: &str, path: &Path) -> Result<BankConfig> {
  toml::from_str(s).map_err(|source| CatalogError::Toml { path: path.to_path_buf(), source })
}

pub fn load_bank_config(path: impl AsRef<Path>) -> Result<BankConfig> {
  let path = path.as_ref();
  let s = std::fs::read_to_string(path).map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
  parse_bank_config(&s, path)
}

/// Attempt to load `BankConfig` from VESTIBULAR_BANK_PATH. Unset variable or any
/// IO/parse error yields None; errors are logged.
pub fn load_bank_config_from_env() -> Option<BankConfig> {
  let path = std::env::var(BANK_PATH_ENV).ok()?;
  match load_bank_config(&path) {
    Ok(cfg) => {
      info!(target: "vestibular_bank", %path, questions = cfg.questions.len(), sources = cfg.sources.len(), "Loaded question bank (TOML)");
      Some(cfg)
    }
    Err(e) => {
      error!(target: "vestibular_bank", %path, error = %e, "Failed to load question bank");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const BANK: &str = r#"
subjects = ["Física Moderna"]

[[sources]]
id = "UERJ"
label = "UERJ"
description = "Universidade do Estado do Rio de Janeiro"
color = "text-lime-500"
questions = "Biologia"

[[questions]]
source = "UERJ"
year = 2024
number = 3
subject = "Biologia"
topic = "Genética"
text = "Qual a proporção fenotípica esperada em F2 num cruzamento mono-híbrido?"
correctAnswer = "B"
difficulty = "facil"
options = [{ letter = "A", text = "1:1" }, { letter = "B", text = "3:1" }]
"#;

  #[test]
  fn parses_bank_and_fills_defaults() {
    let cfg = parse_bank_config(BANK, Path::new("bank.toml")).expect("valid bank");
    assert_eq!(cfg.subjects, vec!["Física Moderna".to_string()]);
    assert_eq!(cfg.sources[0].coverage, "Biologia");

    let q = cfg.questions[0].clone().into_question(&cfg.sources);
    assert_eq!(q.id, "UERJ_2024_Q03");
    assert_eq!(q.source_label, "UERJ 2024");
    assert_eq!(q.difficulty, Difficulty::Easy);
    assert!(q.explanation.is_empty());
  }

  #[test]
  fn explicit_id_and_label_are_kept() {
    let mut cfg = parse_bank_config(BANK, Path::new("bank.toml")).expect("valid bank");
    let mut entry = cfg.questions.remove(0);
    entry.id = Some("UERJ_ESPECIAL".into());
    entry.source_label = Some("UERJ 2024 (2ª fase)".into());
    let q = entry.into_question(&[]);
    assert_eq!(q.id, "UERJ_ESPECIAL");
    assert_eq!(q.source_label, "UERJ 2024 (2ª fase)");
  }

  #[test]
  fn unknown_source_label_falls_back_to_code() {
    let cfg = parse_bank_config(BANK, Path::new("bank.toml")).expect("valid bank");
    let q = cfg.questions[0].clone().into_question(&[]);
    assert_eq!(q.source_label, "UERJ 2024");
  }

  #[test]
  fn bad_difficulty_is_a_parse_error() {
    let bad = BANK.replace("\"facil\"", "\"trivial\"");
    let err = parse_bank_config(&bad, Path::new("bank.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Toml { .. }));
    assert!(err.to_string().contains("bank.toml"));
  }

  #[test]
  fn missing_file_is_an_io_error() {
    let err = load_bank_config("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
  }
}
