//! Domain models: exam questions, their options and difficulty tier, and source descriptors.
//!
//! Field names serialize in camelCase (`sourceLabel`, `correctAnswer`, ...) so the
//! JSON shape matches what front-end consumers already read.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Perceived difficulty of a question. Serialized with the Portuguese tags.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
  #[serde(rename = "facil")]
  Easy,
  #[serde(rename = "medio")]
  Medium,
  #[serde(rename = "dificil")]
  Hard,
}

impl Difficulty {
  pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

  pub fn as_str(self) -> &'static str {
    match self {
      Difficulty::Easy => "facil",
      Difficulty::Medium => "medio",
      Difficulty::Hard => "dificil",
    }
  }
}

impl fmt::Display for Difficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One labeled alternative. Position in `Question::options` is display order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerOption {
  pub letter: String,
  pub text: String,
}

/// A single exam question with provenance, classification and content.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
  pub id: String,
  pub source: String,       // exam code, e.g. "FUVEST"
  pub source_label: String, // e.g. "FUVEST/USP 2024"
  pub year: u16,
  pub number: u32,

  pub subject: String,
  pub topic: String,

  pub text: String,
  pub options: Vec<AnswerOption>,
  pub correct_answer: String,
  #[serde(default)]
  pub explanation: String,
  pub difficulty: Difficulty,
}

impl Question {
  /// `{SOURCE}_{YEAR}_Q{NN}`, the id scheme used throughout the catalog.
  pub fn canonical_id(source: &str, year: u16, number: u32) -> String {
    format!("{}_{}_Q{:02}", source, year, number)
  }

  pub fn option(&self, letter: &str) -> Option<&AnswerOption> {
    self.options.iter().find(|o| o.letter == letter)
  }

  /// The option whose letter equals `correct_answer`, if the record is well formed.
  pub fn correct_option(&self) -> Option<&AnswerOption> {
    self.option(&self.correct_answer)
  }
}

/// Static reference data about an exam source.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceDescriptor {
  pub id: String,
  pub label: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub color: String, // display token, e.g. "text-blue-500"
  /// Free-text note on which subjects the exam covers.
  #[serde(rename = "questions", default)]
  pub coverage: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Question {
    Question {
      id: Question::canonical_id("ENEM", 2024, 2),
      source: "ENEM".into(),
      source_label: "ENEM 2024".into(),
      year: 2024,
      number: 2,
      subject: "Biologia".into(),
      topic: "Genética".into(),
      text: "Probabilidade de um filho HbSS?".into(),
      options: vec![
        AnswerOption { letter: "A".into(), text: "100%".into() },
        AnswerOption { letter: "D".into(), text: "25%".into() },
      ],
      correct_answer: "D".into(),
      explanation: String::new(),
      difficulty: Difficulty::Easy,
    }
  }

  #[test]
  fn canonical_id_pads_sequence_number() {
    assert_eq!(Question::canonical_id("SANTA_CASA", 2023, 1), "SANTA_CASA_2023_Q01");
    assert_eq!(Question::canonical_id("ENEM", 2024, 12), "ENEM_2024_Q12");
  }

  #[test]
  fn correct_option_resolves_letter() {
    let q = sample();
    assert_eq!(q.correct_option().map(|o| o.text.as_str()), Some("25%"));
    assert!(q.option("E").is_none());
  }

  #[test]
  fn question_serializes_with_camel_case_fields() {
    let v = serde_json::to_value(sample()).expect("serialize");
    assert_eq!(v["sourceLabel"], "ENEM 2024");
    assert_eq!(v["correctAnswer"], "D");
    assert_eq!(v["difficulty"], "facil");
    assert_eq!(v["options"][1]["letter"], "D");
  }

  #[test]
  fn unknown_difficulty_tag_is_rejected() {
    let err = serde_json::from_str::<Difficulty>("\"impossivel\"");
    assert!(err.is_err());
    let ok: Difficulty = serde_json::from_str("\"dificil\"").expect("known tag");
    assert_eq!(ok, Difficulty::Hard);
  }

  #[test]
  fn source_descriptor_keeps_questions_field_name() {
    let s = SourceDescriptor {
      id: "ENEM".into(),
      label: "ENEM".into(),
      description: "Exame Nacional do Ensino Médio".into(),
      color: "text-blue-500".into(),
      coverage: "Ciências da Natureza".into(),
    };
    let v = serde_json::to_value(&s).expect("serialize");
    assert_eq!(v["questions"], "Ciências da Natureza");
    assert!(v.get("coverage").is_none());
  }
}
