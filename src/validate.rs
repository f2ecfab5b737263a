//! Integrity checks over question records and whole catalogs.
//!
//! Nothing here changes how counts are aggregated; findings are reported so the
//! caller can log them or reject a bank entry.

use std::collections::HashSet;

use thiserror::Error;

use crate::domain::{Question, SourceDescriptor};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QuestionIssue {
  #[error("question {id}: field `{field}` is empty")]
  EmptyField { id: String, field: &'static str },
  #[error("question {id}: no options")]
  NoOptions { id: String },
  #[error("question {id}: option letter {letter:?} used more than once")]
  DuplicateLetter { id: String, letter: String },
  #[error("question {id}: correct answer {answer:?} matches no option")]
  AnswerNotInOptions { id: String, answer: String },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogIssue {
  #[error(transparent)]
  Question(#[from] QuestionIssue),
  #[error("duplicate question id {0}")]
  DuplicateId(String),
  #[error("question {id}: unknown source {source_code}")]
  UnknownSource { id: String, source_code: String },
  #[error("question {id}: year {year} is not a covered year")]
  YearNotCovered { id: String, year: u16 },
  #[error("question {id}: subject {subject:?} is not in the subject list")]
  SubjectNotListed { id: String, subject: String },
}

/// Record-level checks: required text present, options non-empty with unique
/// letters, and the correct answer naming exactly one option.
pub fn validate_question(q: &Question) -> Vec<QuestionIssue> {
  let mut issues = Vec::new();

  let required = [
    ("id", &q.id),
    ("source", &q.source),
    ("subject", &q.subject),
    ("text", &q.text),
    ("correctAnswer", &q.correct_answer),
  ];
  for (field, value) in required {
    if value.trim().is_empty() {
      issues.push(QuestionIssue::EmptyField { id: q.id.clone(), field });
    }
  }

  if q.options.is_empty() {
    issues.push(QuestionIssue::NoOptions { id: q.id.clone() });
    return issues;
  }

  let mut seen = HashSet::new();
  for o in &q.options {
    if !seen.insert(o.letter.as_str()) {
      issues.push(QuestionIssue::DuplicateLetter { id: q.id.clone(), letter: o.letter.clone() });
    }
  }

  // Letters are unique at this point (or already reported), so one match means exactly one.
  if !q.correct_answer.trim().is_empty() && q.correct_option().is_none() {
    issues.push(QuestionIssue::AnswerNotInOptions { id: q.id.clone(), answer: q.correct_answer.clone() });
  }

  issues
}

/// Runs `validate_question` on every record, then cross-checks ids, sources,
/// years and subjects against the reference lists.
pub fn validate_catalog(
  questions: &[Question],
  sources: &[SourceDescriptor],
  subjects: &[String],
  years: &[u16],
) -> Vec<CatalogIssue> {
  let source_ids: HashSet<&str> = sources.iter().map(|s| s.id.as_str()).collect();
  let subject_set: HashSet<&str> = subjects.iter().map(String::as_str).collect();
  let mut ids = HashSet::new();
  let mut issues = Vec::new();

  for q in questions {
    issues.extend(validate_question(q).into_iter().map(CatalogIssue::from));

    if !ids.insert(q.id.as_str()) {
      issues.push(CatalogIssue::DuplicateId(q.id.clone()));
    }
    if !source_ids.contains(q.source.as_str()) {
      issues.push(CatalogIssue::UnknownSource { id: q.id.clone(), source_code: q.source.clone() });
    }
    if !years.contains(&q.year) {
      issues.push(CatalogIssue::YearNotCovered { id: q.id.clone(), year: q.year });
    }
    if !subject_set.contains(q.subject.as_str()) {
      issues.push(CatalogIssue::SubjectNotListed { id: q.id.clone(), subject: q.subject.clone() });
    }
  }

  issues
}
