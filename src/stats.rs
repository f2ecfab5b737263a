//! Derived counts over a question set: per source, per subject label, per year.
//!
//! Keys come from the reference lists (in their order), never from the questions,
//! so a key with no matching question still appears with a zero count and a
//! question whose value is not listed is simply not counted.

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::{Question, SourceDescriptor};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VestibularStats {
  pub total: usize,
  pub total_questions: usize,
  pub total_sources: usize,
  pub by_source: IndexMap<String, usize>,
  pub by_subject: IndexMap<String, usize>,
  pub by_year: IndexMap<u16, usize>,
}

impl VestibularStats {
  pub fn compute(
    questions: &[Question],
    sources: &[SourceDescriptor],
    subjects: &[String],
    years: &[u16],
  ) -> Self {
    let by_source = sources
      .iter()
      .map(|s| (s.id.clone(), questions.iter().filter(|q| q.source == s.id).count()))
      .collect();
    let by_subject = subjects
      .iter()
      .map(|s| (s.clone(), questions.iter().filter(|q| &q.subject == s).count()))
      .collect();
    let by_year = years
      .iter()
      .map(|&y| (y, questions.iter().filter(|q| q.year == y).count()))
      .collect();

    Self {
      total: questions.len(),
      total_questions: questions.len(),
      total_sources: sources.len(),
      by_source,
      by_subject,
      by_year,
    }
  }

  /// Questions attributed to some listed source. Equals `total` when every
  /// question's source code is known.
  pub fn source_coverage(&self) -> usize {
    self.by_source.values().sum()
  }

  pub fn year_coverage(&self) -> usize {
    self.by_year.values().sum()
  }

  pub fn subject_coverage(&self) -> usize {
    self.by_subject.values().sum()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{AnswerOption, Difficulty};

  fn q(source: &str, year: u16, subject: &str) -> Question {
    Question {
      id: format!("{source}_{year}_{subject}"),
      source: source.into(),
      source_label: format!("{source} {year}"),
      year,
      number: 1,
      subject: subject.into(),
      topic: String::new(),
      text: String::new(),
      options: vec![AnswerOption { letter: "A".into(), text: "x".into() }],
      correct_answer: "A".into(),
      explanation: String::new(),
      difficulty: Difficulty::Medium,
    }
  }

  fn src(id: &str) -> SourceDescriptor {
    SourceDescriptor {
      id: id.into(),
      label: id.into(),
      description: String::new(),
      color: String::new(),
      coverage: String::new(),
    }
  }

  #[test]
  fn counts_three_record_scenario() {
    let questions = vec![q("A", 2020, "Biologia"), q("A", 2021, "Biologia"), q("B", 2020, "Química")];
    let stats = VestibularStats::compute(&questions, &[src("A"), src("B")], &[], &[2020, 2021]);

    assert_eq!(stats.by_source.get("A"), Some(&2));
    assert_eq!(stats.by_source.get("B"), Some(&1));
    assert_eq!(stats.by_year[&2020u16], 2);
    assert_eq!(stats.by_year[&2021u16], 1);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.total_questions, 3);
    assert_eq!(stats.total_sources, 2);
  }

  #[test]
  fn keys_follow_reference_order_not_first_appearance() {
    let questions = vec![q("B", 2024, "Química"), q("A", 2020, "Biologia")];
    let subjects = vec!["Física".to_string(), "Biologia".to_string(), "Química".to_string()];
    let stats = VestibularStats::compute(&questions, &[src("A"), src("B")], &subjects, &[2024, 2020]);

    let sources: Vec<_> = stats.by_source.keys().cloned().collect();
    assert_eq!(sources, ["A", "B"]);
    let subj: Vec<_> = stats.by_subject.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(subj, [("Física", 0), ("Biologia", 1), ("Química", 1)]);
    let years: Vec<_> = stats.by_year.keys().copied().collect();
    assert_eq!(years, [2024, 2020]);
  }

  #[test]
  fn unmatched_values_are_left_out_of_the_sums() {
    let questions = vec![q("A", 2020, "Biologia"), q("Z", 2019, "Genética")];
    let stats = VestibularStats::compute(&questions, &[src("A")], &["Biologia".to_string()], &[2020]);

    assert_eq!(stats.total, 2);
    assert_eq!(stats.source_coverage(), 1);
    assert_eq!(stats.year_coverage(), 1);
    assert_eq!(stats.subject_coverage(), 1);
  }

  #[test]
  fn empty_catalog_yields_zero_counts_for_every_key() {
    let stats = VestibularStats::compute(&[], &[src("A")], &["Biologia".to_string()], &[2020]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.by_source["A"], 0);
    assert_eq!(stats.by_subject["Biologia"], 0);
    assert_eq!(stats.by_year[&2020u16], 0);
  }

  #[test]
  fn recomputing_gives_identical_result() {
    let questions = vec![q("A", 2020, "Biologia"), q("B", 2021, "Química")];
    let sources = [src("A"), src("B")];
    let subjects = ["Biologia".to_string()];
    let a = VestibularStats::compute(&questions, &sources, &subjects, &[2020, 2021]);
    let b = VestibularStats::compute(&questions, &sources, &subjects, &[2020, 2021]);
    assert_eq!(a, b);
  }

  #[test]
  fn serializes_with_original_field_names() {
    let stats = VestibularStats::compute(&[q("A", 2020, "Biologia")], &[src("A")], &[], &[2020]);
    let v = serde_json::to_value(&stats).expect("serialize");
    assert_eq!(v["total"], 1);
    assert_eq!(v["totalQuestions"], 1);
    assert_eq!(v["totalSources"], 1);
    assert_eq!(v["bySource"]["A"], 1);
    assert_eq!(v["byYear"]["2020"], 1);
    assert!(v["bySubject"].as_object().is_some_and(|m| m.is_empty()));
  }
}
