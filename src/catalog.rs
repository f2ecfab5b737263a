//! The question catalog: questions, source descriptors, subject labels and the
//! statistics derived from them.
//!
//! A `Catalog` is built once (from the built-in tables, optionally merged with a
//! TOML bank) and is read-only afterwards. Statistics are computed at build time
//! and never recomputed.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use tracing::{error, info, instrument, warn};

use crate::config::{load_bank_config_from_env, BankConfig};
use crate::domain::{Difficulty, Question, SourceDescriptor};
use crate::seeds::{seed_questions, seed_sources, seed_subjects, COVERED_YEARS};
use crate::stats::VestibularStats;
use crate::validate::{validate_catalog, validate_question, CatalogIssue};

#[derive(Clone, Debug)]
pub struct Catalog {
  questions: Vec<Question>,
  sources: Vec<SourceDescriptor>,
  subjects: Vec<String>,
  stats: VestibularStats,
}

/// Selection criteria for `Catalog::filter`. Unset fields match everything.
#[derive(Clone, Debug, Default)]
pub struct QuestionFilter {
  pub source: Option<String>,
  pub year: Option<u16>,
  pub subject: Option<String>,
  pub topic: Option<String>,
  pub difficulty: Option<Difficulty>,
}

impl QuestionFilter {
  pub fn matches(&self, q: &Question) -> bool {
    self.source.as_deref().map_or(true, |s| q.source == s)
      && self.year.map_or(true, |y| q.year == y)
      && self.subject.as_deref().map_or(true, |s| q.subject == s)
      && self.topic.as_deref().map_or(true, |t| q.topic == t)
      && self.difficulty.map_or(true, |d| q.difficulty == d)
  }
}

impl Catalog {
  /// Build a catalog from explicit parts. Statistics are keyed by `COVERED_YEARS`.
  pub fn new(questions: Vec<Question>, sources: Vec<SourceDescriptor>, subjects: Vec<String>) -> Self {
    let stats = VestibularStats::compute(&questions, &sources, &subjects, &COVERED_YEARS);
    Self { questions, sources, subjects, stats }
  }

  /// Built-in content only.
  pub fn builtin() -> Self {
    Self::new(seed_questions(), seed_sources(), seed_subjects())
  }

  /// Built-in content extended with a bank, plus a startup inventory log.
  ///
  /// Bank sources and subjects are appended when new. Bank questions are
  /// appended in file order; an entry failing record validation or reusing an
  /// existing id is skipped.
  #[instrument(level = "info", skip_all, fields(bank_questions = bank.questions.len()))]
  pub fn with_bank(bank: &BankConfig) -> Self {
    let mut sources = seed_sources();
    for s in &bank.sources {
      if sources.iter().any(|known| known.id == s.id) {
        warn!(target: "catalog", id = %s.id, "Bank source already known; keeping built-in descriptor");
        continue;
      }
      sources.push(s.clone());
    }

    let mut subjects = seed_subjects();
    for s in &bank.subjects {
      if !subjects.contains(s) {
        subjects.push(s.clone());
      }
    }

    let mut questions = seed_questions();
    let mut ids: HashSet<String> = questions.iter().map(|q| q.id.clone()).collect();
    for cfg in &bank.questions {
      let q = cfg.clone().into_question(&sources);
      let issues = validate_question(&q);
      if !issues.is_empty() {
        for issue in &issues {
          error!(target: "catalog", id = %q.id, %issue, "Skipping bank question");
        }
        continue;
      }
      if !ids.insert(q.id.clone()) {
        error!(target: "catalog", id = %q.id, "Skipping bank question: duplicate id");
        continue;
      }
      questions.push(q);
    }

    let catalog = Self::new(questions, sources, subjects);
    catalog.log_inventory();
    catalog
  }

  /// Built-in content, merged with the bank named by VESTIBULAR_BANK_PATH if set.
  pub fn from_env() -> Self {
    match load_bank_config_from_env() {
      Some(bank) => Self::with_bank(&bank),
      None => {
        let catalog = Self::builtin();
        catalog.log_inventory();
        catalog
      }
    }
  }

  /// Process-wide built-in catalog, built on first access.
  pub fn shared() -> &'static Catalog {
    static SHARED: OnceLock<Catalog> = OnceLock::new();
    SHARED.get_or_init(Catalog::builtin)
  }

  pub fn questions(&self) -> &[Question] {
    &self.questions
  }

  pub fn sources(&self) -> &[SourceDescriptor] {
    &self.sources
  }

  pub fn subjects(&self) -> &[String] {
    &self.subjects
  }

  pub fn years(&self) -> &'static [u16] {
    &COVERED_YEARS
  }

  pub fn stats(&self) -> &VestibularStats {
    &self.stats
  }

  pub fn len(&self) -> usize {
    self.questions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.questions.is_empty()
  }

  pub fn get(&self, id: &str) -> Option<&Question> {
    self.questions.iter().find(|q| q.id == id)
  }

  pub fn source(&self, code: &str) -> Option<&SourceDescriptor> {
    self.sources.iter().find(|s| s.id == code)
  }

  /// Matching questions in catalog order.
  pub fn filter<'a>(&'a self, f: &'a QuestionFilter) -> impl Iterator<Item = &'a Question> + 'a {
    self.questions.iter().filter(move |q| f.matches(q))
  }

  /// Distinct topics in order of first appearance.
  pub fn topics(&self) -> Vec<&str> {
    let mut seen = HashSet::new();
    self
      .questions
      .iter()
      .map(|q| q.topic.as_str())
      .filter(|t| !t.is_empty() && seen.insert(*t))
      .collect()
  }

  pub fn issues(&self) -> Vec<CatalogIssue> {
    validate_catalog(&self.questions, &self.sources, &self.subjects, self.years())
  }

  fn log_inventory(&self) {
    info!(
      target: "catalog",
      total = self.stats.total,
      sources = self.stats.total_sources,
      subjects = self.subjects.len(),
      "Startup catalog inventory"
    );
    for (source, count) in &self.stats.by_source {
      info!(target: "catalog", %source, count, "Questions by source");
    }
    let mut by_diff: HashMap<Difficulty, usize> = HashMap::new();
    for q in &self.questions {
      *by_diff.entry(q.difficulty).or_default() += 1;
    }
    for d in Difficulty::ALL {
      info!(target: "catalog", difficulty = %d, count = by_diff.get(&d).copied().unwrap_or(0), "Questions by difficulty");
    }
  }
}

impl Default for Catalog {
  fn default() -> Self {
    Self::builtin()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::parse_bank_config;
  use std::path::Path;

  #[test]
  fn builtin_stats_match_authored_data() {
    let c = Catalog::builtin();
    let s = c.stats();
    assert_eq!(s.total, 28);
    assert_eq!(s.total_questions, c.len());
    assert_eq!(s.total_sources, 8);
    assert_eq!(s.source_coverage(), s.total);
    assert_eq!(s.year_coverage(), s.total);
  }

  #[test]
  fn filter_combines_criteria() {
    let c = Catalog::builtin();
    let f = QuestionFilter {
      source: Some("ENEM".into()),
      year: Some(2024),
      difficulty: Some(Difficulty::Medium),
      ..Default::default()
    };
    let ids: Vec<_> = c.filter(&f).map(|q| q.id.as_str()).collect();
    assert_eq!(ids, ["ENEM_2024_Q01", "ENEM_2024_Q03", "ENEM_2024_Q05"]);
  }

  #[test]
  fn empty_filter_returns_everything_in_order() {
    let c = Catalog::builtin();
    let f = QuestionFilter::default();
    assert!(c.filter(&f).map(|q| &q.id).eq(c.questions().iter().map(|q| &q.id)));
  }

  #[test]
  fn topics_are_distinct_in_first_seen_order() {
    let c = Catalog::builtin();
    let topics = c.topics();
    assert_eq!(
      topics,
      [
        "Sistema Imunológico",
        "Genética",
        "Ecologia",
        "Bioquímica",
        "Fisiologia Humana",
        "Biologia Celular",
        "Evolução",
        "Microbiologia",
        "Química Orgânica",
        "Embriologia",
        "Anatomia",
        "Biologia Molecular",
      ]
    );
  }

  #[test]
  fn lookups_by_id_and_source_code() {
    let c = Catalog::builtin();
    assert_eq!(c.get("UNIFESP_2024_Q01").map(|q| q.topic.as_str()), Some("Fisiologia Humana"));
    assert!(c.get("UNIFESP_2019_Q01").is_none());
    assert_eq!(c.source("PUC_SP").map(|s| s.label.as_str()), Some("PUC-SP"));
  }

  #[test]
  fn bank_merge_skips_invalid_and_duplicate_entries() {
    let bank = parse_bank_config(
      r#"
subjects = ["Biologia", "Física Moderna"]

[[sources]]
id = "UERJ"
label = "UERJ"

[[sources]]
id = "ENEM"
label = "ENEM (duplicado)"

[[questions]]
source = "UERJ"
year = 2024
number = 1
subject = "Física"
text = "Unidade de carga elétrica no SI?"
correctAnswer = "A"
difficulty = "facil"
options = [{ letter = "A", text = "Coulomb" }, { letter = "B", text = "Volt" }]

[[questions]]
source = "UERJ"
year = 2024
number = 2
subject = "Física"
text = "Sem alternativa correta"
correctAnswer = "C"
difficulty = "medio"
options = [{ letter = "A", text = "x" }, { letter = "B", text = "y" }]

[[questions]]
id = "ENEM_2024_Q01"
source = "ENEM"
year = 2024
number = 1
subject = "Biologia"
text = "Colide com a questão embutida"
correctAnswer = "A"
difficulty = "dificil"
options = [{ letter = "A", text = "x" }]
"#,
      Path::new("bank.toml"),
    )
    .expect("valid bank");

    let c = Catalog::with_bank(&bank);
    assert_eq!(c.len(), 29);
    assert_eq!(c.sources().len(), 9);
    assert_eq!(c.source("ENEM").map(|s| s.label.as_str()), Some("ENEM"));
    assert_eq!(c.subjects().len(), 17);
    assert_eq!(c.subjects().last().map(String::as_str), Some("Física Moderna"));

    let added = c.get("UERJ_2024_Q01").expect("merged question");
    assert_eq!(added.source_label, "UERJ 2024");
    assert_eq!(c.stats().by_source["UERJ"], 1);
    assert_eq!(c.stats().by_subject["Física"], 1);
    assert_eq!(c.get("ENEM_2024_Q01").map(|q| q.difficulty), Some(Difficulty::Medium));
  }

  #[test]
  fn shared_catalog_is_built_once() {
    let a = Catalog::shared();
    let b = Catalog::shared();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.stats(), &Catalog::builtin().stats);
  }
}
