//! Vestibular question bank.
//!
//! A read-only catalog of medical-school entrance exam questions (ENEM,
//! FUVEST/USP, Santa Casa, UNIVAG, PUC-SP, Einstein, UNICAMP, UNIFESP) with
//! source and subject reference lists, and counts per source, subject and year.
//!
//! ```
//! use vestibular_bank::Catalog;
//!
//! let catalog = Catalog::shared();
//! assert_eq!(catalog.stats().total, catalog.questions().len());
//! ```

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod protocol;
pub mod seeds;
pub mod stats;
pub mod telemetry;
pub mod validate;

pub use catalog::{Catalog, QuestionFilter};
pub use domain::{AnswerOption, Difficulty, Question, SourceDescriptor};
pub use error::CatalogError;
pub use stats::VestibularStats;
