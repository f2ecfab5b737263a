//! Serialized export shapes. Field names match what existing consumers read
//! (`sourceLabel`, `bySource`, ...), so treat them as stable.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::domain::{Question, SourceDescriptor};
use crate::stats::VestibularStats;

/// The whole catalog as one JSON document.
#[derive(Debug, Serialize)]
pub struct CatalogExport<'a> {
    pub sources: &'a [SourceDescriptor],
    pub subjects: &'a [String],
    pub years: &'a [u16],
    pub questions: &'a [Question],
    pub stats: &'a VestibularStats,
}

impl<'a> From<&'a Catalog> for CatalogExport<'a> {
    fn from(c: &'a Catalog) -> Self {
        Self {
            sources: c.sources(),
            subjects: c.subjects(),
            years: c.years(),
            questions: c.questions(),
            stats: c.stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_carries_every_section() {
        let catalog = Catalog::builtin();
        let v = serde_json::to_value(CatalogExport::from(&catalog)).expect("serialize");
        assert_eq!(v["questions"].as_array().map(Vec::len), Some(28));
        assert_eq!(v["sources"][0]["id"], "ENEM");
        assert_eq!(v["years"][4], 2024);
        assert_eq!(v["stats"]["bySource"]["ENEM"], 11);
        assert_eq!(v["questions"][0]["correctAnswer"], "B");
    }
}
