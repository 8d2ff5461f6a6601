//! # Quote Container
//!
//! The quote document as handed to the persistence and export
//! collaborators: metadata, the generated line items and the totals
//! snapshot. Storage itself happens outside this crate; the container only
//! models the document and serializes to human-readable JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{QuoteError, QuoteResult};
use crate::lines::LineItem;
use crate::scopes::QuoteType;
use crate::totals::Totals;

/// Current schema version for serialized quotes
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Quote metadata stored in the document header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,
    /// Customer name
    pub customer: String,
    /// Quote reference (e.g., "2026-042")
    pub reference: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// A quote document: header, generated lines and totals snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub meta: QuoteMetadata,
    pub quote_type: QuoteType,
    pub lines: Vec<LineItem>,
    /// Set once the lines have been aggregated
    pub totals: Option<Totals>,
}

impl Quote {
    /// Create a new empty quote.
    pub fn new(
        customer: impl Into<String>,
        reference: impl Into<String>,
        quote_type: QuoteType,
    ) -> Self {
        let now = Utc::now();
        Quote {
            id: Uuid::new_v4(),
            meta: QuoteMetadata {
                version: SCHEMA_VERSION.to_string(),
                customer: customer.into(),
                reference: reference.into(),
                created: now,
                modified: now,
            },
            quote_type,
            lines: Vec::new(),
            totals: None,
        }
    }

    /// Store a calculation result on the quote.
    pub fn set_result(&mut self, lines: Vec<LineItem>, totals: Totals) {
        self.lines = lines;
        self.totals = Some(totals);
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Serialize to pretty JSON for the persistence layer.
    pub fn to_json(&self) -> QuoteResult<String> {
        serde_json::to_string_pretty(self).map_err(QuoteError::serialization)
    }

    /// Parse a stored quote.
    pub fn from_json(json: &str) -> QuoteResult<Quote> {
        serde_json::from_str(json).map_err(QuoteError::serialization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::LineItem;
    use crate::totals::aggregate;
    use std::collections::HashMap;

    #[test]
    fn test_new_quote_has_header() {
        let quote = Quote::new("Fam. Jansen", "2026-042", QuoteType::Aanleg);
        assert_eq!(quote.meta.version, SCHEMA_VERSION);
        assert_eq!(quote.meta.customer, "Fam. Jansen");
        assert!(quote.lines.is_empty());
        assert!(quote.totals.is_none());
    }

    #[test]
    fn test_set_result_touches_modified() {
        let mut quote = Quote::new("Fam. Jansen", "2026-042", QuoteType::Onderhoud);
        let created = quote.meta.created;

        let lines = vec![LineItem::labor("bemesting", "Bemesten gazon", 1.0, 48.50)];
        let totals = aggregate(&lines, 25.0, 21.0, &HashMap::new());
        quote.set_result(lines, totals);

        assert_eq!(quote.lines.len(), 1);
        assert!(quote.totals.is_some());
        assert!(quote.meta.modified >= created);
    }

    #[test]
    fn test_json_round_trip() {
        let mut quote = Quote::new("Fam. Jansen", "2026-042", QuoteType::Aanleg);
        let lines = vec![LineItem::labor("grondwerk", "Ontgraven standaard", 8.0, 48.50)];
        let totals = aggregate(&lines, 25.0, 21.0, &HashMap::new());
        quote.set_result(lines, totals);

        let json = quote.to_json().unwrap();
        let parsed = Quote::from_json(&json).unwrap();
        assert_eq!(parsed, quote);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Quote::from_json("{").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
