//! # Quote Lines
//!
//! One priced row on a quote ("offerteregel"): labor, material or machine
//! rental. The constructors enforce the money invariants so calculators
//! cannot emit a malformed line:
//!
//! - `total = round2(quantity × unit_price)` on every line
//! - labor quantities are quarter-hour multiples
//! - material quantities include the wastage inflation before pricing
//! - machine quantities are whole rental days
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "id": "4f9f4c3e-1db0-4f5e-9e1a-0f6f4c3e1db0",
//!   "scope": "grondwerk",
//!   "description": "Ontgraven standaard",
//!   "unit": "uur",
//!   "quantity": 8.0,
//!   "unit_price": 48.5,
//!   "total": 388.0,
//!   "kind": "labor"
//! }
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Settings;
use crate::pricebook::PriceBook;
use crate::rounding::{round_money, round_quarter_hour};

/// Scope id used for the cross-cutting lines built outside scope dispatch.
pub const SCOPE_GENERAL: &str = "algemeen";

/// The three line kinds on a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Crew hours at the global hourly rate
    Labor,
    /// Priced product, wastage included in the quantity
    Material,
    /// Machine rental in whole days
    Machine,
}

/// One priced row on a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable identifier for persistence and export
    pub id: Uuid,
    /// Scope id this line belongs to
    pub scope: String,
    /// Human-readable description shown on the quote
    pub description: String,
    /// Unit of the quantity (uur, m², m³, stuk, dag)
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
    /// Always `round2(quantity × unit_price)`
    pub total: f64,
    pub kind: LineKind,
    /// Line-level margin override; wins over scope and global margins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_override_percent: Option<f64>,
}

impl LineItem {
    fn build(
        scope: &str,
        description: &str,
        unit: &str,
        quantity: f64,
        unit_price: f64,
        kind: LineKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            scope: scope.to_string(),
            description: description.to_string(),
            unit: unit.to_string(),
            quantity,
            unit_price,
            total: round_money(quantity * unit_price),
            kind,
            margin_override_percent: None,
        }
    }

    /// Build a labor line; hours are rounded to the nearest quarter.
    pub fn labor(scope: &str, description: &str, hours: f64, hourly_rate: f64) -> Self {
        Self::build(
            scope,
            description,
            "uur",
            round_quarter_hour(hours),
            hourly_rate,
            LineKind::Labor,
        )
    }

    /// Build a material line; the wastage percentage inflates the quantity
    /// before the total is computed.
    pub fn material(
        scope: &str,
        description: &str,
        unit: &str,
        base_quantity: f64,
        wastage_percent: f64,
        unit_price: f64,
    ) -> Self {
        let quantity = round_money(base_quantity * (1.0 + wastage_percent / 100.0));
        Self::build(scope, description, unit, quantity, unit_price, LineKind::Material)
    }

    /// Build a machine-rental line for a whole number of days.
    pub fn machine(scope: &str, description: &str, days: f64, day_rate: f64) -> Self {
        Self::build(scope, description, "dag", days.ceil(), day_rate, LineKind::Machine)
    }

    /// Attach a line-level margin override.
    pub fn with_margin_override(mut self, percent: f64) -> Self {
        self.margin_override_percent = Some(percent);
        self
    }
}

// ============================================================================
// Cross-cutting factory helpers
// ============================================================================
//
// These two lines are appended by the caller, outside the scope-dispatch
// path: a flat quote-preparation charge and the optional warranty package.

/// Flat quote-preparation overhead: fixed hours at the global hourly rate.
pub fn preparation_overhead_line(settings: &Settings, book: &PriceBook) -> LineItem {
    LineItem::labor(
        SCOPE_GENERAL,
        "Voorbereiding en uitwerking offerte",
        book.overhead.preparation_hours,
        settings.hourly_rate,
    )
}

/// Optional warranty package at a flat price.
pub fn warranty_line(book: &PriceBook) -> LineItem {
    LineItem::material(
        SCOPE_GENERAL,
        "Garantiepakket aanleg",
        "stuk",
        1.0,
        0.0,
        book.overhead.warranty_price,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::is_quarter_aligned;

    #[test]
    fn test_labor_line_rounds_to_quarter_hours() {
        let line = LineItem::labor("grondwerk", "Ontgraven standaard", 8.12, 48.50);
        assert_eq!(line.quantity, 8.0);
        assert!(is_quarter_aligned(line.quantity));
        assert_eq!(line.unit, "uur");
        assert_eq!(line.kind, LineKind::Labor);
        assert_eq!(line.total, 388.0);
    }

    #[test]
    fn test_material_line_applies_wastage_before_total() {
        // 10 m³ at 10% wastage: quantity 11.0, total 11 × 32
        let line = LineItem::material("bestrating", "Straatzand", "m³", 10.0, 10.0, 32.00);
        assert_eq!(line.quantity, 11.0);
        assert_eq!(line.total, 352.0);
        assert_eq!(line.kind, LineKind::Material);
    }

    #[test]
    fn test_total_invariant() {
        let line = LineItem::material("bestrating", "Straatzand", "m³", 3.33, 10.0, 31.99);
        assert_eq!(line.total, round_money(line.quantity * line.unit_price));
    }

    #[test]
    fn test_machine_line_uses_whole_days() {
        let line = LineItem::machine("haag-onderhoud-uitgebreid", "Hoogwerker huur", 2.2, 285.0);
        assert_eq!(line.quantity, 3.0);
        assert_eq!(line.unit, "dag");
        assert_eq!(line.total, 855.0);
    }

    #[test]
    fn test_margin_override() {
        let line = LineItem::labor("bemesting", "Bemesten gazon", 1.0, 48.50)
            .with_margin_override(70.0);
        assert_eq!(line.margin_override_percent, Some(70.0));
    }

    #[test]
    fn test_cross_cutting_factories() {
        let settings = Settings::default();
        let book = PriceBook::default();

        let prep = preparation_overhead_line(&settings, &book);
        assert_eq!(prep.scope, SCOPE_GENERAL);
        assert_eq!(prep.kind, LineKind::Labor);
        assert_eq!(prep.quantity, 1.5);
        assert_eq!(prep.total, round_money(1.5 * settings.hourly_rate));

        let warranty = warranty_line(&book);
        assert_eq!(warranty.kind, LineKind::Material);
        assert_eq!(warranty.total, book.overhead.warranty_price);
    }

    #[test]
    fn test_serialization_skips_missing_override() {
        let line = LineItem::labor("grondwerk", "Ontgraven standaard", 1.0, 48.50);
        let json = serde_json::to_string(&line).unwrap();
        assert!(!json.contains("margin_override_percent"));
        assert!(json.contains("\"kind\":\"labor\""));

        let roundtrip: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, line);
    }
}
