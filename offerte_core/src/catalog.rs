//! # Reference Tables & Calculation Context
//!
//! The four read-only reference tables supplied by the rates catalog:
//! standard-hours entries, correction factors, priced products and the
//! global settings. The engine only reads them; ownership and mutation
//! belong to the surrounding application.
//!
//! ## Lookup semantics
//!
//! - Standard-hours rows are found by scope id plus a **case-insensitive
//!   substring** match on the activity name; the first match in table order
//!   wins. One catalog row can intentionally serve several near-identical
//!   searches.
//! - A missing correction factor resolves to the neutral 1.0, never an
//!   error: a new factor category can appear in scope data before the table
//!   is populated without breaking calculation.
//! - A missing product means the material line is simply omitted.
//!
//! ## Example
//!
//! ```rust
//! use offerte_core::catalog::{CalculationContext, CorrectionFactor, Settings, StandardHours};
//! use offerte_core::pricebook::PriceBook;
//! use offerte_core::scopes::Accessibility;
//!
//! let ctx = CalculationContext::new(
//!     vec![StandardHours::new("grondwerk", "Ontgraven standaard", 0.08, "m²")],
//!     vec![CorrectionFactor::new("bereikbaarheid", "beperkt", 1.15)],
//!     vec![],
//!     Settings::default(),
//!     PriceBook::default(),
//! )
//! .with_site_conditions(Accessibility::Limited, None);
//!
//! assert!(ctx.find_hours("grondwerk", "ontgraven standaard").is_some());
//! assert_eq!(ctx.accessibility_factor(), 1.15);
//! assert_eq!(ctx.resolve_factor("knipwerk", "veel"), 1.0); // unconfigured: neutral
//! ```

use serde::{Deserialize, Serialize};

use crate::pricebook::PriceBook;
use crate::scopes::{Accessibility, BacklogSeverity};

// ============================================================================
// Reference tables
// ============================================================================

/// Standard labor hours per unit of work for a named activity ("normuur").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardHours {
    /// Scope id the activity belongs to
    pub scope: String,
    /// Activity name as shown on the quote line
    pub activity: String,
    /// Labor hours per unit
    pub hours_per_unit: f64,
    /// Unit of the primary driver (m², m, m³, stuk)
    pub unit: String,
}

impl StandardHours {
    pub fn new(scope: &str, activity: &str, hours_per_unit: f64, unit: &str) -> Self {
        Self {
            scope: scope.to_string(),
            activity: activity.to_string(),
            hours_per_unit,
            unit: unit.to_string(),
        }
    }
}

/// A multiplier adjusting standard hours for site or task conditions
/// ("correctiefactor"), keyed by category and selected value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionFactor {
    /// Factor category (bereikbaarheid, knipwerk, achterstalligheid, ...)
    #[serde(rename = "type")]
    pub factor_type: String,
    /// Selected value within the category
    pub value: String,
    /// The multiplier
    pub factor: f64,
}

impl CorrectionFactor {
    pub fn new(factor_type: &str, value: &str, factor: f64) -> Self {
        Self {
            factor_type: factor_type.to_string(),
            value: value.to_string(),
            factor,
        }
    }
}

/// A priced material from the products catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Sell price per unit in €
    pub sell_price: f64,
    pub unit: String,
    /// Quantity inflation applied before pricing (cutting loss, compaction)
    pub wastage_percent: f64,
}

impl Product {
    pub fn new(name: &str, sell_price: f64, unit: &str, wastage_percent: f64) -> Self {
        Self {
            name: name.to_string(),
            sell_price,
            unit: unit.to_string(),
            wastage_percent,
        }
    }
}

/// Global pricing settings from the settings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Hourly labor rate in €
    pub hourly_rate: f64,
    /// Default margin percentage when no override applies
    pub default_margin_percent: f64,
    /// VAT percentage applied at aggregation
    pub vat_percent: f64,
}

impl Settings {
    /// Check the settings before a calculation run.
    pub fn validate(&self) -> crate::errors::QuoteResult<()> {
        if self.hourly_rate <= 0.0 {
            return Err(crate::errors::QuoteError::invalid_input(
                "hourly_rate",
                self.hourly_rate.to_string(),
                "Hourly rate must be positive",
            ));
        }
        if self.vat_percent < 0.0 {
            return Err(crate::errors::QuoteError::invalid_input(
                "vat_percent",
                self.vat_percent.to_string(),
                "VAT percentage cannot be negative",
            ));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hourly_rate: 48.50,
            default_margin_percent: 25.0,
            vat_percent: 21.0,
        }
    }
}

// ============================================================================
// Calculation context
// ============================================================================

/// Bundles the reference tables, the price book and the selected site
/// conditions for one calculation run.
///
/// Constructed per request, set up once with
/// [`with_site_conditions`](CalculationContext::with_site_conditions), and
/// read-only during scope dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationContext {
    pub standard_hours: Vec<StandardHours>,
    pub correction_factors: Vec<CorrectionFactor>,
    pub products: Vec<Product>,
    pub settings: Settings,
    pub price_book: PriceBook,
    /// Selected site accessibility, applied to every labor line
    pub accessibility: Accessibility,
    /// Selected maintenance backlog severity, if any
    pub backlog: Option<BacklogSeverity>,
}

impl CalculationContext {
    /// Create a context over fully loaded reference tables.
    pub fn new(
        standard_hours: Vec<StandardHours>,
        correction_factors: Vec<CorrectionFactor>,
        products: Vec<Product>,
        settings: Settings,
        price_book: PriceBook,
    ) -> Self {
        Self {
            standard_hours,
            correction_factors,
            products,
            settings,
            price_book,
            accessibility: Accessibility::default(),
            backlog: None,
        }
    }

    /// Set the site conditions for this run.
    pub fn with_site_conditions(
        mut self,
        accessibility: Accessibility,
        backlog: Option<BacklogSeverity>,
    ) -> Self {
        self.accessibility = accessibility;
        self.backlog = backlog;
        self
    }

    /// Find a standard-hours entry by scope and activity-name fragment.
    ///
    /// Case-insensitive substring match on the activity name; first match
    /// in table order wins.
    pub fn find_hours(&self, scope: &str, term: &str) -> Option<&StandardHours> {
        let needle = term.to_lowercase();
        let found = self
            .standard_hours
            .iter()
            .find(|entry| entry.scope == scope && entry.activity.to_lowercase().contains(&needle));
        if found.is_none() {
            tracing::debug!(scope, term, "no standard-hours entry; labor line omitted");
        }
        found
    }

    /// Resolve a correction factor by category and value.
    ///
    /// Returns the neutral 1.0 when no pair matches; an unconfigured factor
    /// is not a fault.
    pub fn resolve_factor(&self, factor_type: &str, value: &str) -> f64 {
        self.correction_factors
            .iter()
            .find(|cf| cf.factor_type == factor_type && cf.value == value)
            .map(|cf| cf.factor)
            .unwrap_or(1.0)
    }

    /// Find a product by name fragment (same substring semantics as the
    /// activity lookup).
    pub fn find_product(&self, term: &str) -> Option<&Product> {
        let needle = term.to_lowercase();
        let found = self
            .products
            .iter()
            .find(|p| p.name.to_lowercase().contains(&needle));
        if found.is_none() {
            tracing::debug!(term, "no product match; material line omitted");
        }
        found
    }

    /// The accessibility multiplier for the selected site condition.
    pub fn accessibility_factor(&self) -> f64 {
        self.resolve_factor("bereikbaarheid", self.accessibility.key())
    }

    /// The backlog multiplier for the selected severity, neutral when no
    /// severity is selected.
    pub fn backlog_factor(&self) -> f64 {
        match self.backlog {
            Some(severity) => self.resolve_factor("achterstalligheid", severity.key()),
            None => 1.0,
        }
    }
}

// ============================================================================
// Test fixtures
// ============================================================================

/// Reference tables used across the calculator tests.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::scopes::scope_ids::*;

    pub fn standard_hours() -> Vec<StandardHours> {
        vec![
            StandardHours::new(GRONDWERK, "Ontgraven licht", 0.05, "m²"),
            StandardHours::new(GRONDWERK, "Ontgraven standaard", 0.08, "m²"),
            StandardHours::new(GRONDWERK, "Ontgraven zwaar", 0.12, "m²"),
            StandardHours::new(GRONDWERK, "Grond afvoeren", 0.10, "m³"),
            StandardHours::new(BESTRATING, "Bestraten tegels", 0.25, "m²"),
            StandardHours::new(BESTRATING, "Bestraten klinkers", 0.35, "m²"),
            StandardHours::new(BESTRATING, "Bestraten natuursteen", 0.50, "m²"),
            StandardHours::new(BESTRATING, "Zandbed aanbrengen", 0.05, "m²"),
            StandardHours::new(BESTRATING, "Opsluitband zetten", 0.20, "m"),
            StandardHours::new(GAZON_AANLEG, "Grond egaliseren", 0.03, "m²"),
            StandardHours::new(GAZON_AANLEG, "Gazon zaaien", 0.02, "m²"),
            StandardHours::new(GAZON_AANLEG, "Graszoden leggen", 0.06, "m²"),
            StandardHours::new(BEPLANTING, "Beplanting aanbrengen", 0.15, "stuk"),
            StandardHours::new(BEPLANTING, "Grondverbetering doorwerken", 0.04, "m²"),
            StandardHours::new(HAAG_AANPLANT, "Haag planten", 0.20, "stuk"),
            StandardHours::new(SCHUTTING, "Schutting plaatsen", 0.75, "m"),
            StandardHours::new(VIJVER, "Vijver uitgraven", 0.60, "m³"),
            StandardHours::new(VIJVER, "Vijverfolie aanbrengen", 0.10, "m²"),
            StandardHours::new(BEREGENING, "Beregening leidingwerk", 0.15, "m"),
            StandardHours::new(BEREGENING, "Sproeier monteren", 0.50, "stuk"),
            StandardHours::new(BORDER_AANLEG, "Border aanleggen", 0.30, "m²"),
            StandardHours::new(GAZON_ONDERHOUD, "Gazon maaien", 0.01, "m²"),
            StandardHours::new(HAAG_ONDERHOUD, "Haag knippen", 0.25, "m"),
            StandardHours::new(HAAG_ONDERHOUD_UITGEBREID, "Haag knippen", 0.40, "m³"),
            StandardHours::new(SNOEIEN, "Snoeien klein", 0.50, "stuk"),
            StandardHours::new(SNOEIEN, "Snoeien middelgroot", 1.00, "stuk"),
            StandardHours::new(SNOEIEN, "Snoeien groot", 2.50, "stuk"),
            StandardHours::new(ONKRUIDBESTRIJDING, "Onkruid wieden", 0.04, "m²"),
            StandardHours::new(ONKRUIDBESTRIJDING, "Onkruid branden", 0.02, "m²"),
            StandardHours::new(BEMESTING, "Bemesten gazon", 0.005, "m²"),
            StandardHours::new(MOLLENBESTRIJDING, "Gazonherstel na mollen", 0.02, "m²"),
            StandardHours::new(MOLLENBESTRIJDING, "Mollengaas aanbrengen", 0.08, "m²"),
            StandardHours::new(BLADRUIMEN, "Bladruimen", 0.008, "m²"),
            StandardHours::new(BORDER_ONDERHOUD, "Borders schoffelen", 0.05, "m²"),
        ]
    }

    pub fn correction_factors() -> Vec<CorrectionFactor> {
        vec![
            CorrectionFactor::new("bereikbaarheid", "goed", 1.0),
            CorrectionFactor::new("bereikbaarheid", "beperkt", 1.15),
            CorrectionFactor::new("bereikbaarheid", "slecht", 1.3),
            CorrectionFactor::new("knipwerk", "geen", 1.0),
            CorrectionFactor::new("knipwerk", "weinig", 1.1),
            CorrectionFactor::new("knipwerk", "veel", 1.25),
            CorrectionFactor::new("achterstalligheid", "licht", 1.1),
            CorrectionFactor::new("achterstalligheid", "matig", 1.25),
            CorrectionFactor::new("achterstalligheid", "ernstig", 1.5),
        ]
    }

    pub fn products() -> Vec<Product> {
        vec![
            Product::new("Afvoer grond (stort)", 18.50, "m³", 0.0),
            Product::new("Straatzand", 32.00, "m³", 10.0),
            Product::new("Opsluitband 100x20x6", 8.50, "m", 5.0),
            Product::new("Graszaad sportveldmengsel", 12.50, "kg", 0.0),
            Product::new("Graszoden", 4.25, "m²", 5.0),
            Product::new("Vaste planten mix", 6.50, "stuk", 0.0),
            Product::new("Bodemverbeteraar", 45.00, "m³", 0.0),
            Product::new("Haagplanten liguster", 3.95, "stuk", 0.0),
            Product::new("Plantgrond", 38.00, "m³", 0.0),
            Product::new("Schuttingscherm 180x180", 62.50, "stuk", 0.0),
            Product::new("Schuttingpaal hardhout", 24.50, "stuk", 0.0),
            Product::new("Vijverfolie EPDM", 9.75, "m²", 10.0),
            Product::new("Beregeningsbuis PE 25mm", 1.85, "m", 5.0),
            Product::new("Pop-up sproeier", 18.50, "stuk", 0.0),
            Product::new("Tuinaarde", 29.50, "m³", 0.0),
            Product::new("Gazonmest organisch", 2.35, "kg", 0.0),
            Product::new("Mollengaas", 3.10, "m²", 10.0),
            Product::new("Afvoer groenafval", 12.50, "m³", 0.0),
            Product::new("Boomschors sierschors", 55.00, "m³", 0.0),
        ]
    }

    /// Full demo context: all tables, default settings and price book,
    /// good accessibility, no backlog.
    pub fn demo_context() -> CalculationContext {
        CalculationContext::new(
            standard_hours(),
            correction_factors(),
            products(),
            Settings::default(),
            PriceBook::default(),
        )
    }
}
