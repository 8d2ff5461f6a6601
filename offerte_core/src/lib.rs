//! # offerte_core - Quote Line-Item Generation Engine
//!
//! `offerte_core` turns a declarative description of a landscaping or
//! garden-maintenance project (areas, dimensions, material choices, site
//! conditions) into a fully priced, itemized set of quote lines using
//! externally supplied rate tables. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take input and return results; no
//!   I/O anywhere in the calculation path
//! - **Never throws for missing configuration**: an unmatched catalog
//!   lookup omits a line, an unconfigured correction factor is neutral
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Injectable rates**: every numeric table lives in data the caller
//!   supplies, not in compiled-in literals
//!
//! ## Quick Start
//!
//! ```rust
//! use offerte_core::catalog::{CalculationContext, Settings, StandardHours};
//! use offerte_core::dispatch::{generate, CalculationInput};
//! use offerte_core::pricebook::PriceBook;
//! use offerte_core::scopes::{Accessibility, DepthClass, QuoteType, ScopeData};
//! use offerte_core::totals::aggregate_with_settings;
//! use std::collections::HashMap;
//!
//! let input = CalculationInput {
//!     quote_type: QuoteType::Aanleg,
//!     scope_ids: vec!["grondwerk".to_string()],
//!     scope_data: HashMap::from([(
//!         "grondwerk".to_string(),
//!         ScopeData::Excavation { area_m2: 100.0, depth: DepthClass::Standard, haul_away: false },
//!     )]),
//!     accessibility: Accessibility::Good,
//!     backlog: None,
//! };
//!
//! let ctx = CalculationContext::new(
//!     vec![StandardHours::new("grondwerk", "Ontgraven standaard", 0.08, "m²")],
//!     vec![],
//!     vec![],
//!     Settings::default(),
//!     PriceBook::default(),
//! )
//! .with_site_conditions(input.accessibility, input.backlog);
//!
//! let lines = generate(&input, &ctx);
//! let totals = aggregate_with_settings(&lines, &ctx.settings, &HashMap::new());
//! assert_eq!(totals.total_hours, 8.0);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Reference tables and the calculation context
//! - [`pricebook`] - Injectable numeric constants
//! - [`scopes`] - Scope data model and the per-scope calculators
//! - [`dispatch`] - Calculator registry and line generation
//! - [`totals`] - Totals aggregation with margin precedence
//! - [`lines`] - Line items and cross-cutting factory helpers
//! - [`rounding`] - Quarter-hour and money rounding
//! - [`quote`] - Quote document container
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod dispatch;
pub mod errors;
pub mod lines;
pub mod pricebook;
pub mod quote;
pub mod rounding;
pub mod scopes;
pub mod totals;

// Re-export commonly used types at crate root for convenience
pub use catalog::{CalculationContext, CorrectionFactor, Product, Settings, StandardHours};
pub use dispatch::{generate, generate_with, CalculationInput, ScopeRegistry};
pub use errors::{QuoteError, QuoteResult};
pub use lines::{preparation_overhead_line, warranty_line, LineItem, LineKind};
pub use pricebook::PriceBook;
pub use quote::Quote;
pub use scopes::{Accessibility, BacklogSeverity, QuoteType, ScopeData};
pub use totals::{aggregate, aggregate_with_settings, Totals};
