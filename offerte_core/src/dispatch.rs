//! # Scope Dispatch
//!
//! Routes each requested scope id to its calculator through a registry
//! keyed by `(quote type, scope id)`. The registry keeps the dispatch open
//! for extension: a new scope is a new `register` call, not an edit to a
//! central match.
//!
//! Missing scope data and unregistered ids are skipped silently; the
//! caller decides whether an empty result deserves a user-facing warning.
//!
//! ## Example
//!
//! ```rust
//! use offerte_core::catalog::{CalculationContext, Settings};
//! use offerte_core::dispatch::{generate, CalculationInput};
//! use offerte_core::pricebook::PriceBook;
//! use offerte_core::scopes::{Accessibility, DepthClass, QuoteType, ScopeData};
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
//! let ctx = CalculationContext::new(vec![], vec![], vec![], Settings::default(), PriceBook::default())
//!     .with_site_conditions(input.accessibility, input.backlog);
//! // no standard-hours table loaded: nothing is generated, nothing fails
//! assert!(generate(&input, &ctx).is_empty());
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::CalculationContext;
use crate::errors::{QuoteError, QuoteResult};
use crate::lines::LineItem;
use crate::scopes::{
    border_construction, border_maintenance, excavation, fence, fertilization, hedge,
    hedge_planting, irrigation, lawn_install, lawn_maintenance, leaf_clearing, mole_control,
    paving, planting, pond, pruning, scope_ids, weed_control, Accessibility, BacklogSeverity,
    QuoteType, ScopeData,
};

/// The calculation request as supplied by the surrounding application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationInput {
    pub quote_type: QuoteType,
    /// Requested scope ids, in quote order
    pub scope_ids: Vec<String>,
    /// Scope data per requested id; ids without data are skipped
    pub scope_data: HashMap<String, ScopeData>,
    pub accessibility: Accessibility,
    #[serde(default)]
    pub backlog: Option<BacklogSeverity>,
}

impl CalculationInput {
    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> QuoteResult<Self> {
        serde_json::from_str(json).map_err(QuoteError::serialization)
    }
}

/// A scope calculator: pure function from scope data and context to lines.
pub type CalculatorFn = fn(&ScopeData, &CalculationContext) -> Vec<LineItem>;

/// Registry of calculators keyed by `(quote type, scope id)`.
pub struct ScopeRegistry {
    calculators: HashMap<(QuoteType, String), CalculatorFn>,
}

impl ScopeRegistry {
    /// Empty registry; use [`ScopeRegistry::with_builtins`] for the
    /// standard set.
    pub fn new() -> Self {
        Self {
            calculators: HashMap::new(),
        }
    }

    /// Registry with all built-in calculators installed.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register(QuoteType::Aanleg, scope_ids::GRONDWERK, excavation::calculate);
        registry.register(QuoteType::Aanleg, scope_ids::BESTRATING, paving::calculate);
        registry.register(QuoteType::Aanleg, scope_ids::GAZON_AANLEG, lawn_install::calculate);
        registry.register(QuoteType::Aanleg, scope_ids::BEPLANTING, planting::calculate);
        registry.register(QuoteType::Aanleg, scope_ids::HAAG_AANPLANT, hedge_planting::calculate);
        registry.register(QuoteType::Aanleg, scope_ids::SCHUTTING, fence::calculate);
        registry.register(QuoteType::Aanleg, scope_ids::VIJVER, pond::calculate);
        registry.register(QuoteType::Aanleg, scope_ids::BEREGENING, irrigation::calculate);
        registry.register(
            QuoteType::Aanleg,
            scope_ids::BORDER_AANLEG,
            border_construction::calculate,
        );

        registry.register(
            QuoteType::Onderhoud,
            scope_ids::GAZON_ONDERHOUD,
            lawn_maintenance::calculate,
        );
        registry.register(
            QuoteType::Onderhoud,
            scope_ids::HAAG_ONDERHOUD,
            hedge::calculate_basic,
        );
        registry.register(
            QuoteType::Onderhoud,
            scope_ids::HAAG_ONDERHOUD_UITGEBREID,
            hedge::calculate_extended,
        );
        registry.register(QuoteType::Onderhoud, scope_ids::SNOEIEN, pruning::calculate);
        registry.register(
            QuoteType::Onderhoud,
            scope_ids::ONKRUIDBESTRIJDING,
            weed_control::calculate,
        );
        registry.register(QuoteType::Onderhoud, scope_ids::BEMESTING, fertilization::calculate);
        registry.register(
            QuoteType::Onderhoud,
            scope_ids::MOLLENBESTRIJDING,
            mole_control::calculate,
        );
        registry.register(QuoteType::Onderhoud, scope_ids::BLADRUIMEN, leaf_clearing::calculate);
        registry.register(
            QuoteType::Onderhoud,
            scope_ids::BORDER_ONDERHOUD,
            border_maintenance::calculate,
        );

        registry
    }

    /// Install (or replace) a calculator for a scope id.
    pub fn register(&mut self, quote_type: QuoteType, scope_id: &str, calculator: CalculatorFn) {
        self.calculators
            .insert((quote_type, scope_id.to_string()), calculator);
    }

    /// Look up the calculator for a scope id, if registered.
    pub fn get(&self, quote_type: QuoteType, scope_id: &str) -> Option<CalculatorFn> {
        self.calculators
            .get(&(quote_type, scope_id.to_string()))
            .copied()
    }

    /// Strict lookup for callers that want to reject unknown ids up front.
    pub fn require(&self, quote_type: QuoteType, scope_id: &str) -> QuoteResult<CalculatorFn> {
        self.get(quote_type, scope_id)
            .ok_or_else(|| QuoteError::unknown_scope(quote_type.key(), scope_id))
    }
}

impl Default for ScopeRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Shared registry with the built-in calculators.
static BUILTINS: Lazy<ScopeRegistry> = Lazy::new(ScopeRegistry::with_builtins);

/// Generate line items for a request using the built-in registry.
///
/// The context's site conditions must reflect the request; see
/// [`CalculationContext::with_site_conditions`](crate::catalog::CalculationContext::with_site_conditions).
pub fn generate(input: &CalculationInput, ctx: &CalculationContext) -> Vec<LineItem> {
    generate_with(&BUILTINS, input, ctx)
}

/// Generate line items using a caller-supplied registry.
///
/// Lines preserve calculator-internal ordering, across scopes in request
/// order.
pub fn generate_with(
    registry: &ScopeRegistry,
    input: &CalculationInput,
    ctx: &CalculationContext,
) -> Vec<LineItem> {
    let mut lines = Vec::new();
    for scope_id in &input.scope_ids {
        let Some(data) = input.scope_data.get(scope_id) else {
            tracing::debug!(scope = %scope_id, "no scope data supplied; skipped");
            continue;
        };
        let Some(calculator) = registry.get(input.quote_type, scope_id) else {
            tracing::warn!(
                scope = %scope_id,
                quote_type = %input.quote_type,
                "no calculator registered; skipped"
            );
            continue;
        };
        let produced = calculator(data, ctx);
        tracing::debug!(scope = %scope_id, lines = produced.len(), "scope calculated");
        lines.extend(produced);
    }
    lines
}
