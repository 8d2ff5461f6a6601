//! # Totals Aggregation
//!
//! Reduces the generated line items to the quote's summary figures. The
//! effective margin per line resolves with a fixed precedence:
//!
//! 1. the line's own override,
//! 2. a per-scope override from the request,
//! 3. the global default.
//!
//! Labor and machine-rental lines both count as labor cost
//! ("arbeidskosten"); the quote-level effective margin percentage is
//! derived from the totals (`margin / subtotal`), not by averaging the
//! per-line percentages, which matters when lines carry heterogeneous
//! overrides.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Settings;
use crate::lines::{LineItem, LineKind};
use crate::rounding::{round_money, round_quarter_hour};

/// Summary figures for a quote. Currency fields are rounded to two
/// decimals; `total_hours` to the nearest quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub material_cost: f64,
    /// Labor plus machine rental
    pub labor_cost: f64,
    /// Sum of labor-line hours
    pub total_hours: f64,
    /// `material_cost + labor_cost`
    pub subtotal: f64,
    pub margin: f64,
    /// `margin / subtotal`, as a percentage of the whole quote
    pub effective_margin_percent: f64,
    /// `subtotal + margin`
    pub ex_vat: f64,
    pub vat: f64,
    /// `ex_vat + vat`
    pub incl_vat: f64,
}

/// Aggregate line items into totals.
///
/// `scope_margin_overrides` maps scope ids to margin percentages that win
/// over the global default but lose to line-level overrides.
pub fn aggregate(
    lines: &[LineItem],
    global_margin_percent: f64,
    vat_percent: f64,
    scope_margin_overrides: &HashMap<String, f64>,
) -> Totals {
    let mut material = 0.0;
    let mut labor = 0.0;
    let mut hours = 0.0;
    let mut margin = 0.0;

    for line in lines {
        let effective_percent = line
            .margin_override_percent
            .or_else(|| scope_margin_overrides.get(&line.scope).copied())
            .unwrap_or(global_margin_percent);
        margin += line.total * effective_percent / 100.0;

        match line.kind {
            LineKind::Material => material += line.total,
            LineKind::Labor => {
                labor += line.total;
                hours += line.quantity;
            }
            LineKind::Machine => labor += line.total,
        }
    }

    let material_cost = round_money(material);
    let labor_cost = round_money(labor);
    let subtotal = round_money(material + labor);
    let margin = round_money(margin);
    let effective_margin_percent = if subtotal > 0.0 {
        round_money(margin / subtotal * 100.0)
    } else {
        0.0
    };
    let ex_vat = round_money(subtotal + margin);
    let vat = round_money(ex_vat * vat_percent / 100.0);
    let incl_vat = round_money(ex_vat + vat);

    Totals {
        material_cost,
        labor_cost,
        total_hours: round_quarter_hour(hours),
        subtotal,
        margin,
        effective_margin_percent,
        ex_vat,
        vat,
        incl_vat,
    }
}

/// Aggregate using the global settings for margin and VAT.
pub fn aggregate_with_settings(
    lines: &[LineItem],
    settings: &Settings,
    scope_margin_overrides: &HashMap<String, f64>,
) -> Totals {
    aggregate(
        lines,
        settings.default_margin_percent,
        settings.vat_percent,
        scope_margin_overrides,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labor(scope: &str, total: f64) -> LineItem {
        // 1 hour at `total` so line.total == total
        LineItem::labor(scope, "Arbeid", 1.0, total)
    }

    fn no_overrides() -> HashMap<String, f64> {
        HashMap::new()
    }

    #[test]
    fn test_margin_precedence_line_beats_scope_beats_global() {
        let overrides = HashMap::from([("gazon-onderhoud".to_string(), 40.0)]);

        // line override wins
        let line = labor("gazon-onderhoud", 100.0).with_margin_override(70.0);
        let totals = aggregate(std::slice::from_ref(&line), 25.0, 21.0, &overrides);
        assert_eq!(totals.margin, 70.0);

        // without the line override, the scope override applies
        let line = labor("gazon-onderhoud", 100.0);
        let totals = aggregate(std::slice::from_ref(&line), 25.0, 21.0, &overrides);
        assert_eq!(totals.margin, 40.0);

        // without either, the global default applies
        let totals = aggregate(std::slice::from_ref(&line), 25.0, 21.0, &no_overrides());
        assert_eq!(totals.margin, 25.0);
    }

    #[test]
    fn test_machine_counts_as_labor_cost_but_not_hours() {
        let lines = vec![
            labor("snoeien", 100.0),
            LineItem::machine("snoeien", "Hoogwerker huur", 2.0, 285.0),
            LineItem::material("snoeien", "Afvoer groenafval", "m³", 2.0, 0.0, 12.50),
        ];
        let totals = aggregate(&lines, 0.0, 0.0, &no_overrides());
        assert_eq!(totals.labor_cost, 670.0);
        assert_eq!(totals.material_cost, 25.0);
        assert_eq!(totals.total_hours, 1.0);
        assert_eq!(totals.subtotal, 695.0);
    }

    #[test]
    fn test_effective_percent_is_derived_from_totals_not_averaged() {
        let lines = vec![
            labor("bemesting", 100.0).with_margin_override(70.0),
            labor("gazon-onderhoud", 300.0).with_margin_override(10.0),
        ];
        let totals = aggregate(&lines, 25.0, 21.0, &no_overrides());
        // margin = 70 + 30 = 100 over a 400 subtotal: 25%, not avg(70, 10) = 40%
        assert_eq!(totals.margin, 100.0);
        assert_eq!(totals.effective_margin_percent, 25.0);
    }

    #[test]
    fn test_vat_invariants() {
        let lines = vec![
            labor("grondwerk", 388.0),
            LineItem::material("grondwerk", "Afvoer grond (stort)", "m³", 40.0, 0.0, 18.50),
        ];
        let totals = aggregate(&lines, 25.0, 21.0, &no_overrides());

        assert_eq!(totals.ex_vat, round_money(totals.subtotal + totals.margin));
        assert_eq!(totals.incl_vat, round_money(totals.ex_vat + totals.vat));
        assert!((totals.incl_vat - totals.ex_vat * 1.21).abs() < 0.01);
    }

    #[test]
    fn test_empty_lines_are_all_zero() {
        let totals = aggregate(&[], 25.0, 21.0, &no_overrides());
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.margin, 0.0);
        assert_eq!(totals.effective_margin_percent, 0.0);
        assert_eq!(totals.incl_vat, 0.0);
    }

    #[test]
    fn test_aggregate_with_settings_uses_defaults() {
        let lines = vec![labor("grondwerk", 100.0)];
        let totals = aggregate_with_settings(&lines, &Settings::default(), &no_overrides());
        // 25% margin, 21% VAT from the default settings
        assert_eq!(totals.margin, 25.0);
        assert_eq!(totals.vat, 26.25);
        assert_eq!(totals.incl_vat, 151.25);
    }
}
