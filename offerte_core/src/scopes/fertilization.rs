//! # Fertilization ("bemesting")
//!
//! A product category with a contractually fixed margin: every generated
//! line carries the margin override from the price book, which wins over
//! both the scope-level and the global margin in aggregation.

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{product_material, scope_ids, standard_labor, ScopeData};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::Fertilization { area_m2 } = data else {
        return Vec::new();
    };
    let area = *area_m2;
    if area <= 0.0 {
        return Vec::new();
    }

    let margin = ctx.price_book.fertilization_margin_percent;
    let access = ctx.accessibility_factor();
    let mut lines = Vec::new();

    if let Some(line) = standard_labor(ctx, scope_ids::BEMESTING, "bemesten", area, access) {
        lines.push(line.with_margin_override(margin));
    }

    let fertilizer_kg = area * ctx.price_book.lawn.fertilizer_kg_per_m2;
    if let Some(line) = product_material(ctx, scope_ids::BEMESTING, "gazonmest", fertilizer_kg) {
        lines.push(line.with_margin_override(margin));
    }

    lines
}
