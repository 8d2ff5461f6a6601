//! # Border Construction ("border-aanleg")

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{product_material, scope_ids, standard_labor, ScopeData};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::BorderConstruction { area_m2 } = data else {
        return Vec::new();
    };
    let area = *area_m2;
    if area <= 0.0 {
        return Vec::new();
    }

    let access = ctx.accessibility_factor();
    let scope = scope_ids::BORDER_AANLEG;
    let mut lines = Vec::new();

    if let Some(line) = standard_labor(ctx, scope, "border aanleggen", area, access) {
        lines.push(line);
    }
    let topsoil_m3 = area * ctx.price_book.borders.topsoil_m3_per_m2;
    if let Some(line) = product_material(ctx, scope, "tuinaarde", topsoil_m3) {
        lines.push(line);
    }

    lines
}
