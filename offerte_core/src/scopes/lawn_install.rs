//! # Lawn Installation ("gazon-aanleg")

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{product_material, scope_ids, standard_labor, LawnMethod, ScopeData};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::LawnInstall { area_m2, method } = data else {
        return Vec::new();
    };
    let area = *area_m2;
    if area <= 0.0 {
        return Vec::new();
    }

    let access = ctx.accessibility_factor();
    let scope = scope_ids::GAZON_AANLEG;
    let mut lines = Vec::new();

    // leveling precedes both methods
    if let Some(line) = standard_labor(ctx, scope, "egaliseren", area, access) {
        lines.push(line);
    }

    match method {
        LawnMethod::Seed => {
            if let Some(line) = standard_labor(ctx, scope, "gazon zaaien", area, access) {
                lines.push(line);
            }
            let seed_kg = area * ctx.price_book.lawn.seed_kg_per_m2;
            if let Some(line) = product_material(ctx, scope, "graszaad", seed_kg) {
                lines.push(line);
            }
        }
        LawnMethod::Sod => {
            if let Some(line) = standard_labor(ctx, scope, "graszoden", area, access) {
                lines.push(line);
            }
            if let Some(line) = product_material(ctx, scope, "graszoden", area) {
                lines.push(line);
            }
        }
    }

    lines
}
