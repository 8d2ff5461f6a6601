//! # Pond Construction ("vijver")

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{product_material, scope_ids, standard_labor, ScopeData};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::Pond {
        area_m2,
        depth_m,
        haul_away,
    } = data
    else {
        return Vec::new();
    };
    let area = *area_m2;
    if area <= 0.0 {
        return Vec::new();
    }

    let access = ctx.accessibility_factor();
    let scope = scope_ids::VIJVER;
    let volume_m3 = area * depth_m;
    let liner_m2 = area * ctx.price_book.pond.liner_overlap_factor;
    let mut lines = Vec::new();

    if let Some(line) = standard_labor(ctx, scope, "vijver uitgraven", volume_m3, access) {
        lines.push(line);
    }
    if let Some(line) = standard_labor(ctx, scope, "vijverfolie", liner_m2, access) {
        lines.push(line);
    }
    if let Some(line) = product_material(ctx, scope, "vijverfolie", liner_m2) {
        lines.push(line);
    }
    if *haul_away {
        if let Some(line) = product_material(ctx, scope, "afvoer grond", volume_m3) {
            lines.push(line);
        }
    }

    lines
}
