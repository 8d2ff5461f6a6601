//! # Planting Beds ("beplanting")

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{product_material, scope_ids, standard_labor, ScopeData};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::Planting {
        area_m2,
        plants_per_m2,
        soil_improvement,
    } = data
    else {
        return Vec::new();
    };
    let area = *area_m2;
    if area <= 0.0 {
        return Vec::new();
    }

    let access = ctx.accessibility_factor();
    let scope = scope_ids::BEPLANTING;
    let pieces = area * plants_per_m2;
    let mut lines = Vec::new();

    if let Some(line) = standard_labor(ctx, scope, "beplanting aanbrengen", pieces, access) {
        lines.push(line);
    }
    if let Some(line) = product_material(ctx, scope, "vaste planten", pieces) {
        lines.push(line);
    }

    if *soil_improvement {
        if let Some(line) = standard_labor(ctx, scope, "grondverbetering", area, access) {
            lines.push(line);
        }
        let improver_m3 = area * ctx.price_book.planting.soil_improver_m3_per_m2;
        if let Some(line) = product_material(ctx, scope, "bodemverbeteraar", improver_m3) {
            lines.push(line);
        }
    }

    lines
}
