//! # Border Maintenance ("border-onderhoud")

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{product_material, scope_ids, standard_labor, ScopeData};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::BorderMaintenance { area_m2, mulch } = data else {
        return Vec::new();
    };
    let area = *area_m2;
    if area <= 0.0 {
        return Vec::new();
    }

    let factor = ctx.accessibility_factor() * ctx.backlog_factor();
    let mut lines = Vec::new();

    if let Some(line) =
        standard_labor(ctx, scope_ids::BORDER_ONDERHOUD, "schoffelen", area, factor)
    {
        lines.push(line);
    }

    if *mulch {
        let mulch_m3 = area * ctx.price_book.borders.mulch_m3_per_m2;
        if let Some(line) =
            product_material(ctx, scope_ids::BORDER_ONDERHOUD, "boomschors", mulch_m3)
        {
            lines.push(line);
        }
    }

    lines
}
