//! # Excavation ("grondwerk")
//!
//! Dig labor comes straight from the standard-hours entry named by the
//! depth class. The estimated depth-in-meters from the price book is only
//! used for the haul-away volume (area × depth), never for the dig labor
//! itself.

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{product_material, scope_ids, standard_labor, ScopeData};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::Excavation {
        area_m2,
        depth,
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
    let mut lines = Vec::new();

    let dig_term = format!("ontgraven {}", depth.term());
    if let Some(line) = standard_labor(ctx, scope_ids::GRONDWERK, &dig_term, area, access) {
        lines.push(line);
    }

    if *haul_away {
        let volume_m3 = area * ctx.price_book.excavation.depth_m(*depth);
        if let Some(line) =
            standard_labor(ctx, scope_ids::GRONDWERK, "grond afvoeren", volume_m3, access)
        {
            lines.push(line);
        }
        if let Some(line) = product_material(ctx, scope_ids::GRONDWERK, "afvoer grond", volume_m3) {
            lines.push(line);
        }
    }

    lines
}
