//! # Irrigation ("beregening")

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{product_material, scope_ids, standard_labor, ScopeData};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::Irrigation {
        pipe_length_m,
        sprinklers,
    } = data
    else {
        return Vec::new();
    };
    let pipe = *pipe_length_m;
    if pipe <= 0.0 {
        return Vec::new();
    }

    let access = ctx.accessibility_factor();
    let scope = scope_ids::BEREGENING;
    let mut lines = Vec::new();

    if let Some(line) = standard_labor(ctx, scope, "leidingwerk", pipe, access) {
        lines.push(line);
    }
    if let Some(line) = product_material(ctx, scope, "beregeningsbuis", pipe) {
        lines.push(line);
    }

    if *sprinklers > 0 {
        let pieces = *sprinklers as f64;
        if let Some(line) = standard_labor(ctx, scope, "sproeier monteren", pieces, access) {
            lines.push(line);
        }
        if let Some(line) = product_material(ctx, scope, "sproeier", pieces) {
            lines.push(line);
        }
    }

    lines
}
