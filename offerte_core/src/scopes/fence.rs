//! # Fencing ("schutting")
//!
//! Screens and posts are counted from the run length: panels at the
//! standard screen width, posts = panels + 1.

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{product_material, scope_ids, standard_labor, ScopeData};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::Fence { length_m } = data else {
        return Vec::new();
    };
    let length = *length_m;
    if length <= 0.0 {
        return Vec::new();
    }

    let access = ctx.accessibility_factor();
    let scope = scope_ids::SCHUTTING;
    let panels = (length / ctx.price_book.fencing.panel_width_m).ceil();
    let posts = panels + 1.0;
    let mut lines = Vec::new();

    if let Some(line) = standard_labor(ctx, scope, "schutting plaatsen", length, access) {
        lines.push(line);
    }
    if let Some(line) = product_material(ctx, scope, "schuttingscherm", panels) {
        lines.push(line);
    }
    if let Some(line) = product_material(ctx, scope, "schuttingpaal", posts) {
        lines.push(line);
    }

    lines
}
