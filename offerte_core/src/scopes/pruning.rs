//! # Tree & Shrub Pruning ("snoeien")
//!
//! Priced per piece by size class. Work near a street, a building or
//! buried cables carries the additive safety surcharge; large trees bring
//! a mandatory lift rental.

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{product_material, safety_surcharge, scope_ids, standard_labor, ScopeData, SizeClass};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::Pruning {
        count,
        size,
        near_road,
        near_building,
        near_cables,
        haul_away,
    } = data
    else {
        return Vec::new();
    };
    if *count == 0 {
        return Vec::new();
    }
    let pieces = *count as f64;

    let factor = ctx.accessibility_factor() * ctx.backlog_factor();
    let surcharge = safety_surcharge(&ctx.price_book, *near_road, *near_building, *near_cables);
    let mut lines = Vec::new();

    if let Some(line) = standard_labor(
        ctx,
        scope_ids::SNOEIEN,
        size.activity_term(),
        pieces,
        factor * surcharge,
    ) {
        lines.push(line);
    }

    if *size == SizeClass::Large {
        let days = (pieces / ctx.price_book.machines.lift_trees_per_day).ceil();
        lines.push(LineItem::machine(
            scope_ids::SNOEIEN,
            "Hoogwerker huur",
            days,
            ctx.price_book.machines.lift_day_rate,
        ));
    }

    if *haul_away {
        let waste_m3 = pieces * ctx.price_book.green_waste.pruning_waste_m3_per_piece;
        if let Some(line) = product_material(ctx, scope_ids::SNOEIEN, "afvoer groenafval", waste_m3)
        {
            lines.push(line);
        }
    }

    lines
}
