//! # Paving ("bestrating")
//!
//! The laying-labor activity depends on the paving material. Every paving
//! job gets a sub-base labor line and a bedding-sand material line; edging
//! is priced over an estimated perimeter of `4 × √area`. A requested
//! foundation adds the layered build-up from the price book, once for the
//! whole area or per declared sub-zone.

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{
    product_material, scope_ids, standard_labor, FoundationProfileKind, ScopeData,
};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::Paving {
        area_m2,
        material,
        joint_cutting,
        edging,
        foundation,
    } = data
    else {
        return Vec::new();
    };
    let area = *area_m2;
    if area <= 0.0 {
        return Vec::new();
    }

    let access = ctx.accessibility_factor();
    let cutting = ctx.resolve_factor("knipwerk", joint_cutting.key());
    let mut lines = Vec::new();

    if let Some(line) = standard_labor(
        ctx,
        scope_ids::BESTRATING,
        material.activity_term(),
        area,
        access * cutting,
    ) {
        lines.push(line);
    }

    // sub-base: always present
    if let Some(line) = standard_labor(ctx, scope_ids::BESTRATING, "zandbed", area, access) {
        lines.push(line);
    }
    let sand_m3 = area * ctx.price_book.paving.sand_m3_per_m2;
    if let Some(line) = product_material(ctx, scope_ids::BESTRATING, "straatzand", sand_m3) {
        lines.push(line);
    }

    if *edging {
        let perimeter_m = 4.0 * area.sqrt();
        if let Some(line) =
            standard_labor(ctx, scope_ids::BESTRATING, "opsluitband", perimeter_m, access)
        {
            lines.push(line);
        }
        if let Some(line) = product_material(ctx, scope_ids::BESTRATING, "opsluitband", perimeter_m)
        {
            lines.push(line);
        }
    }

    if let Some(plan) = foundation {
        if plan.zones.is_empty() {
            push_foundation_layers(ctx, area, plan.profile, None, &mut lines);
        } else {
            for zone in &plan.zones {
                push_foundation_layers(ctx, zone.area_m2, zone.profile, Some(&zone.name), &mut lines);
            }
        }
    }

    lines
}

/// Material lines for one foundation build-up over a zone area.
fn push_foundation_layers(
    ctx: &CalculationContext,
    area_m2: f64,
    kind: FoundationProfileKind,
    zone_name: Option<&str>,
    lines: &mut Vec<LineItem>,
) {
    if area_m2 <= 0.0 {
        return;
    }
    for layer in &ctx.price_book.foundations.profile(kind).layers {
        let volume_m3 = area_m2 * layer.thickness_m;
        let description = match zone_name {
            Some(name) => format!("{} ({})", layer.description, name),
            None => layer.description.clone(),
        };
        lines.push(LineItem::material(
            scope_ids::BESTRATING,
            &description,
            "m³",
            volume_m3,
            0.0,
            layer.price_per_m3,
        ));
    }
}
