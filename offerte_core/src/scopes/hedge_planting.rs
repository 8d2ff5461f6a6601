//! # Hedge Planting ("haag-aanplant")

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{product_material, scope_ids, standard_labor, ScopeData};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::HedgePlanting {
        length_m,
        plants_per_m,
    } = data
    else {
        return Vec::new();
    };
    let length = *length_m;
    if length <= 0.0 {
        return Vec::new();
    }

    let access = ctx.accessibility_factor();
    let scope = scope_ids::HAAG_AANPLANT;
    let pieces = length * plants_per_m;
    let mut lines = Vec::new();

    if let Some(line) = standard_labor(ctx, scope, "haag planten", pieces, access) {
        lines.push(line);
    }
    if let Some(line) = product_material(ctx, scope, "haagplant", pieces) {
        lines.push(line);
    }
    let soil_m3 = length * ctx.price_book.hedge_planting.soil_m3_per_m;
    if let Some(line) = product_material(ctx, scope, "plantgrond", soil_m3) {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::demo_context;

    #[test]
    fn test_plants_and_soil_from_length() {
        let ctx = demo_context();
        let data = ScopeData::HedgePlanting {
            length_m: 15.0,
            plants_per_m: 4.0,
        };
        let lines = calculate(&data, &ctx);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].quantity, 12.0); // 60 plants × 0.20 h
        assert_eq!(lines[1].description, "Haagplanten liguster");
        assert_eq!(lines[1].quantity, 60.0);
        assert_eq!(lines[2].description, "Plantgrond");
        assert_eq!(lines[2].quantity, 0.3); // 15 × 0.02 m³
    }

    #[test]
    fn test_zero_length_yields_nothing() {
        let ctx = demo_context();
        let data = ScopeData::HedgePlanting {
            length_m: 0.0,
            plants_per_m: 4.0,
        };
        assert!(calculate(&data, &ctx).is_empty());
    }
}
