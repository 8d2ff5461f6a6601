//! # Leaf Clearing ("bladruimen")

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{product_material, scope_ids, standard_labor, ScopeData};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::LeafClearing {
        area_m2,
        rounds,
        haul_away,
    } = data
    else {
        return Vec::new();
    };
    let area = *area_m2;
    if area <= 0.0 || *rounds == 0 {
        return Vec::new();
    }

    let seasonal = *rounds as f64;
    let factor = ctx.accessibility_factor() * ctx.backlog_factor() * seasonal;
    let mut lines = Vec::new();

    if let Some(line) = standard_labor(ctx, scope_ids::BLADRUIMEN, "bladruimen", area, factor) {
        lines.push(line);
    }

    if *haul_away {
        let leaf_m3 = area * ctx.price_book.green_waste.leaf_m3_per_m2_per_round * seasonal;
        if let Some(line) =
            product_material(ctx, scope_ids::BLADRUIMEN, "afvoer groenafval", leaf_m3)
        {
            lines.push(line);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::demo_context;

    #[test]
    fn test_rounds_multiply_hours_and_waste() {
        let ctx = demo_context();
        let data = ScopeData::LeafClearing {
            area_m2: 250.0,
            rounds: 3,
            haul_away: true,
        };
        let lines = calculate(&data, &ctx);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, 6.0); // 250 × 0.008 × 3
        assert_eq!(lines[1].quantity, 1.5); // 250 × 0.002 × 3 m³
    }

    #[test]
    fn test_zero_rounds_yields_nothing() {
        let ctx = demo_context();
        let data = ScopeData::LeafClearing {
            area_m2: 250.0,
            rounds: 0,
            haul_away: false,
        };
        assert!(calculate(&data, &ctx).is_empty());
    }
}
