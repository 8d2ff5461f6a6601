//! # Lawn Maintenance ("gazon-onderhoud")
//!
//! Annual mowing priced from the per-mow hours times the yearly frequency.
//! Past the area threshold a ride-on mower rental is mandatory.

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{scope_ids, standard_labor, ScopeData};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::LawnMaintenance {
        area_m2,
        mows_per_year,
    } = data
    else {
        return Vec::new();
    };
    let area = *area_m2;
    if area <= 0.0 || *mows_per_year == 0 {
        return Vec::new();
    }

    let machines = &ctx.price_book.machines;
    let annual = *mows_per_year as f64;
    let factor = ctx.accessibility_factor() * ctx.backlog_factor() * annual;
    let mut lines = Vec::new();

    if let Some(line) = standard_labor(ctx, scope_ids::GAZON_ONDERHOUD, "maaien", area, factor) {
        lines.push(line);
    }

    if area > machines.mower_area_threshold_m2 {
        let days = (area / machines.mower_area_per_day_m2).ceil() * annual;
        lines.push(LineItem::machine(
            scope_ids::GAZON_ONDERHOUD,
            "Zitmaaier huur",
            days,
            machines.mower_day_rate,
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::demo_context;
    use crate::lines::LineKind;
    use crate::scopes::BacklogSeverity;

    #[test]
    fn test_annual_mowing_hours() {
        let ctx = demo_context();
        let data = ScopeData::LawnMaintenance {
            area_m2: 500.0,
            mows_per_year: 26,
        };
        let lines = calculate(&data, &ctx);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 130.0); // 500 × 0.01 × 26
    }

    #[test]
    fn test_backlog_scales_hours() {
        let ctx = demo_context()
            .with_site_conditions(Default::default(), Some(BacklogSeverity::Moderate));
        let data = ScopeData::LawnMaintenance {
            area_m2: 500.0,
            mows_per_year: 1,
        };
        let lines = calculate(&data, &ctx);
        assert_eq!(lines[0].quantity, 6.25); // 5.0 × 1.25
    }

    #[test]
    fn test_large_lawn_requires_ride_on_mower() {
        let ctx = demo_context();
        let data = ScopeData::LawnMaintenance {
            area_m2: 4500.0,
            mows_per_year: 2,
        };
        let lines = calculate(&data, &ctx);
        let mower = lines.iter().find(|l| l.kind == LineKind::Machine).unwrap();
        // ceil(4500 / 3000) × 2 = 4 days
        assert_eq!(mower.quantity, 4.0);
        assert_eq!(mower.description, "Zitmaaier huur");
    }

    #[test]
    fn test_zero_frequency_yields_nothing() {
        let ctx = demo_context();
        let data = ScopeData::LawnMaintenance {
            area_m2: 500.0,
            mows_per_year: 0,
        };
        assert!(calculate(&data, &ctx).is_empty());
    }
}
