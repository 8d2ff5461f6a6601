//! # Weed Control ("onkruidbestrijding")

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{scope_ids, standard_labor, ScopeData, WeedMethod};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::WeedControl { area_m2, method } = data else {
        return Vec::new();
    };
    let area = *area_m2;
    if area <= 0.0 {
        return Vec::new();
    }

    let factor = ctx.accessibility_factor() * ctx.backlog_factor();
    let mut lines = Vec::new();

    if let Some(line) = standard_labor(
        ctx,
        scope_ids::ONKRUIDBESTRIJDING,
        method.activity_term(),
        area,
        factor,
    ) {
        lines.push(line);
    }

    if *method == WeedMethod::Thermal {
        let machines = &ctx.price_book.machines;
        let days = (area / machines.burner_area_per_day_m2).ceil();
        lines.push(LineItem::machine(
            scope_ids::ONKRUIDBESTRIJDING,
            "Onkruidbrander huur",
            days,
            machines.burner_day_rate,
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::demo_context;
    use crate::lines::LineKind;

    #[test]
    fn test_manual_weeding() {
        let ctx = demo_context();
        let data = ScopeData::WeedControl {
            area_m2: 100.0,
            method: WeedMethod::Manual,
        };
        let lines = calculate(&data, &ctx);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].description, "Onkruid wieden");
        assert_eq!(lines[0].quantity, 4.0); // 100 × 0.04
    }

    #[test]
    fn test_thermal_adds_burner_rental() {
        let ctx = demo_context();
        let data = ScopeData::WeedControl {
            area_m2: 900.0,
            method: WeedMethod::Thermal,
        };
        let lines = calculate(&data, &ctx);
        assert_eq!(lines[0].description, "Onkruid branden");
        assert_eq!(lines[0].quantity, 18.0); // 900 × 0.02

        let burner = lines.iter().find(|l| l.kind == LineKind::Machine).unwrap();
        assert_eq!(burner.quantity, 3.0); // ceil(900 / 400)
    }
}
