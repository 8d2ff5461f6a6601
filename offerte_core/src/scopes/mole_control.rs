//! # Mole Control ("mollenbestrijding")
//!
//! Three fixed service bundles (visit count × hours per visit, a flat
//! materials kit, a number of interim checks) plus add-ons that are
//! computed from their own inputs, independent of the chosen tier.

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{product_material, scope_ids, standard_labor, ScopeData};

pub fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::MoleControl {
        package,
        lawn_repair_m2,
        preventive_mesh_m2,
        return_visit,
    } = data
    else {
        return Vec::new();
    };

    let rates = &ctx.price_book.mole_control;
    let bundle = rates.package(*package);
    if bundle.visits == 0 {
        return Vec::new();
    }

    let access = ctx.accessibility_factor();
    let scope = scope_ids::MOLLENBESTRIJDING;
    let mut lines = Vec::new();

    lines.push(LineItem::labor(
        scope,
        &format!(
            "Mollenbestrijding {} ({} bezoeken)",
            package.display_name(),
            bundle.visits
        ),
        bundle.visits as f64 * bundle.hours_per_visit * access,
        ctx.settings.hourly_rate,
    ));

    lines.push(LineItem::material(
        scope,
        &format!("Bestrijdingsset {}", package.display_name()),
        "stuk",
        1.0,
        0.0,
        bundle.kit_price,
    ));

    if bundle.interim_checks > 0 {
        lines.push(LineItem::labor(
            scope,
            "Tussentijdse controle",
            bundle.interim_checks as f64 * rates.interim_check_hours * access,
            ctx.settings.hourly_rate,
        ));
    }

    // add-ons, independent of the tier
    if *lawn_repair_m2 > 0.0 {
        if let Some(line) = standard_labor(ctx, scope, "gazonherstel", *lawn_repair_m2, access) {
            lines.push(line);
        }
        let seed_kg = lawn_repair_m2 * ctx.price_book.lawn.seed_kg_per_m2;
        if let Some(line) = product_material(ctx, scope, "graszaad", seed_kg) {
            lines.push(line);
        }
    }

    if *preventive_mesh_m2 > 0.0 {
        if let Some(line) = standard_labor(ctx, scope, "mollengaas", *preventive_mesh_m2, access) {
            lines.push(line);
        }
        if let Some(line) = product_material(ctx, scope, "mollengaas", *preventive_mesh_m2) {
            lines.push(line);
        }
    }

    if *return_visit {
        lines.push(LineItem::labor(
            scope,
            "Nacontrole",
            rates.return_visit_hours * access,
            ctx.settings.hourly_rate,
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::demo_context;
    use crate::lines::LineKind;
    use crate::scopes::MolePackageTier;

    fn mole(package: MolePackageTier) -> ScopeData {
        ScopeData::MoleControl {
            package,
            lawn_repair_m2: 0.0,
            preventive_mesh_m2: 0.0,
            return_visit: false,
        }
    }

    #[test]
    fn test_basic_bundle() {
        let ctx = demo_context();
        let lines = calculate(&mole(MolePackageTier::Basic), &ctx);
        assert_eq!(lines.len(), 3);

        assert_eq!(lines[0].description, "Mollenbestrijding Basis (3 bezoeken)");
        assert_eq!(lines[0].quantity, 3.0);

        assert_eq!(lines[1].description, "Bestrijdingsset Basis");
        assert_eq!(lines[1].total, 45.0);

        assert_eq!(lines[2].description, "Tussentijdse controle");
        assert_eq!(lines[2].quantity, 0.5);
    }

    #[test]
    fn test_premium_plus_bundle() {
        let ctx = demo_context();
        let lines = calculate(&mole(MolePackageTier::PremiumPlus), &ctx);
        assert_eq!(lines[0].quantity, 10.0); // 8 × 1.25
        assert_eq!(lines[1].total, 120.0);
        assert_eq!(lines[2].quantity, 2.0); // 4 × 0.5
    }

    #[test]
    fn test_add_ons_are_tier_independent() {
        let ctx = demo_context();
        let data = ScopeData::MoleControl {
            package: MolePackageTier::Basic,
            lawn_repair_m2: 50.0,
            preventive_mesh_m2: 20.0,
            return_visit: true,
        };
        let lines = calculate(&data, &ctx);

        let repair = lines
            .iter()
            .find(|l| l.description == "Gazonherstel na mollen")
            .unwrap();
        assert_eq!(repair.quantity, 1.0); // 50 × 0.02

        let seed = lines
            .iter()
            .find(|l| l.description.starts_with("Graszaad"))
            .unwrap();
        assert_eq!(seed.quantity, 1.75); // 50 × 0.035 kg

        let mesh_material = lines
            .iter()
            .find(|l| l.description == "Mollengaas" && l.kind == LineKind::Material)
            .unwrap();
        assert_eq!(mesh_material.quantity, 22.0); // 20 m² + 10% wastage

        assert!(lines.iter().any(|l| l.description == "Nacontrole"));
    }
}
