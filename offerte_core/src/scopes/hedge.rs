//! # Hedge Maintenance ("haag-onderhoud")
//!
//! Two variants share this module. The basic variant prices trimming per
//! meter of hedge. The extended variant works on the trimmed volume
//! (length × height × depth) and layers on every condition the wizard can
//! capture: pruning mode, species, substrate, proximity hazards and an
//! annual frequency.
//!
//! Factor composition order: all multiplicative factors first, then the
//! additive safety-surcharge block, then the annual frequency; the result
//! is quarter-rounded once.

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::scopes::{product_material, safety_surcharge, scope_ids, standard_labor, ScopeData};

/// Simple per-meter variant.
pub fn calculate_basic(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::HedgeBasic { length_m, height_m } = data else {
        return Vec::new();
    };
    let length = *length_m;
    if length <= 0.0 {
        return Vec::new();
    }

    let rates = &ctx.price_book.hedge;
    let mut factor = ctx.accessibility_factor() * ctx.backlog_factor();
    if *height_m > rates.height_factor_threshold_m {
        factor *= rates.height_factor;
    }

    standard_labor(ctx, scope_ids::HAAG_ONDERHOUD, "haag knippen", length, factor)
        .into_iter()
        .collect()
}

/// Extended volume-driven variant.
pub fn calculate_extended(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem> {
    let ScopeData::HedgeExtended {
        length_m,
        height_m,
        depth_m,
        pruning,
        species,
        substrate,
        frequency,
        near_road,
        near_building,
        near_cables,
        haul_away,
    } = data
    else {
        return Vec::new();
    };
    let volume_m3 = length_m * height_m * depth_m;
    if volume_m3 <= 0.0 || *frequency == 0 {
        return Vec::new();
    }

    let rates = &ctx.price_book.hedge;
    let annual = *frequency as f64;
    let mut lines = Vec::new();

    let mut factor = ctx.accessibility_factor()
        * ctx.backlog_factor()
        * ctx.resolve_factor("snoeiwijze", pruning.key())
        * species.factor()
        * substrate.factor();
    if *height_m > rates.height_factor_threshold_m {
        factor *= rates.height_factor;
    }
    let surcharge = safety_surcharge(&ctx.price_book, *near_road, *near_building, *near_cables);

    if let Some(line) = standard_labor(
        ctx,
        scope_ids::HAAG_ONDERHOUD_UITGEBREID,
        "haag knippen",
        volume_m3,
        factor * surcharge * annual,
    ) {
        lines.push(line);
    }

    // past the lift threshold the rental is mandatory, independent of the
    // labor and material lines
    if *height_m > rates.lift_threshold_m {
        let days = (length_m / rates.lift_length_per_day_m).ceil() * annual;
        lines.push(LineItem::machine(
            scope_ids::HAAG_ONDERHOUD_UITGEBREID,
            "Hoogwerker huur",
            days,
            ctx.price_book.machines.lift_day_rate,
        ));
    }

    if *haul_away {
        let clippings_m3 =
            volume_m3 * ctx.price_book.green_waste.hedge_clippings_m3_per_m3 * annual;
        if let Some(line) = product_material(
            ctx,
            scope_ids::HAAG_ONDERHOUD_UITGEBREID,
            "afvoer groenafval",
            clippings_m3,
        ) {
            lines.push(line);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::demo_context;
    use crate::lines::LineKind;
    use crate::scopes::{HedgeSpecies, PruningMode, Substrate};

    fn extended(length_m: f64, height_m: f64, depth_m: f64) -> ScopeData {
        ScopeData::HedgeExtended {
            length_m,
            height_m,
            depth_m,
            pruning: PruningMode::Both,
            species: HedgeSpecies::Other,
            substrate: Substrate::Other,
            frequency: 1,
            near_road: false,
            near_building: false,
            near_cables: false,
            haul_away: false,
        }
    }

    #[test]
    fn test_basic_hedge_per_meter() {
        let ctx = demo_context();
        let data = ScopeData::HedgeBasic {
            length_m: 20.0,
            height_m: 1.8,
        };
        let lines = calculate_basic(&data, &ctx);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].description, "Haag knippen");
        assert_eq!(lines[0].quantity, 5.0); // 20 × 0.25
    }

    #[test]
    fn test_basic_hedge_height_factor() {
        let ctx = demo_context();
        let data = ScopeData::HedgeBasic {
            length_m: 20.0,
            height_m: 2.5,
        };
        let lines = calculate_basic(&data, &ctx);
        // 20 × 0.25 × 1.3 = 6.5
        assert_eq!(lines[0].quantity, 6.5);
    }

    #[test]
    fn test_extended_volume_and_height_factor() {
        let ctx = demo_context();
        let mut data = extended(10.0, 3.0, 1.0);
        if let ScopeData::HedgeExtended { haul_away, .. } = &mut data {
            *haul_away = true;
        }
        let lines = calculate_extended(&data, &ctx);
        // volume 30 m³, height > 2 m: 30 × 0.40 × 1.3 = 15.6 → 15.5
        assert_eq!(lines[0].quantity, 15.5);
        assert_eq!(lines[0].kind, LineKind::Labor);

        // clippings: 30 × 0.1 = 3 m³
        let waste = lines
            .iter()
            .find(|l| l.description == "Afvoer groenafval")
            .unwrap();
        assert_eq!(waste.quantity, 3.0);

        // no lift below 4 m
        assert!(lines.iter().all(|l| l.kind != LineKind::Machine));
    }

    #[test]
    fn test_extended_species_and_substrate_factors() {
        let ctx = demo_context();
        let mut data = extended(10.0, 1.5, 1.0);
        if let ScopeData::HedgeExtended {
            species, substrate, ..
        } = &mut data
        {
            *species = HedgeSpecies::Taxus;
            *substrate = Substrate::Paving;
        }
        let lines = calculate_extended(&data, &ctx);
        // 15 m³ × 0.40 × 1.4 × 1.1 = 9.24 → 9.25
        assert_eq!(lines[0].quantity, 9.25);
    }

    #[test]
    fn test_extended_lift_past_height_threshold() {
        let ctx = demo_context();
        let mut data = extended(25.0, 4.5, 1.0);
        if let ScopeData::HedgeExtended { frequency, .. } = &mut data {
            *frequency = 2;
        }
        let lines = calculate_extended(&data, &ctx);
        let lift = lines
            .iter()
            .find(|l| l.description == "Hoogwerker huur")
            .unwrap();
        // ceil(25 / 10) × 2 visits = 6 days
        assert_eq!(lift.quantity, 6.0);
        assert_eq!(lift.kind, LineKind::Machine);
        assert_eq!(lift.total, 6.0 * 285.0);
    }

    #[test]
    fn test_extended_annual_frequency_multiplies_hours() {
        let ctx = demo_context();
        let mut data = extended(10.0, 1.5, 1.0);
        if let ScopeData::HedgeExtended { frequency, .. } = &mut data {
            *frequency = 3;
        }
        let lines = calculate_extended(&data, &ctx);
        // 15 × 0.40 × 3 = 18.0
        assert_eq!(lines[0].quantity, 18.0);
    }

    #[test]
    fn test_extended_safety_block_is_additive_after_factors() {
        let ctx = demo_context();
        let mut data = extended(10.0, 3.0, 1.0);
        if let ScopeData::HedgeExtended {
            near_road,
            near_cables,
            ..
        } = &mut data
        {
            *near_road = true;
            *near_cables = true;
        }
        let lines = calculate_extended(&data, &ctx);
        // 30 × 0.40 × 1.3 × (1 + 0.35) = 21.06 → 21.0
        assert_eq!(lines[0].quantity, 21.0);
    }

    #[test]
    fn test_zero_volume_yields_nothing() {
        let ctx = demo_context();
        assert!(calculate_extended(&extended(10.0, 0.0, 1.0), &ctx).is_empty());
        assert!(calculate_extended(&extended(-1.0, 2.0, 1.0), &ctx).is_empty());
    }
}
