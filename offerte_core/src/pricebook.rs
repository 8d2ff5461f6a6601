//! # Price Book
//!
//! Fixed numeric tables used by the scope calculators: excavation depth
//! classes, foundation layer build-ups, unit-consumption ratios, machine
//! rental rates and the fixed service bundles. These numbers change on
//! office decisions, not code changes, so they live in a serializable
//! struct with reference defaults instead of compiled-in literals. The
//! surrounding application can load a replacement book from JSON and hand
//! it to the [`CalculationContext`](crate::catalog::CalculationContext).
//!
//! ## Example
//!
//! ```rust
//! use offerte_core::pricebook::PriceBook;
//!
//! let book = PriceBook::default();
//! assert_eq!(book.foundations.driveway.layers.len(), 3);
//!
//! // Load a customer-specific book without a rebuild
//! let json = serde_json::to_string(&book).unwrap();
//! let reloaded = PriceBook::from_json(&json).unwrap();
//! assert_eq!(reloaded.machines.lift_day_rate, book.machines.lift_day_rate);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};
use crate::scopes::{DepthClass, FoundationProfileKind, MolePackageTier};

/// Shared built-in price book with the reference numbers, for callers that
/// have no customer-specific book loaded.
static BUILTIN: Lazy<PriceBook> = Lazy::new(PriceBook::default);

// ============================================================================
// Excavation
// ============================================================================

/// Depth-in-meters per excavation depth class.
///
/// Only used to estimate the haul-away volume (area × depth); the dig labor
/// itself comes from the standard-hours entry named by the depth class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcavationRates {
    pub depth_light_m: f64,
    pub depth_standard_m: f64,
    pub depth_heavy_m: f64,
}

impl ExcavationRates {
    /// Estimated excavation depth for a depth class
    pub fn depth_m(&self, class: DepthClass) -> f64 {
        match class {
            DepthClass::Light => self.depth_light_m,
            DepthClass::Standard => self.depth_standard_m,
            DepthClass::Heavy => self.depth_heavy_m,
        }
    }
}

impl Default for ExcavationRates {
    fn default() -> Self {
        Self {
            depth_light_m: 0.2,
            depth_standard_m: 0.4,
            depth_heavy_m: 0.6,
        }
    }
}

// ============================================================================
// Paving & Foundations
// ============================================================================

/// Consumption ratios for paving work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PavingRates {
    /// Bedding sand per paved square meter (m³/m²)
    pub sand_m3_per_m2: f64,
}

impl Default for PavingRates {
    fn default() -> Self {
        Self { sand_m3_per_m2: 0.05 }
    }
}

/// One layer of a foundation build-up, priced per cubic meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationLayer {
    /// Material description as it appears on the quote line
    pub description: String,
    /// Layer thickness in meters
    pub thickness_m: f64,
    /// Unit price in €/m³
    pub price_per_m3: f64,
}

impl FoundationLayer {
    fn new(description: &str, thickness_m: f64, price_per_m3: f64) -> Self {
        Self {
            description: description.to_string(),
            thickness_m,
            price_per_m3,
        }
    }
}

/// A named foundation build-up: the layers applied over the full zone area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationProfile {
    pub layers: Vec<FoundationLayer>,
}

/// Foundation build-ups per application profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationRates {
    /// Garden path: light foot traffic
    pub path: FoundationProfile,
    /// Driveway: car loads, cement-stabilized top layer
    pub driveway: FoundationProfile,
    /// Terrain / yard: heaviest build-up
    pub terrain: FoundationProfile,
}

impl FoundationRates {
    /// Get the build-up for a profile kind
    pub fn profile(&self, kind: FoundationProfileKind) -> &FoundationProfile {
        match kind {
            FoundationProfileKind::Path => &self.path,
            FoundationProfileKind::Driveway => &self.driveway,
            FoundationProfileKind::Terrain => &self.terrain,
        }
    }
}

impl Default for FoundationRates {
    fn default() -> Self {
        Self {
            path: FoundationProfile {
                layers: vec![
                    FoundationLayer::new("Menggranulaat 0/31.5", 0.15, 28.50),
                    FoundationLayer::new("Straatzand fundering", 0.05, 32.00),
                ],
            },
            driveway: FoundationProfile {
                layers: vec![
                    FoundationLayer::new("Menggranulaat 0/31.5", 0.25, 28.50),
                    FoundationLayer::new("Brekerzand", 0.05, 38.00),
                    FoundationLayer::new("Cementgebonden stabilisatie", 0.10, 65.00),
                ],
            },
            terrain: FoundationProfile {
                layers: vec![
                    FoundationLayer::new("Menggranulaat 0/31.5", 0.30, 28.50),
                    FoundationLayer::new("Brekerzand", 0.08, 38.00),
                    FoundationLayer::new("Cementgebonden stabilisatie", 0.12, 65.00),
                ],
            },
        }
    }
}

// ============================================================================
// Green work ratios
// ============================================================================

/// Consumption ratios for lawn work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LawnRates {
    /// Grass seed per square meter (kg/m²)
    pub seed_kg_per_m2: f64,
    /// Lawn fertilizer per square meter (kg/m²)
    pub fertilizer_kg_per_m2: f64,
}

impl Default for LawnRates {
    fn default() -> Self {
        Self {
            seed_kg_per_m2: 0.035,
            fertilizer_kg_per_m2: 0.05,
        }
    }
}

/// Consumption ratios for planting beds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantingRates {
    /// Soil improver worked into the bed (m³/m²)
    pub soil_improver_m3_per_m2: f64,
}

impl Default for PlantingRates {
    fn default() -> Self {
        Self { soil_improver_m3_per_m2: 0.01 }
    }
}

/// Consumption ratios for hedge planting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgePlantingRates {
    /// Planting soil per meter of new hedge (m³/m)
    pub soil_m3_per_m: f64,
}

impl Default for HedgePlantingRates {
    fn default() -> Self {
        Self { soil_m3_per_m: 0.02 }
    }
}

/// Panel geometry for fencing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FencingRates {
    /// Standard screen width in meters; posts = panels + 1
    pub panel_width_m: f64,
}

impl Default for FencingRates {
    fn default() -> Self {
        Self { panel_width_m: 1.8 }
    }
}

/// Pond construction ratios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PondRates {
    /// Liner area per water surface area, overlap and fold allowance included
    pub liner_overlap_factor: f64,
}

impl Default for PondRates {
    fn default() -> Self {
        Self { liner_overlap_factor: 1.4 }
    }
}

/// Border construction and maintenance ratios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderRates {
    /// Topsoil worked into a new border (m³/m²)
    pub topsoil_m3_per_m2: f64,
    /// Mulch cover on a maintained border (m³/m²)
    pub mulch_m3_per_m2: f64,
}

impl Default for BorderRates {
    fn default() -> Self {
        Self {
            topsoil_m3_per_m2: 0.1,
            mulch_m3_per_m2: 0.05,
        }
    }
}

// ============================================================================
// Hedge maintenance
// ============================================================================

/// Height thresholds and factors for hedge maintenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgeRates {
    /// Above this height the work slows down
    pub height_factor_threshold_m: f64,
    /// Multiplier applied above the height threshold
    pub height_factor: f64,
    /// Above this height a lift is mandatory
    pub lift_threshold_m: f64,
    /// Hedge length a lift crew covers per rental day (m)
    pub lift_length_per_day_m: f64,
}

impl Default for HedgeRates {
    fn default() -> Self {
        Self {
            height_factor_threshold_m: 2.0,
            height_factor: 1.3,
            lift_threshold_m: 4.0,
            lift_length_per_day_m: 10.0,
        }
    }
}

/// Safety surcharges for work near hazards, in additive percentage points.
///
/// These compose additively (points are summed, then applied once), unlike
/// the multiplicative correction factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyRates {
    pub near_road_percent: f64,
    pub near_building_percent: f64,
    pub near_cables_percent: f64,
}

impl Default for SafetyRates {
    fn default() -> Self {
        Self {
            near_road_percent: 20.0,
            near_building_percent: 10.0,
            near_cables_percent: 15.0,
        }
    }
}

// ============================================================================
// Machines & green waste
// ============================================================================

/// Rental day-rates and daily coverage for machines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineRates {
    /// Aerial lift day rate (€)
    pub lift_day_rate: f64,
    /// Large trees pruned per lift day
    pub lift_trees_per_day: f64,
    /// Ride-on mower day rate (€)
    pub mower_day_rate: f64,
    /// Lawn area above which a ride-on mower is required (m²)
    pub mower_area_threshold_m2: f64,
    /// Lawn area mowed per mower day (m²)
    pub mower_area_per_day_m2: f64,
    /// Weed burner day rate (€)
    pub burner_day_rate: f64,
    /// Area treated per burner day (m²)
    pub burner_area_per_day_m2: f64,
}

impl Default for MachineRates {
    fn default() -> Self {
        Self {
            lift_day_rate: 285.0,
            lift_trees_per_day: 4.0,
            mower_day_rate: 95.0,
            mower_area_threshold_m2: 1000.0,
            mower_area_per_day_m2: 3000.0,
            burner_day_rate: 65.0,
            burner_area_per_day_m2: 400.0,
        }
    }
}

/// Green waste volume ratios for disposal lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreenWasteRates {
    /// Clippings per cubic meter of trimmed hedge volume, per visit
    pub hedge_clippings_m3_per_m3: f64,
    /// Pruning waste per tree or shrub (m³/piece)
    pub pruning_waste_m3_per_piece: f64,
    /// Leaf volume per square meter per clearing round (m³/m²)
    pub leaf_m3_per_m2_per_round: f64,
}

impl Default for GreenWasteRates {
    fn default() -> Self {
        Self {
            hedge_clippings_m3_per_m3: 0.1,
            pruning_waste_m3_per_piece: 0.4,
            leaf_m3_per_m2_per_round: 0.002,
        }
    }
}

// ============================================================================
// Mole control bundles
// ============================================================================

/// One fixed mole-control service bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MolePackage {
    /// Number of treatment visits in the bundle
    pub visits: u32,
    /// Labor hours per visit
    pub hours_per_visit: f64,
    /// Flat price of the materials kit (traps, markers)
    pub kit_price: f64,
    /// Number of interim checks between visits
    pub interim_checks: u32,
}

/// The three fixed service tiers plus the shared per-activity hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleControlRates {
    pub basic: MolePackage,
    pub premium: MolePackage,
    pub premium_plus: MolePackage,
    /// Labor hours per interim check
    pub interim_check_hours: f64,
    /// Labor hours for the optional return-visit check add-on
    pub return_visit_hours: f64,
}

impl MoleControlRates {
    /// Get the bundle for a service tier
    pub fn package(&self, tier: MolePackageTier) -> &MolePackage {
        match tier {
            MolePackageTier::Basic => &self.basic,
            MolePackageTier::Premium => &self.premium,
            MolePackageTier::PremiumPlus => &self.premium_plus,
        }
    }
}

impl Default for MoleControlRates {
    fn default() -> Self {
        Self {
            basic: MolePackage {
                visits: 3,
                hours_per_visit: 1.0,
                kit_price: 45.0,
                interim_checks: 1,
            },
            premium: MolePackage {
                visits: 5,
                hours_per_visit: 1.0,
                kit_price: 75.0,
                interim_checks: 2,
            },
            premium_plus: MolePackage {
                visits: 8,
                hours_per_visit: 1.25,
                kit_price: 120.0,
                interim_checks: 4,
            },
            interim_check_hours: 0.5,
            return_visit_hours: 1.0,
        }
    }
}

// ============================================================================
// Cross-cutting charges
// ============================================================================

/// Fixed charges appended outside the scope-dispatch path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverheadRates {
    /// Quote preparation labor, in hours at the global hourly rate
    pub preparation_hours: f64,
    /// Flat price of the optional warranty package
    pub warranty_price: f64,
}

impl Default for OverheadRates {
    fn default() -> Self {
        Self {
            preparation_hours: 1.5,
            warranty_price: 195.0,
        }
    }
}

// ============================================================================
// The book
// ============================================================================

/// All fixed numeric tables in one injectable bundle.
///
/// `PriceBook::default()` carries the reference numbers; a replacement can
/// be loaded from JSON via [`PriceBook::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceBook {
    pub excavation: ExcavationRates,
    pub paving: PavingRates,
    pub foundations: FoundationRates,
    pub lawn: LawnRates,
    pub planting: PlantingRates,
    pub hedge_planting: HedgePlantingRates,
    pub fencing: FencingRates,
    pub pond: PondRates,
    pub borders: BorderRates,
    pub hedge: HedgeRates,
    pub safety: SafetyRates,
    pub machines: MachineRates,
    pub green_waste: GreenWasteRates,
    pub mole_control: MoleControlRates,
    /// Contractually fixed margin for fertilization lines (percent)
    pub fertilization_margin_percent: f64,
    pub overhead: OverheadRates,
}

impl PriceBook {
    /// Shared reference to the built-in book
    pub fn builtin() -> &'static PriceBook {
        &BUILTIN
    }

    /// Load a price book from JSON
    pub fn from_json(json: &str) -> QuoteResult<PriceBook> {
        serde_json::from_str(json).map_err(QuoteError::serialization)
    }
}

impl Default for PriceBook {
    fn default() -> Self {
        Self {
            excavation: ExcavationRates::default(),
            paving: PavingRates::default(),
            foundations: FoundationRates::default(),
            lawn: LawnRates::default(),
            planting: PlantingRates::default(),
            hedge_planting: HedgePlantingRates::default(),
            fencing: FencingRates::default(),
            pond: PondRates::default(),
            borders: BorderRates::default(),
            hedge: HedgeRates::default(),
            safety: SafetyRates::default(),
            machines: MachineRates::default(),
            green_waste: GreenWasteRates::default(),
            mole_control: MoleControlRates::default(),
            fertilization_margin_percent: 70.0,
            overhead: OverheadRates::default(),
        }
    }
}
