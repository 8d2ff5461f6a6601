//! # Scope Data Model & Calculators
//!
//! A *scope* is one category of work on a quote (excavation, paving, hedge
//! maintenance, ...). Each scope has a data variant in [`ScopeData`] and a
//! pure calculator function in its own submodule:
//!
//! ```text
//! fn calculate(data: &ScopeData, ctx: &CalculationContext) -> Vec<LineItem>
//! ```
//!
//! Every calculator follows the same pattern: determine the primary
//! quantity driver, look up standard hours, compose correction factors
//! (multiplicative first, then the additive safety-surcharge block), round
//! to quarter hours and emit a labor line; derive material quantities from
//! fixed consumption ratios; add a machine-rental line past hard equipment
//! thresholds. A non-positive driver yields an empty list.
//!
//! ## JSON Example
//!
//! ```json
//! { "scope": "grondwerk", "area_m2": 100.0, "depth": "standard", "haul_away": true }
//! ```

pub mod border_construction;
pub mod border_maintenance;
pub mod excavation;
pub mod fence;
pub mod fertilization;
pub mod hedge;
pub mod hedge_planting;
pub mod irrigation;
pub mod lawn_install;
pub mod lawn_maintenance;
pub mod leaf_clearing;
pub mod mole_control;
pub mod paving;
pub mod planting;
pub mod pond;
pub mod pruning;
pub mod weed_control;

use serde::{Deserialize, Serialize};

use crate::catalog::CalculationContext;
use crate::lines::LineItem;
use crate::pricebook::PriceBook;
use crate::rounding::round_quarter_hour;

// ============================================================================
// Scope identifiers
// ============================================================================

/// Scope ids as they appear in the calculation input and reference tables.
pub mod scope_ids {
    pub const GRONDWERK: &str = "grondwerk";
    pub const BESTRATING: &str = "bestrating";
    pub const GAZON_AANLEG: &str = "gazon-aanleg";
    pub const BEPLANTING: &str = "beplanting";
    pub const HAAG_AANPLANT: &str = "haag-aanplant";
    pub const SCHUTTING: &str = "schutting";
    pub const VIJVER: &str = "vijver";
    pub const BEREGENING: &str = "beregening";
    pub const BORDER_AANLEG: &str = "border-aanleg";
    pub const GAZON_ONDERHOUD: &str = "gazon-onderhoud";
    pub const HAAG_ONDERHOUD: &str = "haag-onderhoud";
    pub const HAAG_ONDERHOUD_UITGEBREID: &str = "haag-onderhoud-uitgebreid";
    pub const SNOEIEN: &str = "snoeien";
    pub const ONKRUIDBESTRIJDING: &str = "onkruidbestrijding";
    pub const BEMESTING: &str = "bemesting";
    pub const MOLLENBESTRIJDING: &str = "mollenbestrijding";
    pub const BLADRUIMEN: &str = "bladruimen";
    pub const BORDER_ONDERHOUD: &str = "border-onderhoud";
}

// ============================================================================
// Quote type & site conditions
// ============================================================================

/// The two quote types: new-build and maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteType {
    /// New construction work
    #[serde(rename = "aanleg")]
    Aanleg,
    /// Recurring maintenance work
    #[serde(rename = "onderhoud")]
    Onderhoud,
}

impl QuoteType {
    /// All quote types for UI selection
    pub const ALL: [QuoteType; 2] = [QuoteType::Aanleg, QuoteType::Onderhoud];

    /// Wire key as used in the calculation input
    pub fn key(&self) -> &'static str {
        match self {
            QuoteType::Aanleg => "aanleg",
            QuoteType::Onderhoud => "onderhoud",
        }
    }
}

impl std::fmt::Display for QuoteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Site accessibility condition, affects every labor line.
///
/// The multiplier itself lives in the correction-factor table under type
/// `bereikbaarheid`; an unconfigured value resolves to the neutral 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Accessibility {
    /// Machine access up to the work area
    #[default]
    #[serde(rename = "goed")]
    Good,
    /// Wheelbarrow only, or a shared access route
    #[serde(rename = "beperkt")]
    Limited,
    /// Everything by hand, through the house or over a fence
    #[serde(rename = "slecht")]
    Poor,
}

impl Accessibility {
    /// All accessibility variants for UI selection
    pub const ALL: [Accessibility; 3] = [
        Accessibility::Good,
        Accessibility::Limited,
        Accessibility::Poor,
    ];

    /// Value key in the correction-factor table
    pub fn key(&self) -> &'static str {
        match self {
            Accessibility::Good => "goed",
            Accessibility::Limited => "beperkt",
            Accessibility::Poor => "slecht",
        }
    }
}

/// Severity of maintenance backlog, affects maintenance-scope labor.
///
/// Resolved against the correction-factor table under type
/// `achterstalligheid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BacklogSeverity {
    #[serde(rename = "licht")]
    Light,
    #[serde(rename = "matig")]
    Moderate,
    #[serde(rename = "ernstig")]
    Severe,
}

impl BacklogSeverity {
    /// All backlog variants for UI selection
    pub const ALL: [BacklogSeverity; 3] = [
        BacklogSeverity::Light,
        BacklogSeverity::Moderate,
        BacklogSeverity::Severe,
    ];

    /// Value key in the correction-factor table
    pub fn key(&self) -> &'static str {
        match self {
            BacklogSeverity::Light => "licht",
            BacklogSeverity::Moderate => "matig",
            BacklogSeverity::Severe => "ernstig",
        }
    }
}

// ============================================================================
// Per-scope enums
// ============================================================================

/// Excavation depth class.
///
/// Names the standard-hours entry for the dig labor; the estimated
/// depth-in-meters (price book) only feeds the haul-away volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthClass {
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "heavy")]
    Heavy,
}

impl DepthClass {
    /// Activity-name search fragment for the dig labor lookup
    pub fn term(&self) -> &'static str {
        match self {
            DepthClass::Light => "licht",
            DepthClass::Standard => "standaard",
            DepthClass::Heavy => "zwaar",
        }
    }
}

/// Paving material; selects the laying-labor activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PavingMaterial {
    #[serde(rename = "tegels")]
    Tiles,
    #[serde(rename = "klinkers")]
    Clinkers,
    #[serde(rename = "natuursteen")]
    NaturalStone,
}

impl PavingMaterial {
    /// Activity-name search fragment for the laying labor
    pub fn activity_term(&self) -> &'static str {
        match self {
            PavingMaterial::Tiles => "bestraten tegels",
            PavingMaterial::Clinkers => "bestraten klinkers",
            PavingMaterial::NaturalStone => "bestraten natuursteen",
        }
    }
}

/// Amount of cutting work in a paving job.
///
/// Resolved against the correction-factor table under type `knipwerk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum JointCutting {
    #[default]
    #[serde(rename = "geen")]
    None,
    #[serde(rename = "weinig")]
    Little,
    #[serde(rename = "veel")]
    Much,
}

impl JointCutting {
    /// Value key in the correction-factor table
    pub fn key(&self) -> &'static str {
        match self {
            JointCutting::None => "geen",
            JointCutting::Little => "weinig",
            JointCutting::Much => "veel",
        }
    }
}

/// Foundation build-up profile for paved areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoundationProfileKind {
    #[serde(rename = "pad")]
    Path,
    #[serde(rename = "oprit")]
    Driveway,
    #[serde(rename = "terrein")]
    Terrain,
}

/// A declared sub-zone of a paved area with its own foundation profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationZone {
    pub name: String,
    pub area_m2: f64,
    pub profile: FoundationProfileKind,
}

/// Foundation request on a paving scope: one profile for the whole area,
/// or per declared sub-zone when `zones` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PavingFoundation {
    pub profile: FoundationProfileKind,
    #[serde(default)]
    pub zones: Vec<FoundationZone>,
}

/// Lawn installation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LawnMethod {
    #[serde(rename = "zaaien")]
    Seed,
    #[serde(rename = "zoden")]
    Sod,
}

/// Hedge species, grouped by trimming difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HedgeSpecies {
    /// Slow, dense, precise trimming
    #[serde(rename = "taxus")]
    Taxus,
    #[serde(rename = "conifeer")]
    Conifer,
    /// Fast-growing, forgiving
    #[serde(rename = "liguster")]
    Privet,
    #[serde(rename = "laurier")]
    Laurel,
    #[serde(rename = "beuk")]
    Beech,
    #[default]
    #[serde(rename = "overig")]
    Other,
}

impl HedgeSpecies {
    /// All species variants for UI selection
    pub const ALL: [HedgeSpecies; 6] = [
        HedgeSpecies::Taxus,
        HedgeSpecies::Conifer,
        HedgeSpecies::Privet,
        HedgeSpecies::Laurel,
        HedgeSpecies::Beech,
        HedgeSpecies::Other,
    ];

    /// Trimming-speed multiplier for this species
    pub fn factor(&self) -> f64 {
        match self {
            HedgeSpecies::Taxus => 1.4,
            HedgeSpecies::Conifer => 1.3,
            HedgeSpecies::Privet => 0.8,
            HedgeSpecies::Laurel => 0.8,
            HedgeSpecies::Beech => 1.0,
            HedgeSpecies::Other => 1.0,
        }
    }
}

/// What is under the hedge; clearing clippings off paving or out of a
/// planted border takes extra time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Substrate {
    #[serde(rename = "verharding")]
    Paving,
    #[serde(rename = "border")]
    Border,
    #[default]
    #[serde(rename = "overig")]
    Other,
}

impl Substrate {
    /// Cleanup multiplier for this substrate
    pub fn factor(&self) -> f64 {
        match self {
            Substrate::Paving => 1.1,
            Substrate::Border => 1.05,
            Substrate::Other => 1.0,
        }
    }
}

/// Which faces of the hedge are trimmed per visit.
///
/// Resolved against the correction-factor table under type `snoeiwijze`;
/// unconfigured modes are neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PruningMode {
    #[serde(rename = "top")]
    Top,
    #[serde(rename = "zijden")]
    Sides,
    #[default]
    #[serde(rename = "beide")]
    Both,
}

impl PruningMode {
    /// Value key in the correction-factor table
    pub fn key(&self) -> &'static str {
        match self {
            PruningMode::Top => "top",
            PruningMode::Sides => "zijden",
            PruningMode::Both => "beide",
        }
    }
}

/// Tree/shrub size class; names the pruning standard-hours entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    #[serde(rename = "klein")]
    Small,
    #[serde(rename = "middelgroot")]
    Medium,
    #[serde(rename = "groot")]
    Large,
}

impl SizeClass {
    /// Activity-name search fragment for the pruning labor lookup
    pub fn activity_term(&self) -> &'static str {
        match self {
            SizeClass::Small => "snoeien klein",
            SizeClass::Medium => "snoeien middelgroot",
            SizeClass::Large => "snoeien groot",
        }
    }
}

/// Weed control method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeedMethod {
    #[serde(rename = "handmatig")]
    Manual,
    #[serde(rename = "thermisch")]
    Thermal,
}

impl WeedMethod {
    /// Activity-name search fragment for the labor lookup
    pub fn activity_term(&self) -> &'static str {
        match self {
            WeedMethod::Manual => "onkruid wieden",
            WeedMethod::Thermal => "onkruid branden",
        }
    }
}

/// Mole control service tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MolePackageTier {
    #[serde(rename = "basis")]
    Basic,
    #[serde(rename = "premium")]
    Premium,
    #[serde(rename = "premium-plus")]
    PremiumPlus,
}

impl MolePackageTier {
    /// Name as it appears in line descriptions
    pub fn display_name(&self) -> &'static str {
        match self {
            MolePackageTier::Basic => "Basis",
            MolePackageTier::Premium => "Premium",
            MolePackageTier::PremiumPlus => "Premium Plus",
        }
    }
}

// ============================================================================
// Scope data union
// ============================================================================

fn default_frequency() -> u32 {
    1
}

/// Declarative description of one scope's work, tagged by scope id.
///
/// Flat records; only the paving foundation nests one level. All variants
/// deserialize from the wizard's JSON with the scope id as discriminator:
///
/// ```json
/// { "scope": "haag-onderhoud-uitgebreid",
///   "length_m": 10.0, "height_m": 3.0, "depth_m": 1.0,
///   "pruning": "beide", "species": "taxus", "substrate": "border",
///   "frequency": 2, "near_road": true, "haul_away": true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scope")]
pub enum ScopeData {
    /// Excavation / ground work
    #[serde(rename = "grondwerk")]
    Excavation {
        area_m2: f64,
        depth: DepthClass,
        #[serde(default)]
        haul_away: bool,
    },

    /// Paving: tiles, clinkers or natural stone
    #[serde(rename = "bestrating")]
    Paving {
        area_m2: f64,
        material: PavingMaterial,
        #[serde(default)]
        joint_cutting: JointCutting,
        #[serde(default)]
        edging: bool,
        #[serde(default)]
        foundation: Option<PavingFoundation>,
    },

    /// New lawn, seeded or sodded
    #[serde(rename = "gazon-aanleg")]
    LawnInstall { area_m2: f64, method: LawnMethod },

    /// Planting beds at a given density
    #[serde(rename = "beplanting")]
    Planting {
        area_m2: f64,
        plants_per_m2: f64,
        #[serde(default)]
        soil_improvement: bool,
    },

    /// New hedge along a length
    #[serde(rename = "haag-aanplant")]
    HedgePlanting { length_m: f64, plants_per_m: f64 },

    /// Fence screens on posts
    #[serde(rename = "schutting")]
    Fence { length_m: f64 },

    /// Pond excavation and liner
    #[serde(rename = "vijver")]
    Pond {
        area_m2: f64,
        depth_m: f64,
        #[serde(default)]
        haul_away: bool,
    },

    /// Irrigation piping and sprinklers
    #[serde(rename = "beregening")]
    Irrigation { pipe_length_m: f64, sprinklers: u32 },

    /// New planted border
    #[serde(rename = "border-aanleg")]
    BorderConstruction { area_m2: f64 },

    /// Recurring lawn mowing
    #[serde(rename = "gazon-onderhoud")]
    LawnMaintenance { area_m2: f64, mows_per_year: u32 },

    /// Hedge trimming, simple variant
    #[serde(rename = "haag-onderhoud")]
    HedgeBasic { length_m: f64, height_m: f64 },

    /// Hedge trimming, extended variant: volume-driven with species,
    /// substrate, proximity hazards and an annual frequency
    #[serde(rename = "haag-onderhoud-uitgebreid")]
    HedgeExtended {
        length_m: f64,
        height_m: f64,
        depth_m: f64,
        #[serde(default)]
        pruning: PruningMode,
        #[serde(default)]
        species: HedgeSpecies,
        #[serde(default)]
        substrate: Substrate,
        #[serde(default = "default_frequency")]
        frequency: u32,
        #[serde(default)]
        near_road: bool,
        #[serde(default)]
        near_building: bool,
        #[serde(default)]
        near_cables: bool,
        #[serde(default)]
        haul_away: bool,
    },

    /// Tree and shrub pruning by piece
    #[serde(rename = "snoeien")]
    Pruning {
        count: u32,
        size: SizeClass,
        #[serde(default)]
        near_road: bool,
        #[serde(default)]
        near_building: bool,
        #[serde(default)]
        near_cables: bool,
        #[serde(default)]
        haul_away: bool,
    },

    /// Weed control, manual or thermal
    #[serde(rename = "onkruidbestrijding")]
    WeedControl { area_m2: f64, method: WeedMethod },

    /// Lawn fertilization (contractually fixed margin)
    #[serde(rename = "bemesting")]
    Fertilization { area_m2: f64 },

    /// Mole control service bundle plus independent add-ons
    #[serde(rename = "mollenbestrijding")]
    MoleControl {
        package: MolePackageTier,
        #[serde(default)]
        lawn_repair_m2: f64,
        #[serde(default)]
        preventive_mesh_m2: f64,
        #[serde(default)]
        return_visit: bool,
    },

    /// Seasonal leaf clearing
    #[serde(rename = "bladruimen")]
    LeafClearing {
        area_m2: f64,
        #[serde(default = "default_frequency")]
        rounds: u32,
        #[serde(default)]
        haul_away: bool,
    },

    /// Border weeding and optional mulch cover
    #[serde(rename = "border-onderhoud")]
    BorderMaintenance {
        area_m2: f64,
        #[serde(default)]
        mulch: bool,
    },
}

impl ScopeData {
    /// The scope id this variant belongs to
    pub fn scope_id(&self) -> &'static str {
        match self {
            ScopeData::Excavation { .. } => scope_ids::GRONDWERK,
            ScopeData::Paving { .. } => scope_ids::BESTRATING,
            ScopeData::LawnInstall { .. } => scope_ids::GAZON_AANLEG,
            ScopeData::Planting { .. } => scope_ids::BEPLANTING,
            ScopeData::HedgePlanting { .. } => scope_ids::HAAG_AANPLANT,
            ScopeData::Fence { .. } => scope_ids::SCHUTTING,
            ScopeData::Pond { .. } => scope_ids::VIJVER,
            ScopeData::Irrigation { .. } => scope_ids::BEREGENING,
            ScopeData::BorderConstruction { .. } => scope_ids::BORDER_AANLEG,
            ScopeData::LawnMaintenance { .. } => scope_ids::GAZON_ONDERHOUD,
            ScopeData::HedgeBasic { .. } => scope_ids::HAAG_ONDERHOUD,
            ScopeData::HedgeExtended { .. } => scope_ids::HAAG_ONDERHOUD_UITGEBREID,
            ScopeData::Pruning { .. } => scope_ids::SNOEIEN,
            ScopeData::WeedControl { .. } => scope_ids::ONKRUIDBESTRIJDING,
            ScopeData::Fertilization { .. } => scope_ids::BEMESTING,
            ScopeData::MoleControl { .. } => scope_ids::MOLLENBESTRIJDING,
            ScopeData::LeafClearing { .. } => scope_ids::BLADRUIMEN,
            ScopeData::BorderMaintenance { .. } => scope_ids::BORDER_ONDERHOUD,
        }
    }

    /// The quote type this scope belongs to
    pub fn quote_type(&self) -> QuoteType {
        match self {
            ScopeData::Excavation { .. }
            | ScopeData::Paving { .. }
            | ScopeData::LawnInstall { .. }
            | ScopeData::Planting { .. }
            | ScopeData::HedgePlanting { .. }
            | ScopeData::Fence { .. }
            | ScopeData::Pond { .. }
            | ScopeData::Irrigation { .. }
            | ScopeData::BorderConstruction { .. } => QuoteType::Aanleg,
            ScopeData::LawnMaintenance { .. }
            | ScopeData::HedgeBasic { .. }
            | ScopeData::HedgeExtended { .. }
            | ScopeData::Pruning { .. }
            | ScopeData::WeedControl { .. }
            | ScopeData::Fertilization { .. }
            | ScopeData::MoleControl { .. }
            | ScopeData::LeafClearing { .. }
            | ScopeData::BorderMaintenance { .. } => QuoteType::Onderhoud,
        }
    }
}

// ============================================================================
// Shared calculator helpers
// ============================================================================

/// Build a labor line from a standard-hours lookup.
///
/// Applies the combined multiplicative factor, rounds to quarter hours and
/// prices at the global hourly rate. Returns `None` when the activity is
/// not in the catalog or the hours round away to zero; the line is simply
/// omitted.
pub(crate) fn standard_labor(
    ctx: &CalculationContext,
    scope: &str,
    term: &str,
    quantity: f64,
    factor: f64,
) -> Option<LineItem> {
    let entry = ctx.find_hours(scope, term)?;
    let hours = round_quarter_hour(quantity * entry.hours_per_unit * factor);
    if hours <= 0.0 {
        return None;
    }
    Some(LineItem::labor(
        scope,
        &entry.activity,
        hours,
        ctx.settings.hourly_rate,
    ))
}

/// Build a material line from a product lookup.
///
/// The product's wastage percentage inflates the quantity before pricing.
/// Returns `None` when the product is missing or the base quantity is not
/// positive.
pub(crate) fn product_material(
    ctx: &CalculationContext,
    scope: &str,
    term: &str,
    base_quantity: f64,
) -> Option<LineItem> {
    if base_quantity <= 0.0 {
        return None;
    }
    let product = ctx.find_product(term)?;
    Some(LineItem::material(
        scope,
        &product.name,
        &product.unit,
        base_quantity,
        product.wastage_percent,
        product.sell_price,
    ))
}

/// Combined additive safety surcharge for work near hazards.
///
/// The percentage points are summed and applied once, after the
/// multiplicative factor chain. Distinct from the multiplicative
/// correction factors; the two composition rules are not unified.
pub(crate) fn safety_surcharge(
    book: &PriceBook,
    near_road: bool,
    near_building: bool,
    near_cables: bool,
) -> f64 {
    let mut points = 0.0;
    if near_road {
        points += book.safety.near_road_percent;
    }
    if near_building {
        points += book.safety.near_building_percent;
    }
    if near_cables {
        points += book.safety.near_cables_percent;
    }
    1.0 + points / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_ids_round_trip() {
        let data = ScopeData::Excavation {
            area_m2: 100.0,
            depth: DepthClass::Standard,
            haul_away: true,
        };
        assert_eq!(data.scope_id(), scope_ids::GRONDWERK);
        assert_eq!(data.quote_type(), QuoteType::Aanleg);

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"scope\":\"grondwerk\""));
        assert!(json.contains("\"depth\":\"standard\""));
        let parsed: ScopeData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_defaults_fill_in_on_deserialize() {
        let parsed: ScopeData = serde_json::from_str(
            r#"{ "scope": "haag-onderhoud-uitgebreid",
                 "length_m": 10.0, "height_m": 3.0, "depth_m": 1.0 }"#,
        )
        .unwrap();
        match parsed {
            ScopeData::HedgeExtended {
                frequency,
                species,
                pruning,
                haul_away,
                ..
            } => {
                assert_eq!(frequency, 1);
                assert_eq!(species, HedgeSpecies::Other);
                assert_eq!(pruning, PruningMode::Both);
                assert!(!haul_away);
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_species_factors() {
        assert_eq!(HedgeSpecies::Taxus.factor(), 1.4);
        assert_eq!(HedgeSpecies::Privet.factor(), 0.8);
        assert_eq!(HedgeSpecies::Other.factor(), 1.0);
    }

    #[test]
    fn test_substrate_factors() {
        assert_eq!(Substrate::Paving.factor(), 1.1);
        assert_eq!(Substrate::Border.factor(), 1.05);
        assert_eq!(Substrate::Other.factor(), 1.0);
    }

    #[test]
    fn test_safety_surcharge_is_additive() {
        let book = PriceBook::default();
        // +20 near a road, +10 near a building, +15 near cables: summed, not chained
        assert_eq!(safety_surcharge(&book, true, true, true), 1.45);
        assert_eq!(safety_surcharge(&book, true, false, false), 1.2);
        assert_eq!(safety_surcharge(&book, false, false, false), 1.0);
    }

    #[test]
    fn test_dutch_wire_values() {
        assert_eq!(
            serde_json::to_string(&QuoteType::Aanleg).unwrap(),
            "\"aanleg\""
        );
        assert_eq!(
            serde_json::to_string(&Accessibility::Poor).unwrap(),
            "\"slecht\""
        );
        let parsed: BacklogSeverity = serde_json::from_str("\"matig\"").unwrap();
        assert_eq!(parsed, BacklogSeverity::Moderate);
    }
}
