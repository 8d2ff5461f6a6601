//! # Offerte CLI
//!
//! Command-line demo for the quote engine. Plays the role of the
//! surrounding application: it owns the reference tables, builds the
//! calculation input from a few prompts, and prints the generated lines
//! and totals.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use offerte_core::catalog::{CalculationContext, CorrectionFactor, Settings, StandardHours};
use offerte_core::dispatch::{generate, CalculationInput};
use offerte_core::lines::preparation_overhead_line;
use offerte_core::pricebook::PriceBook;
use offerte_core::scopes::{
    scope_ids, Accessibility, DepthClass, JointCutting, PavingMaterial, QuoteType, ScopeData,
};
use offerte_core::totals::aggregate_with_settings;
use offerte_core::Product;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_yes_no(prompt: &str, default: bool) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim().to_lowercase().as_str() {
        "j" | "ja" | "y" | "yes" => true,
        "n" | "nee" | "no" => false,
        _ => default,
    }
}

/// Demo rate tables; the real application loads these from its catalog.
fn demo_tables() -> (Vec<StandardHours>, Vec<CorrectionFactor>, Vec<Product>) {
    let hours = vec![
        StandardHours::new(scope_ids::GRONDWERK, "Ontgraven licht", 0.05, "m²"),
        StandardHours::new(scope_ids::GRONDWERK, "Ontgraven standaard", 0.08, "m²"),
        StandardHours::new(scope_ids::GRONDWERK, "Ontgraven zwaar", 0.12, "m²"),
        StandardHours::new(scope_ids::GRONDWERK, "Grond afvoeren", 0.10, "m³"),
        StandardHours::new(scope_ids::BESTRATING, "Bestraten tegels", 0.25, "m²"),
        StandardHours::new(scope_ids::BESTRATING, "Zandbed aanbrengen", 0.05, "m²"),
        StandardHours::new(scope_ids::BESTRATING, "Opsluitband zetten", 0.20, "m"),
    ];
    let factors = vec![
        CorrectionFactor::new("bereikbaarheid", "goed", 1.0),
        CorrectionFactor::new("bereikbaarheid", "beperkt", 1.15),
        CorrectionFactor::new("bereikbaarheid", "slecht", 1.3),
    ];
    let products = vec![
        Product::new("Afvoer grond (stort)", 18.50, "m³", 0.0),
        Product::new("Straatzand", 32.00, "m³", 10.0),
        Product::new("Opsluitband 100x20x6", 8.50, "m", 5.0),
    ];
    (hours, factors, products)
}

fn main() {
    println!("Offerte CLI - Quote Line-Item Generator");
    println!("================================================");
    println!();
    println!("Demo: new-build quote with excavation and tile paving.");
    println!();

    let area_m2 = prompt_f64("Paved/excavated area (m²) [60.0]: ", 60.0);
    let haul_away = prompt_yes_no("Haul away excavated soil? (j/n) [j]: ", true);
    let limited_access = prompt_yes_no("Limited site access? (j/n) [n]: ", false);

    let input = CalculationInput {
        quote_type: QuoteType::Aanleg,
        scope_ids: vec![
            scope_ids::GRONDWERK.to_string(),
            scope_ids::BESTRATING.to_string(),
        ],
        scope_data: HashMap::from([
            (
                scope_ids::GRONDWERK.to_string(),
                ScopeData::Excavation {
                    area_m2,
                    depth: DepthClass::Standard,
                    haul_away,
                },
            ),
            (
                scope_ids::BESTRATING.to_string(),
                ScopeData::Paving {
                    area_m2,
                    material: PavingMaterial::Tiles,
                    joint_cutting: JointCutting::Little,
                    edging: true,
                    foundation: None,
                },
            ),
        ]),
        accessibility: if limited_access {
            Accessibility::Limited
        } else {
            Accessibility::Good
        },
        backlog: None,
    };

    let (hours, factors, products) = demo_tables();
    let settings = Settings::default();
    if let Err(e) = settings.validate() {
        eprintln!("Error: {}", e);
        return;
    }

    let ctx = CalculationContext::new(hours, factors, products, settings, PriceBook::builtin().clone())
        .with_site_conditions(input.accessibility, input.backlog);

    let mut lines = generate(&input, &ctx);
    lines.push(preparation_overhead_line(&ctx.settings, &ctx.price_book));
    let totals = aggregate_with_settings(&lines, &ctx.settings, &HashMap::new());

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  {:<34} {:>8} {:<5} {:>10}", "Omschrijving", "Aantal", "Eenh", "Totaal");
    println!("═══════════════════════════════════════════════════════════════");
    for line in &lines {
        println!(
            "  {:<34} {:>8.2} {:<5} {:>10.2}",
            line.description, line.quantity, line.unit, line.total
        );
    }
    println!("───────────────────────────────────────────────────────────────");
    println!("  Materiaal:        € {:>10.2}", totals.material_cost);
    println!("  Arbeid:           € {:>10.2}  ({:.2} uur)", totals.labor_cost, totals.total_hours);
    println!("  Marge ({:>5.2}%):   € {:>10.2}", totals.effective_margin_percent, totals.margin);
    println!("  Excl. BTW:        € {:>10.2}", totals.ex_vat);
    println!("  BTW:              € {:>10.2}", totals.vat);
    println!("  Incl. BTW:        € {:>10.2}", totals.incl_vat);
    println!("═══════════════════════════════════════════════════════════════");

    println!();
    println!("JSON Output (for persistence/export):");
    if let Ok(json) = serde_json::to_string_pretty(&totals) {
        println!("{}", json);
    }
}
