//! Utility to score a nutrition JSON file from the command line
//!
//! Usage: score_meal <nutrition.json>
//!
//! Honours NUTRILENS_WEIGHT_POLICY and NUTRILENS_PROTEIN_BAND.

use nutrilens::config::AppConfig;
use nutrilens::models::NutritionAnalysis;
use nutrilens::scoring::HealthScoreCalculator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: score_meal <nutrition.json>")?;

    let raw = std::fs::read_to_string(&path)?;
    let analysis: NutritionAnalysis = serde_json::from_str(&raw)?;

    let config = AppConfig::from_env();
    let calculator = HealthScoreCalculator::new(config.scoring);
    let scores = calculator.calculate(
        &analysis.macronutrients,
        &analysis.ingredients,
        analysis.micronutrients.as_ref(),
    );

    eprintln!("Dish: {}", analysis.dish_name);
    println!("{}", serde_json::to_string_pretty(&scores)?);

    Ok(())
}
