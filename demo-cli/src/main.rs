use clap::Parser;
use lagoon_sim_core::{
    derive_metrics, predict, project, HerdSize, Horizon, LocationCatalog, LocationProfile,
};

/// Lagoon methane estimation demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "lagoon-demo")]
#[command(about = "Dairy lagoon methane estimation demo", long_about = None)]
struct Args {
    /// Number of cows (100-20000)
    #[arg(long, default_value_t = 1000)]
    herd: u32,

    /// Lagoon site (Pullman, Lynden, Bakersfield)
    #[arg(short, long, default_value = "Lynden")]
    location: String,

    /// Reporting horizon (day, month, year)
    #[arg(long, default_value = "day")]
    horizon: String,

    /// Preset scenario (small-wa, medium-wa, large-ca)
    #[arg(short, long)]
    preset: Option<String>,
}

/// Herd-size bounds offered by the demo UI
const HERD_RANGE: std::ops::RangeInclusive<u32> = 100..=20_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Quick-select presets for typical WA/CA dairies
    let (herd_count, location_name) = if let Some(preset_name) = &args.preset {
        match preset_name.to_lowercase().as_str() {
            "small-wa" => (500, "Pullman".to_string()),
            "medium-wa" => (2000, "Lynden".to_string()),
            "large-ca" => (15_500, "Bakersfield".to_string()),
            _ => {
                eprintln!("error: unknown preset '{preset_name}' (small-wa, medium-wa, large-ca)");
                std::process::exit(2);
            }
        }
    } else {
        (args.herd, args.location.clone())
    };

    if !HERD_RANGE.contains(&herd_count) {
        eprintln!(
            "error: herd size {} outside supported range {}-{}",
            herd_count,
            HERD_RANGE.start(),
            HERD_RANGE.end()
        );
        std::process::exit(2);
    }
    let herd = HerdSize::new(herd_count);

    let Some(site) = LocationCatalog::get(&location_name) else {
        eprintln!(
            "error: unknown location '{}' (valid sites: {})",
            location_name,
            LocationCatalog::names().join(", ")
        );
        std::process::exit(2);
    };

    let horizon: Horizon = match args.horizon.parse() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    report(herd, &site, horizon);
}

/// Render the full prediction report for one request
fn report(herd: HerdSize, site: &LocationProfile, horizon: Horizon) {
    println!("=== GHG Lagoon Mini-Demo ===\n");
    println!("Herd: {} at {} ({} climate)", herd, site.name, site.climate);

    let volume = predict(herd, site, horizon);
    println!("\nPredicted methane emission ({horizon}): {} ft³", with_thousands(volume.value()));

    let metrics = derive_metrics(volume, horizon);
    println!(
        "Energy equivalent: ~{} kWh | Climate impact: ~{:.1} car-equivalents",
        with_thousands(metrics.energy.value()),
        metrics.car_years.value()
    );

    println!("\nHow would climate change methane?");
    for (class, scenario_volume) in project(herd, site, horizon).iter() {
        println!(
            "  {:<5} {:>14} ft³",
            class.name(),
            with_thousands(scenario_volume.value())
        );
    }

    println!(
        "\nDemo model only. The full system refines these figures with \
         experimental data and lagoon kinetics."
    );
}

/// Format a non-negative figure with thousands separators, no decimals
fn with_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.round());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
