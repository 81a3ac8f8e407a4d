//! api-exporter: headless dashboard artifact generator.
//!
//! Usage:
//!   api-exporter
//!   api-exporter --seed 12345 --out-dir /srv/www

use anyhow::Result;
use opsdash_core::{dataset::generate_sample_data, export, rng::SampleRng};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed: Option<u64> = args
        .windows(2)
        .find(|w| w[0] == "--seed")
        .and_then(|w| w[1].parse().ok());
    let out_dir = args
        .windows(2)
        .find(|w| w[0] == "--out-dir")
        .map(|w| w[1].as_str())
        .unwrap_or(".");

    let mut rng = match seed {
        Some(seed) => SampleRng::from_seed(seed),
        None => SampleRng::from_entropy(),
    };

    // Capture "today" once; every table shares the same date index.
    let today = chrono::Local::now().date_naive();
    log::debug!("exporting snapshot for {today} into {out_dir}");

    let dataset = generate_sample_data(today, &mut rng);
    let artifact = export::dataset_to_json(&dataset)?;
    let (primary, legacy) = export::write_artifact(&artifact, Path::new(out_dir))?;

    println!("=== EXPORT SUMMARY ===");
    println!("  today:    {today}");
    match seed {
        Some(seed) => println!("  seed:     {seed}"),
        None => println!("  seed:     (entropy)"),
    }
    for (name, table) in dataset.tables() {
        println!("  {name:<28} {:>3} rows", table.row_count());
    }
    println!("  primary:  {}", primary.display());
    println!("  legacy:   {}", legacy.display());
    Ok(())
}
