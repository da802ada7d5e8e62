use std::f64::consts::PI;
use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE_INTERVAL: f64 = 0.01;
const ROWS: usize = 1000;
const CSV_PATH: &str = "sample_data.csv";
const CONFIG_PATH: &str = "sample_config.json";
/// Peak of the uniform sensor noise added to every reading [LSB].
const NOISE: f64 = 20.0;

/// (amplitude [LSB], frequency [1/time unit], offset [LSB]) per axis.
const CHANNELS: [(&str, f64, f64, f64); 3] = [
    ("x", 800.0, 5.0, 0.0),
    ("y", 400.0, 12.0, 50.0),
    ("z", 150.0, 30.0, 200.0),
];

/// Write the preamble, header and `ROWS` noisy rows. Returns the number of blank cells.
fn write_samples<W: Write>(mut out: W, rng: &mut impl Rng) -> Result<usize> {
    writeln!(out, "# synthetic magnetometer log")?;
    writeln!(out, "# sample interval {SAMPLE_INTERVAL}")?;

    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(out);
    let mut header = vec!["t".to_string()];
    header.extend(CHANNELS.iter().map(|(name, ..)| name.to_string()));
    writer.write_record(&header)?;

    let mut blanks = 0;
    for row in 0..ROWS {
        let t = row as f64 * SAMPLE_INTERVAL;
        let mut record = vec![row.to_string()];
        for (channel, &(_, amplitude, freq, offset)) in CHANNELS.iter().enumerate() {
            // Drop a y reading now and then so the filler path gets exercised.
            if channel == 1 && row % 97 == 13 {
                record.push(String::new());
                blanks += 1;
                continue;
            }
            let noise = rng.random_range(-NOISE..NOISE);
            let value = offset + amplitude * (2.0 * PI * freq * t).sin() + noise;
            record.push((value.round() as i64).to_string());
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(blanks)
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    let file = File::create(CSV_PATH).with_context(|| format!("creating {CSV_PATH}"))?;
    let blanks = write_samples(file, &mut rng).with_context(|| format!("writing {CSV_PATH}"))?;

    let config = serde_json::json!({
        "header_line": 3,
        "detail_column": -1,
        "preselect": ["x", "y"],
    });
    std::fs::write(CONFIG_PATH, serde_json::to_string_pretty(&config)?)
        .with_context(|| format!("writing {CONFIG_PATH}"))?;

    println!(
        "Wrote {ROWS} rows ({} channels, {blanks} blank cells) to {CSV_PATH}; \
         run `csv-plotter {CONFIG_PATH}` to open it with the header on line 3",
        CHANNELS.len()
    );
    Ok(())
}
