//! Write a synthetic overdose dataset in the CDC provisional-counts layout.
//!
//! Usage: `generate_sample [OUTPUT.csv]` (defaults to `sample_overdose_rates.csv`).

use anyhow::{Context, Result};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// (indicator, baseline monthly count, yearly growth factor)
const INDICATORS: [(&str, f64, f64); 5] = [
    ("Synthetic opioids, excl. methadone (T40.4)", 1800.0, 1.22),
    ("Heroin (T40.1)", 1150.0, 0.90),
    ("Cocaine (T40.5)", 900.0, 1.12),
    ("Psychostimulants with abuse potential (T43.6)", 1000.0, 1.18),
    ("Methadone (T40.3)", 280.0, 0.97),
];

const STATES: [&str; 3] = ["US", "NY", "CA"];

/// Minimal deterministic PRNG (xorshift64*)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng {
            state: seed.max(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn main() -> Result<()> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_overdose_rates.csv".to_string());

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output)
        .with_context(|| format!("creating {output}"))?;
    writer.write_record(["State", "Year", "Month", "Period", "Indicator", "Data Value"])?;

    let mut written = 0usize;
    for year in 2019..=2023 {
        let year_field = year.to_string();
        for month in MONTHS {
            for state in STATES {
                let scale = if state == "US" { 1.0 } else { 0.08 };
                for (indicator, base, growth) in INDICATORS {
                    // Occasional suppressed cells, as in the real data.
                    let value = if rng.next_f64() < 0.03 {
                        String::new()
                    } else {
                        let trend = growth.powi(year - 2019);
                        let noise = 0.9 + 0.2 * rng.next_f64();
                        format!("{:.0}", base * trend * noise * scale)
                    };
                    writer.write_record([
                        state,
                        year_field.as_str(),
                        month,
                        "12 month-ending",
                        indicator,
                        value.as_str(),
                    ])?;
                    written += 1;
                }
            }
        }
    }

    writer.flush()?;
    println!("Wrote {written} rows to {output}");
    Ok(())
}
