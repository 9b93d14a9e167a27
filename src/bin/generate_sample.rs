use anyhow::{Context, Result};

use uniscope::data::model::{
    COUNTRY, EDUCATION_LEVEL, METRIC_COLUMNS, PROGRAM, RANKING, UNIVERSITY,
};

/// Small deterministic PRNG (splitmix64) so the sample file is identical
/// across runs.
struct ScoreRng {
    state: u64,
}

impl ScoreRng {
    fn new(seed: u64) -> Self {
        ScoreRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Bell-ish jitter around `mean`: averaging three uniforms keeps
    /// scores clustered without long tails.
    fn jitter(&mut self, mean: f64, spread: f64) -> f64 {
        let u = (self.next_f64() + self.next_f64() + self.next_f64()) / 3.0;
        mean + (u - 0.5) * 2.0 * spread
    }
}

const LEVELS: [&str; 2] = ["Bachelors", "Masters"];

const PROGRAMS: [&str; 6] = [
    "Computer Science",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Economics",
    "Physics",
    "Data Science",
];

/// (university, country), in world-ranking order.
const UNIVERSITIES: [(&str, &str); 12] = [
    ("MIT", "USA"),
    ("Stanford University", "USA"),
    ("Harvard University", "USA"),
    ("University of Oxford", "UK"),
    ("University of Cambridge", "UK"),
    ("Imperial College London", "UK"),
    ("ETH Zurich", "Switzerland"),
    ("National University of Singapore", "Singapore"),
    ("Nanyang Technological University", "Singapore"),
    ("Technical University of Munich", "Germany"),
    ("University of Melbourne", "Australia"),
    ("University of Tokyo", "Japan"),
];

fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn main() -> Result<()> {
    let mut rng = ScoreRng::new(42);

    let output_path = "sample_rankings.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut header: Vec<&str> = vec![EDUCATION_LEVEL, COUNTRY, UNIVERSITY, PROGRAM, RANKING];
    header.extend(METRIC_COLUMNS);
    writer.write_record(&header)?;

    let mut row_count = 0usize;
    for (rank_idx, (university, country)) in UNIVERSITIES.iter().enumerate() {
        let ranking = rank_idx + 1;
        // Quality drifts down the ranking so scores correlate with rank.
        let base = 96.0 - rank_idx as f64 * 3.2;

        for level in &LEVELS {
            for program in &PROGRAMS {
                // Not every university teaches every program at every level.
                if rng.next_f64() < 0.2 {
                    continue;
                }

                let mut record: Vec<String> = vec![
                    level.to_string(),
                    country.to_string(),
                    university.to_string(),
                    program.to_string(),
                    ranking.to_string(),
                ];
                for _ in METRIC_COLUMNS {
                    // Sprinkle in the gaps real QS exports have.
                    if rng.next_f64() < 0.02 {
                        record.push(String::new());
                        continue;
                    }
                    let score = round_tenth(rng.jitter(base, 6.0).clamp(0.0, 100.0));
                    record.push(score.to_string());
                }
                writer.write_record(&record)?;
                row_count += 1;
            }
        }
    }

    writer.flush()?;
    println!(
        "Wrote {row_count} program rows for {} universities to {output_path}",
        UNIVERSITIES.len()
    );
    Ok(())
}
