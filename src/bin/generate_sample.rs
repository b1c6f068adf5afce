//! Generate a deterministic sample salary dataset for manual testing.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Pick with a bias towards the front of the slice.
    fn pick_skewed<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let r = self.next_f64() * self.next_f64();
        &items[(r * items.len() as f64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let years = [2020, 2021, 2022, 2023];
    let titles: [(&str, f64); 6] = [
        ("Data Scientist", 120_000.0),
        ("Data Engineer", 115_000.0),
        ("Data Analyst", 80_000.0),
        ("Machine Learning Engineer", 135_000.0),
        ("Research Scientist", 125_000.0),
        ("Data Architect", 150_000.0),
    ];
    let employment_types = ["FT", "FT", "FT", "FT", "PT", "CT", "FL"];
    let remote_ratios = [0u32, 50, 100];
    let locations: [(&str, f64); 5] = [
        ("US", 1.0),
        ("GB", 0.75),
        ("CA", 0.8),
        ("ES", 0.5),
        ("IN", 0.3),
    ];
    let sizes = ["M", "L", "S"];

    let output_path = "salaries.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "work_year",
            "job_title",
            "employment_type",
            "remote_ratio",
            "company_location",
            "company_size",
            "salary_in_usd",
        ])
        .expect("Failed to write header");

    let rows = 500;
    for _ in 0..rows {
        let year = *rng.pick(&years);
        let (title, base) = *rng.pick_skewed(&titles);
        let employment_type = *rng.pick(&employment_types);
        let remote_ratio = *rng.pick(&remote_ratios);
        let (location, factor) = *rng.pick_skewed(&locations);
        let size = *rng.pick_skewed(&sizes);

        // Seniority drift per year plus per-record noise, floored at 20k.
        let drift = 1.0 + (year - 2020) as f64 * 0.05;
        let salary = rng.gauss(base * factor * drift, base * 0.15).max(20_000.0);

        writer
            .write_record([
                year.to_string(),
                title.to_string(),
                employment_type.to_string(),
                remote_ratio.to_string(),
                location.to_string(),
                size.to_string(),
                format!("{:.0}", salary),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {rows} records to {output_path}");
}
