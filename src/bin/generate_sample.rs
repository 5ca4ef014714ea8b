//! Writes `sample_jobs_large.csv`, a deterministic job-postings dataset
//! for exercising the viewer without external data.

use anyhow::{Context, Result};

const OUTPUT: &str = "sample_jobs_large.csv";
const ROWS: usize = 300;

const TITLES: &[&str] = &[
    "Python Developer",
    "Data Scientist",
    "Data Analyst",
    "Backend Engineer",
    "Frontend Developer",
    "DevOps Engineer",
    "Machine Learning Engineer",
    "Senior C++ Engineer",
    "QA Engineer",
    "Product Manager",
    "Business Analyst",
    "Cloud Architect",
];

const LOCATIONS: &[&str] = &[
    "Pune",
    "Remote",
    "Bengaluru",
    "Hyderabad",
    "Mumbai",
    "Delhi NCR",
    "Chennai",
    "Berlin",
];

const COMPANIES: &[&str] = &[
    "Acme Analytics",
    "Nimbus Labs",
    "Quantum Soft",
    "BlueSky Systems",
    "Vertex Data",
    "Orbital Tech",
];

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

    /// Uniform value in `lo..hi`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo)
    }

    fn pick<'a, T: ?Sized>(&mut self, items: &'a [&'a T]) -> &'a T {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// True with probability `percent`/100.
    fn chance(&mut self, percent: u64) -> bool {
        self.next_u64() % 100 < percent
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(OUTPUT)
        .with_context(|| format!("creating {OUTPUT}"))?;
    writer
        .write_record(["Job Title", "Company", "Location", "Experience", "Salary"])
        .context("writing header")?;

    for _ in 0..ROWS {
        let title = rng.pick(TITLES);
        let company = rng.pick(COMPANIES);
        let location = rng.pick(LOCATIONS);
        let experience = format!("{}+ yrs", rng.range(0, 10));
        let salary = salary_text(&mut rng);

        writer
            .write_record([title, company, location, experience.as_str(), salary.as_str()])
            .context("writing row")?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {ROWS} postings to {OUTPUT}");
    Ok(())
}

/// Free-text salary with realistic gaps: some ranges, some single amounts,
/// some undisclosed, some empty.
fn salary_text(rng: &mut SimpleRng) -> String {
    if rng.chance(12) {
        return String::new();
    }
    if rng.chance(15) {
        return "Not Disclosed".to_string();
    }
    let lower = rng.range(30, 110) * 1_000;
    if rng.chance(40) {
        let upper = lower + rng.range(5, 30) * 1_000;
        format!("${} - ${}", with_commas(lower), with_commas(upper))
    } else {
        format!("${}", with_commas(lower))
    }
}

/// `45000` → `"45,000"`.
fn with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_grouping() {
        assert_eq!(with_commas(900), "900");
        assert_eq!(with_commas(45000), "45,000");
        assert_eq!(with_commas(1234567), "1,234,567");
    }

    #[test]
    fn rng_is_deterministic() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }
}
