use std::path::PathBuf;

use anyhow::{Context, Result};
use padel_explorer::data::Racket;

const BRANDS: [&str; 8] = [
    "Bullpadel", "Nox", "Head", "Adidas", "Babolat", "Siux", "StarVie", "Wilson",
];
const MODELS: [&str; 10] = [
    "Vertex", "AT10", "Delta", "Metalbone", "Viper", "Electra", "Raptor", "Hack", "Flow", "Blade",
];
const EDITIONS: [&str; 5] = ["", "Pro", "Lite", "Hybrid", "Control"];
const RACKETS: usize = 120;

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

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo + 1) as u64) as i64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn sample_racket(rng: &mut SimpleRng, year: i64) -> Racket {
    let edition = rng.pick(&EDITIONS);
    let name = [rng.pick(&BRANDS), rng.pick(&MODELS), edition]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let power = rng.range(4, 10);
    let control = rng.range(4, 10);
    let overall = ((power + control) / 2 + rng.range(-1, 1)).clamp(1, 10);

    // About one racket in six has no listed price.
    let price = (rng.range(0, 5) != 0).then(|| (rng.range(60, 380) as f64) - 0.05);

    Racket {
        name: Some(format!("{name} {year}")),
        overall,
        power,
        control,
        rebound: rng.range(3, 10),
        omgang: rng.range(3, 10),
        sweetspot: rng.range(3, 10),
        price,
    }
}

fn main() -> Result<()> {
    let out = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("padel_data.csv"));

    let mut rng = SimpleRng::new(42);
    let mut writer =
        csv::Writer::from_path(&out).with_context(|| format!("creating {}", out.display()))?;

    for i in 0..RACKETS {
        let racket = sample_racket(&mut rng, 2022 + (i % 4) as i64);
        writer.serialize(&racket).context("writing racket row")?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {RACKETS} rackets to {}", out.display());
    Ok(())
}
