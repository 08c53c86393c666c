use anyhow::{Context, Result};

use peak_picker::{ClickPoint, PickConfig, PickSession, Spectrum};

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

fn generate_spectrum(
    wavenumbers: &[f64],
    peaks: &[(f64, f64, f64)],
    noise_level: f64,
    rng: &mut SimpleRng,
) -> Vec<f64> {
    wavenumbers
        .iter()
        .map(|&wn| {
            let signal: f64 = peaks
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(wn, mu, sigma, amp))
                .sum();
            signal + rng.gauss(0.0, noise_level)
        })
        .collect()
}

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
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);

    // Wavenumbers: 4000 → 2002, step 2
    let wavenumbers: Vec<f64> = (0..1000).map(|i| 4000.0 - i as f64 * 2.0).collect();
    let bands = [
        (3400.0, 80.0, 0.8),
        (2900.0, 40.0, 0.5),
        (2350.0, 30.0, 0.3),
    ];
    let intensities = generate_spectrum(&wavenumbers, &bands, 0.002, &mut rng);
    let spectrum = Spectrum::new(wavenumbers, intensities)?;

    let config = PickConfig {
        snap_to_peak: true,
        // Wavenumber units dominate the distance here.
        max_click_distance: 25.0,
    };
    let mut session = PickSession::new(spectrum, config);

    // Scripted clicks: one per band (slightly off-center), one repeat to
    // demonstrate deselection, one far off the curve.
    let clicks = [
        ClickPoint { x: 3390.0, y: 0.75 },
        ClickPoint { x: 2910.0, y: 0.45 },
        ClickPoint { x: 2355.0, y: 0.28 },
        ClickPoint { x: 2910.0, y: 0.45 },
        ClickPoint { x: 1500.0, y: 5.0 },
    ];

    for click in clicks {
        match session.handle_click(click) {
            Some(effect) => println!("click ({:7.1}, {:.2}) -> {effect:?}", click.x, click.y),
            None => println!("click ({:7.1}, {:.2}) -> ignored", click.x, click.y),
        }
    }

    let outcome = session.finalize();
    println!("\npicked {} peak(s):", outcome.indices.len());
    for &i in &outcome.indices {
        println!(
            "  row {i:4}  x = {:7.1}  y = {:.4}",
            outcome.annotated.x[i], outcome.annotated.y[i]
        );
    }

    let export = outcome.export();
    let json = export.to_json().context("serializing peak export")?;
    println!("\nexport: {json}");

    Ok(())
}
