use rand::Rng;

use super::observation::{Dataset, Observation};
use super::region::Region;

pub const YEAR_START: i32 = 1880;
pub const YEAR_END: i32 = 2020;

const TEMP_PER_YEAR: f64 = 0.01;
const SEA_PER_YEAR: f64 = 0.1;
const EVENTS_PER_YEAR: f64 = 0.3;
const EVENTS_OFFSET: i64 = 2;
const CO2_PER_YEAR: f64 = 2.0;

const TEMP_NOISE: f64 = 0.1;
const SEA_NOISE: f64 = 0.2;
const EVENTS_NOISE: f64 = 3.0;
const CO2_NOISE: f64 = 5.0;

const MIN_EVENTS: i64 = 1;
const MIN_CO2: f64 = 10.0;

/// Noise-free value of every field for `region` in `year`.
pub fn trend(region: Region, year: i32) -> Observation {
    compose(region, year, Perturbation::default())
}

/// Generates the full 1880..=2020 × region series with an OS-seeded RNG.
pub fn generate(noise_scale: f64) -> Dataset {
    generate_with(&mut rand::rng(), noise_scale)
}

pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, noise_scale: f64) -> Dataset {
    let n_years = (YEAR_END - YEAR_START + 1) as usize;
    let mut records = Vec::with_capacity(n_years * Region::ALL.len());
    for year in YEAR_START..=YEAR_END {
        for region in Region::ALL {
            let p = Perturbation::draw(rng, noise_scale);
            records.push(compose(region, year, p));
        }
    }
    Dataset::new(records)
}

#[derive(Clone, Copy, Debug, Default)]
struct Perturbation {
    temp: f64,
    sea: f64,
    events: i64,
    co2: f64,
}

impl Perturbation {
    fn draw<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> Self {
        let mut centered = || rng.random::<f64>() - 0.5;
        Self {
            temp: centered() * TEMP_NOISE * scale,
            sea: centered() * SEA_NOISE * scale,
            events: (centered() * EVENTS_NOISE * scale).floor() as i64,
            co2: (centered() * CO2_NOISE * scale).floor(),
        }
    }
}

fn compose(region: Region, year: i32, p: Perturbation) -> Observation {
    let base = region.baseline();
    let years = f64::from(year - YEAR_START);

    let events_trend = base.events + (years * EVENTS_PER_YEAR).floor() as i64 + EVENTS_OFFSET;
    let events = (events_trend + p.events).max(MIN_EVENTS);

    Observation {
        year,
        region,
        temperature_anomaly: base.temp + years * TEMP_PER_YEAR + p.temp,
        sea_level_rise: base.sea + years * SEA_PER_YEAR + p.sea,
        extreme_events: events as u32,
        co2_emissions: (base.co2 + years * CO2_PER_YEAR + p.co2).max(MIN_CO2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn trend_matches_baseline_in_first_year() {
        let t = trend(Region::Asia, YEAR_START);
        assert_abs_diff_eq!(t.temperature_anomaly, -0.15, epsilon = 1e-12);
        assert_abs_diff_eq!(t.sea_level_rise, 0.0, epsilon = 1e-12);
        assert_eq!(t.extreme_events, 4);
        assert_abs_diff_eq!(t.co2_emissions, 50.0, epsilon = 1e-12);
    }

    #[test]
    fn trend_in_last_year() {
        let t = trend(Region::Global, YEAR_END);
        assert_abs_diff_eq!(t.temperature_anomaly, -0.1 + 1.4, epsilon = 1e-9);
        assert_abs_diff_eq!(t.sea_level_rise, 14.0, epsilon = 1e-9);
        assert_eq!(t.extreme_events, 2 + 42 + 2);
        assert_abs_diff_eq!(t.co2_emissions, 280.0 + 280.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_noise_scale_reproduces_trend() {
        let mut rng = StdRng::seed_from_u64(3);
        let data = generate_with(&mut rng, 0.0);
        for o in data.iter() {
            let t = trend(o.region, o.year);
            assert_eq!(o, &t);
        }
    }

    #[test]
    fn noise_stays_within_amplitude() {
        let mut rng = StdRng::seed_from_u64(11);
        let data = generate_with(&mut rng, 1.0);
        for o in data.iter() {
            let t = trend(o.region, o.year);
            assert!((o.temperature_anomaly - t.temperature_anomaly).abs() <= 0.05 + 1e-12);
            assert!((o.sea_level_rise - t.sea_level_rise).abs() <= 0.1 + 1e-12);
        }
    }
}
