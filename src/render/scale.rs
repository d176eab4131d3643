use super::surface::Rgb;

/// Continuous mapping from a data domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        // Collapsed domains map everything onto the middle of the range.
        let t = if span == 0.0 || !span.is_finite() {
            0.5
        } else {
            (v - d0) / span
        };
        r0 + t * (r1 - r0)
    }

    /// Round tick values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if !start.is_finite() || !stop.is_finite() || count == 0 {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }
        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }
        let inc = tick_increment(start, stop, count);
        let mut ticks = Vec::new();
        if inc == 0.0 || !inc.is_finite() {
            return ticks;
        }
        if inc > 0.0 {
            let lo = (start / inc).ceil() as i64;
            let hi = (stop / inc).floor() as i64;
            ticks.extend((lo..=hi).map(|i| i as f64 * inc));
        } else {
            // Negative increments encode 1/step to keep decimal ticks exact.
            let step = -inc;
            let lo = (start * step).ceil() as i64;
            let hi = (stop * step).floor() as i64;
            ticks.extend((lo..=hi).map(|i| i as f64 / step));
        }
        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Evenly spaced bands for categorical positions.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale<K> {
    keys: Vec<K>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl<K: PartialEq + Clone> BandScale<K> {
    /// Uses the same inner and outer `padding`, centred in the range.
    pub fn new(keys: &[K], range: (f64, f64), padding: f64) -> Self {
        let n = keys.len() as f64;
        let (r0, r1) = range;
        let step = (r1 - r0) / (n - padding + 2.0 * padding).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self {
            keys: keys.to_vec(),
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    pub fn position(&self, key: &K) -> Option<f64> {
        let idx = self.keys.iter().position(|k| k == key)?;
        Some(self.start + self.step * idx as f64)
    }

    pub fn center(&self, key: &K) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth * 0.5)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

pub const CATEGORY10: [Rgb; 10] = [
    Rgb::hex(0x1f77b4),
    Rgb::hex(0xff7f0e),
    Rgb::hex(0x2ca02c),
    Rgb::hex(0xd62728),
    Rgb::hex(0x9467bd),
    Rgb::hex(0x8c564b),
    Rgb::hex(0xe377c2),
    Rgb::hex(0x7f7f7f),
    Rgb::hex(0xbcbd22),
    Rgb::hex(0x17becf),
];

/// Assigns palette colours to keys in domain order, cycling when exhausted.
pub struct OrdinalColors<K> {
    keys: Vec<K>,
    palette: &'static [Rgb],
}

impl<K: PartialEq + Clone> OrdinalColors<K> {
    pub fn new(keys: &[K], palette: &'static [Rgb]) -> Self {
        Self {
            keys: keys.to_vec(),
            palette,
        }
    }

    pub fn color(&self, key: &K) -> Rgb {
        let idx = self.keys.iter().position(|k| k == key).unwrap_or(0);
        self.palette[idx % self.palette.len()]
    }
}

pub fn extent<T, F>(items: &[T], f: F) -> Option<(f64, f64)>
where
    F: Fn(&T) -> f64,
{
    items.iter().map(f).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
