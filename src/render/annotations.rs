//! Callouts layered above each chart.

use crate::data::{Observation, Region, YEAR_END};

use super::error::RenderError;
use super::scale::{BandScale, LinearScale};
use super::surface::{Annotation, AnnotationStyle};

pub const BASELINE_YEAR: i32 = 1950;
pub const ACCELERATION_YEAR: i32 = 1980;

pub fn overview(
    global: &[&Observation],
    x: &LinearScale,
    y: &LinearScale,
) -> Result<Vec<Annotation>, RenderError> {
    let acceleration = global
        .iter()
        .find(|o| o.year == ACCELERATION_YEAR)
        .ok_or(RenderError::MissingObservation {
            region: Region::Global,
            year: ACCELERATION_YEAR,
        })?;

    Ok(vec![
        Annotation {
            title: "Baseline".into(),
            label: "Pre-industrial baseline (0°C anomaly)".into(),
            anchor: (x.map(f64::from(BASELINE_YEAR)), y.map(0.0)),
            dx: 0.0,
            dy: -20.0,
            style: AnnotationStyle::GLOBAL,
        },
        Annotation {
            title: "Acceleration".into(),
            label: "Rapid warming begins".into(),
            anchor: (
                x.map(f64::from(ACCELERATION_YEAR)),
                y.map(acceleration.temperature_anomaly),
            ),
            dx: 50.0,
            dy: -30.0,
            style: AnnotationStyle::GLOBAL,
        },
    ])
}

/// Pins a callout on the last point of the Asia series.
pub fn temperature(
    asia: &[&Observation],
    x: &LinearScale,
    y: &LinearScale,
) -> Result<Vec<Annotation>, RenderError> {
    let last = asia.last().ok_or(RenderError::MissingRegion(Region::Asia))?;
    Ok(vec![Annotation {
        title: "Regional Impact".into(),
        label: "Asia shows highest warming".into(),
        anchor: (x.map(f64::from(YEAR_END)), y.map(last.temperature_anomaly)),
        dx: 0.0,
        dy: -20.0,
        style: AnnotationStyle::REGIONAL,
    }])
}

/// Observation with the strictly greatest anomaly; the first one wins a tie.
pub fn most_affected<'a>(latest: &[&'a Observation]) -> Option<&'a Observation> {
    latest.iter().copied().reduce(|max, cur| {
        if cur.temperature_anomaly > max.temperature_anomaly {
            cur
        } else {
            max
        }
    })
}

pub fn regional(
    latest: &[&Observation],
    x: &BandScale<Region>,
    y: &LinearScale,
) -> Result<Vec<Annotation>, RenderError> {
    let max = most_affected(latest).ok_or(RenderError::NoLatestValues)?;
    let cx = x
        .center(&max.region)
        .ok_or(RenderError::MissingRegion(max.region))?;
    Ok(vec![Annotation {
        title: "Most Affected".into(),
        label: format!("Highest warming: {}", max.region),
        anchor: (cx, y.map(max.temperature_anomaly)),
        dx: 0.0,
        dy: -30.0,
        style: AnnotationStyle::HIGHLIGHT,
    }])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(region: Region, temp: f64) -> Observation {
        Observation {
            year: 2020,
            region,
            temperature_anomaly: temp,
            sea_level_rise: 0.0,
            extreme_events: 1,
            co2_emissions: 10.0,
        }
    }

    #[test]
    fn first_maximum_wins() {
        let a = obs(Region::Europe, 1.3);
        let b = obs(Region::Asia, 1.3);
        let c = obs(Region::Africa, 1.1);
        let picked = most_affected(&[&c, &a, &b]).unwrap();
        assert_eq!(picked.region, Region::Europe);
    }

    #[test]
    fn empty_input_has_no_maximum() {
        assert!(most_affected(&[]).is_none());
    }

    #[test]
    fn overview_requires_1980() {
        let x = LinearScale::new((1880.0, 2020.0), (0.0, 100.0));
        let y = LinearScale::new((-0.5, 1.2), (100.0, 0.0));
        let only = obs(Region::Global, 0.4);
        let err = overview(&[&only], &x, &y).unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingObservation {
                region: Region::Global,
                year: 1980
            }
        );
    }
}
