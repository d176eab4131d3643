use crate::data::{Dataset, Observation, Region};
use crate::render::error::RenderError;
use crate::render::frame::{ChartFrame, format_celsius, format_plain, format_year, linear_ticks};
use crate::render::scale::extent;
use crate::render::surface::{
    Anchor, Curve, DrawSurface, Highlight, Hover, LineMark, PointMark, TextMark, TextRole, palette,
};
use crate::render::tooltip;
use crate::story::state::NarrativeState;

use super::{SceneRenderer, TEMPERATURE_TITLE};

pub const NO_DATA_FOR_YEAR: &str = "No data available for selected year";
pub const NO_DATA_FOR_REGION: &str = "No data available for selected region";

const LABEL_LIFT: f64 = 15.0;

/// Scatter of every continent for one year, or one region's full series.
pub struct InteractiveScene;

impl SceneRenderer for InteractiveScene {
    fn render(
        &self,
        data: &Dataset,
        state: &NarrativeState,
        frame: &ChartFrame,
        surface: &mut dyn DrawSurface,
    ) -> Result<(), RenderError> {
        if state.region.is_global() {
            let year_data: Vec<_> = data
                .for_year(state.year)
                .into_iter()
                .filter(|o| !o.region.is_global())
                .collect();
            year_scatter(&year_data, frame, surface);
        } else {
            let series = match state.region.region() {
                Some(region) => data.for_region(region),
                None => Vec::new(),
            };
            region_series(&series, frame, surface);
        }
        Ok(())
    }
}

fn year_scatter(year_data: &[&Observation], frame: &ChartFrame, surface: &mut dyn DrawSurface) {
    if year_data.is_empty() {
        frame.message(surface, NO_DATA_FOR_YEAR);
        return;
    }
    let max_co2 = year_data.iter().map(|o| o.co2_emissions).fold(f64::MIN, f64::max);
    let max_temp = year_data
        .iter()
        .map(|o| o.temperature_anomaly)
        .fold(f64::MIN, f64::max);

    let x = frame.x_linear((0.0, max_co2 * 1.1));
    let y = frame.y_linear((0.0, max_temp * 1.2));
    frame.bottom_axis(surface, linear_ticks(&x, format_plain), 0.0, "CO2 Emissions (ppm)");
    frame.left_axis(surface, linear_ticks(&y, format_celsius), TEMPERATURE_TITLE);

    for o in year_data {
        surface.point(&PointMark {
            center: (x.map(o.co2_emissions), y.map(o.temperature_anomaly)),
            radius: 8.0,
            fill: palette::PURPLE,
            hover: Some(Hover {
                datum: **o,
                tooltip: tooltip::scatter(o),
                highlight: Highlight::Radius(12.0),
            }),
        });
    }
    for o in year_data {
        surface.text(&TextMark {
            role: TextRole::PointLabel,
            text: o.region.name().to_string(),
            pos: (
                x.map(o.co2_emissions),
                y.map(o.temperature_anomaly) - LABEL_LIFT,
            ),
            anchor: Anchor::Middle,
            size: 10.0,
            rotation: 0.0,
            fill: palette::INK,
        });
    }
}

fn region_series(series: &[&Observation], frame: &ChartFrame, surface: &mut dyn DrawSurface) {
    let (Some(years), Some(temps)) = (
        extent(series, |o| f64::from(o.year)),
        extent(series, |o| o.temperature_anomaly),
    ) else {
        frame.message(surface, NO_DATA_FOR_REGION);
        return;
    };

    let x = frame.x_linear(years);
    let y = frame.y_linear((temps.0 - 0.1, temps.1 + 0.1));
    frame.bottom_axis(surface, linear_ticks(&x, format_year), 0.0, "Year");
    frame.left_axis(surface, linear_ticks(&y, format_celsius), TEMPERATURE_TITLE);

    let points: Vec<_> = series
        .iter()
        .map(|o| (x.map(f64::from(o.year)), y.map(o.temperature_anomaly)))
        .collect();
    surface.line(&LineMark {
        points: points.clone(),
        curve: Curve::MonotoneX,
        stroke: palette::RED,
        width: 3.0,
    });
    for (o, center) in series.iter().zip(points) {
        surface.point(&PointMark {
            center,
            radius: 4.0,
            fill: palette::RED,
            hover: Some(Hover {
                datum: **o,
                tooltip: tooltip::time_series(o),
                highlight: Highlight::Radius(6.0),
            }),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::frame::Margin;
    use crate::render::surface::DrawList;

    #[test]
    fn empty_year_shows_message_only() {
        let frame = ChartFrame::new(960.0, 600.0, Margin::default());
        let mut list = DrawList::new();
        year_scatter(&[], &frame, &mut list);
        let texts: Vec<_> = list.texts().collect();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].role, TextRole::Message);
        assert_eq!(texts[0].text, NO_DATA_FOR_YEAR);
        assert_eq!(list.shape().axes, 0);
    }

    #[test]
    fn series_of_known_region_is_not_empty() {
        let data = crate::data::generator::generate_with(&mut rand::rng(), 1.0);
        let frame = ChartFrame::new(960.0, 600.0, Margin::default());
        let mut list = DrawList::new();
        region_series(&data.for_region(Region::Europe), &frame, &mut list);
        assert_eq!(list.shape().points, 141);
        assert_eq!(list.shape().lines, 1);
    }
}
