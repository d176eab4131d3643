use crate::data::{Dataset, Region};
use crate::render::annotations;
use crate::render::error::RenderError;
use crate::render::frame::{ChartFrame, format_celsius, format_year, linear_ticks};
use crate::render::scale::extent;
use crate::render::surface::{Curve, DrawSurface, Highlight, Hover, LineMark, PointMark, palette};
use crate::render::tooltip;
use crate::story::state::NarrativeState;

use super::{SceneRenderer, TEMPERATURE_TITLE};

const Y_DOMAIN: (f64, f64) = (-0.5, 1.2);

/// Global anomaly over time with baseline and acceleration callouts.
pub struct OverviewScene;

impl SceneRenderer for OverviewScene {
    fn render(
        &self,
        data: &Dataset,
        _state: &NarrativeState,
        frame: &ChartFrame,
        surface: &mut dyn DrawSurface,
    ) -> Result<(), RenderError> {
        let global = data.for_region(Region::Global);
        let years = extent(&global, |o| f64::from(o.year))
            .ok_or(RenderError::MissingRegion(Region::Global))?;

        let x = frame.x_linear(years);
        let y = frame.y_linear(Y_DOMAIN);
        frame.bottom_axis(surface, linear_ticks(&x, format_year), 0.0, "Year");
        frame.left_axis(surface, linear_ticks(&y, format_celsius), TEMPERATURE_TITLE);

        let points: Vec<_> = global
            .iter()
            .map(|o| (x.map(f64::from(o.year)), y.map(o.temperature_anomaly)))
            .collect();
        surface.line(&LineMark {
            points: points.clone(),
            curve: Curve::MonotoneX,
            stroke: palette::RED,
            width: 3.0,
        });
        for (o, center) in global.iter().zip(points) {
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

        for note in annotations::overview(&global, &x, &y)? {
            surface.annotation(&note);
        }
        Ok(())
    }
}
