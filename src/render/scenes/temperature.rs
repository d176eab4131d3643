use crate::data::{Dataset, Region, YEAR_END, YEAR_START};
use crate::render::annotations;
use crate::render::error::RenderError;
use crate::render::frame::{ChartFrame, format_celsius, format_year, linear_ticks};
use crate::render::scale::{CATEGORY10, OrdinalColors};
use crate::render::surface::{Curve, DrawSurface, Legend, LegendEntry, LineMark};
use crate::story::state::NarrativeState;

use super::{SceneRenderer, TEMPERATURE_TITLE};

const Y_DOMAIN: (f64, f64) = (-0.5, 1.5);
const LEGEND_GAP: f64 = 20.0;

/// One coloured anomaly line per continent on shared axes.
pub struct TemperatureScene;

impl SceneRenderer for TemperatureScene {
    fn render(
        &self,
        data: &Dataset,
        _state: &NarrativeState,
        frame: &ChartFrame,
        surface: &mut dyn DrawSurface,
    ) -> Result<(), RenderError> {
        let x = frame.x_linear((f64::from(YEAR_START), f64::from(YEAR_END)));
        let y = frame.y_linear(Y_DOMAIN);
        let colors = OrdinalColors::new(&Region::NON_GLOBAL, &CATEGORY10);

        frame.bottom_axis(surface, linear_ticks(&x, format_year), 0.0, "Year");
        frame.left_axis(surface, linear_ticks(&y, format_celsius), TEMPERATURE_TITLE);

        let series: Vec<_> = Region::NON_GLOBAL
            .iter()
            .map(|&region| (region, data.for_region(region)))
            .collect();

        for (region, obs) in &series {
            surface.line(&LineMark {
                points: obs
                    .iter()
                    .map(|o| (x.map(f64::from(o.year)), y.map(o.temperature_anomaly)))
                    .collect(),
                curve: Curve::MonotoneX,
                stroke: colors.color(region),
                width: 2.0,
            });
        }

        surface.legend(&Legend {
            origin: (frame.right() + LEGEND_GAP, frame.top()),
            swatch: 15.0,
            row_pitch: 25.0,
            entries: series
                .iter()
                .map(|(region, _)| LegendEntry {
                    label: region.name().to_string(),
                    color: colors.color(region),
                })
                .collect(),
        });

        let asia = series
            .iter()
            .find(|(region, _)| *region == Region::Asia)
            .map(|(_, obs)| obs.as_slice())
            .unwrap_or_default();
        for note in annotations::temperature(asia, &x, &y)? {
            surface.annotation(&note);
        }
        Ok(())
    }
}
