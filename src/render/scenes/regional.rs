use crate::data::{Dataset, Region};
use crate::render::annotations;
use crate::render::error::RenderError;
use crate::render::frame::{ChartFrame, band_ticks, format_celsius, linear_ticks};
use crate::render::surface::{BarMark, DrawSurface, Highlight, Hover, palette};
use crate::render::tooltip;
use crate::story::state::NarrativeState;

use super::{SceneRenderer, TEMPERATURE_TITLE};

const BAND_PADDING: f64 = 0.3;
const HEADROOM: f64 = 1.2;
const TICK_ROTATION: f64 = -45.0;

/// Latest anomaly per continent as bars, with the hottest one called out.
pub struct RegionalScene;

impl SceneRenderer for RegionalScene {
    fn render(
        &self,
        data: &Dataset,
        _state: &NarrativeState,
        frame: &ChartFrame,
        surface: &mut dyn DrawSurface,
    ) -> Result<(), RenderError> {
        let latest: Vec<_> = Region::NON_GLOBAL
            .iter()
            .filter_map(|&region| data.latest(region))
            .collect();
        let max = latest
            .iter()
            .map(|o| o.temperature_anomaly)
            .reduce(f64::max)
            .ok_or(RenderError::NoLatestValues)?;

        let x = frame.x_band(&Region::NON_GLOBAL, BAND_PADDING);
        let y = frame.y_linear((0.0, max * HEADROOM));

        frame.bottom_axis(
            surface,
            band_ticks(&x, &Region::NON_GLOBAL, |r| r.name().to_string()),
            TICK_ROTATION,
            "Region",
        );
        frame.left_axis(surface, linear_ticks(&y, format_celsius), TEMPERATURE_TITLE);

        for o in &latest {
            let Some(left) = x.position(&o.region) else {
                continue;
            };
            let top = y.map(o.temperature_anomaly);
            surface.bar(&BarMark {
                x: left,
                y: top,
                width: x.bandwidth(),
                height: frame.bottom() - top,
                fill: palette::BLUE,
                hover: Some(Hover {
                    datum: **o,
                    tooltip: tooltip::regional_stats(o),
                    highlight: Highlight::Fill(palette::RED),
                }),
            });
        }

        for note in annotations::regional(&latest, &x, &y)? {
            surface.annotation(&note);
        }
        Ok(())
    }
}
