mod interactive;
mod overview;
mod regional;
mod temperature;

pub use interactive::{InteractiveScene, NO_DATA_FOR_REGION, NO_DATA_FOR_YEAR};
pub use overview::OverviewScene;
pub use regional::RegionalScene;
pub use temperature::TemperatureScene;

use crate::data::Dataset;
use crate::story::state::NarrativeState;

use super::error::RenderError;
use super::frame::ChartFrame;
use super::surface::DrawSurface;

pub const TEMPERATURE_TITLE: &str = "Temperature Anomaly (°C)";

/// One chart preset. Implementations read the state snapshot and never change it.
pub trait SceneRenderer: Sync {
    fn render(
        &self,
        data: &Dataset,
        state: &NarrativeState,
        frame: &ChartFrame,
        surface: &mut dyn DrawSurface,
    ) -> Result<(), RenderError>;
}
