pub mod annotations;
pub mod curve;
pub mod error;
pub mod frame;
pub mod scale;
pub mod scenes;
pub mod surface;
pub mod tooltip;

pub use error::RenderError;
pub use frame::{ChartFrame, Margin};
pub use surface::{ChartShape, DrawList, DrawSurface};
