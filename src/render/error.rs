use thiserror::Error;

use crate::data::Region;

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("no {region} observation for {year}")]
    MissingObservation { region: Region, year: i32 },

    #[error("no observations for region {0}")]
    MissingRegion(Region),

    #[error("nothing to compare: no latest observations")]
    NoLatestValues,
}
