use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Global,
    #[serde(rename = "North America")]
    NorthAmerica,
    Europe,
    Asia,
    Africa,
    #[serde(rename = "South America")]
    SouthAmerica,
    Australia,
}

/// Starting values a region's trends grow from in 1880.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Baseline {
    pub temp: f64,
    pub sea: f64,
    pub events: i64,
    pub co2: f64,
}

impl Region {
    /// Fixed region order; the dataset and every per-region chart follow it.
    pub const ALL: [Region; 7] = [
        Region::Global,
        Region::NorthAmerica,
        Region::Europe,
        Region::Asia,
        Region::Africa,
        Region::SouthAmerica,
        Region::Australia,
    ];

    pub const NON_GLOBAL: [Region; 6] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::Asia,
        Region::Africa,
        Region::SouthAmerica,
        Region::Australia,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::Global => "Global",
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Africa => "Africa",
            Region::SouthAmerica => "South America",
            Region::Australia => "Australia",
        }
    }

    pub fn baseline(self) -> Baseline {
        let (temp, events, co2) = match self {
            Region::Global => (-0.1, 2, 280.0),
            Region::NorthAmerica => (-0.12, 1, 45.0),
            Region::Europe => (-0.08, 1, 40.0),
            Region::Asia => (-0.15, 2, 50.0),
            Region::Africa => (-0.05, 1, 15.0),
            Region::SouthAmerica => (-0.1, 1, 20.0),
            Region::Australia => (-0.12, 1, 10.0),
        };
        Baseline {
            temp,
            sea: 0.0,
            events,
            co2,
        }
    }

    pub fn is_global(self) -> bool {
        self == Region::Global
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region '{0}'")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.name() == trimmed)
            .ok_or_else(|| UnknownRegion(trimmed.to_string()))
    }
}

/// What the region control currently holds.
///
/// The control hands over plain names, so a value outside the fixed set is kept
/// as-is and simply matches no observations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionSelection {
    Known(Region),
    Other(String),
}

impl RegionSelection {
    pub fn parse(name: &str) -> Self {
        match name.parse::<Region>() {
            Ok(region) => RegionSelection::Known(region),
            Err(UnknownRegion(other)) => RegionSelection::Other(other),
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, RegionSelection::Known(Region::Global))
    }

    pub fn region(&self) -> Option<Region> {
        match self {
            RegionSelection::Known(region) => Some(*region),
            RegionSelection::Other(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RegionSelection::Known(region) => region.name(),
            RegionSelection::Other(name) => name,
        }
    }
}

impl Default for RegionSelection {
    fn default() -> Self {
        RegionSelection::Known(Region::Global)
    }
}

impl From<Region> for RegionSelection {
    fn from(region: Region) -> Self {
        RegionSelection::Known(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for region in Region::ALL {
            assert_eq!(region.name().parse::<Region>(), Ok(region));
        }
        assert!("north america".parse::<Region>().is_err());
        assert_eq!(
            RegionSelection::parse("north america"),
            RegionSelection::Other("north america".into())
        );
    }

    #[test]
    fn unknown_region_error_names_the_input() {
        let err = "Atlantis".parse::<Region>().unwrap_err();
        assert_eq!(err, UnknownRegion("Atlantis".into()));
        assert_eq!(err.to_string(), "unknown region 'Atlantis'");
    }

    #[test]
    fn unknown_names_are_kept_verbatim() {
        let sel = RegionSelection::parse("Antarctica");
        assert_eq!(sel, RegionSelection::Other("Antarctica".into()));
        assert_eq!(sel.label(), "Antarctica");
        assert!(sel.region().is_none());
        assert!(!sel.is_global());
    }

    #[test]
    fn non_global_excludes_only_global() {
        assert_eq!(Region::NON_GLOBAL.len(), Region::ALL.len() - 1);
        assert!(Region::NON_GLOBAL.iter().all(|r| !r.is_global()));
    }
}
