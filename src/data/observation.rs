use serde::Serialize;

use super::region::Region;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Observation {
    pub year: i32,
    pub region: Region,
    pub temperature_anomaly: f64,
    pub sea_level_rise: f64,
    pub extreme_events: u32,
    pub co2_emissions: f64,
}

/// In-memory collection of observations, ordered by year then region.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Observation>,
}

impl Dataset {
    pub fn new(records: Vec<Observation>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Observation] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.records.iter()
    }

    pub fn for_region(&self, region: Region) -> Vec<&Observation> {
        self.records.iter().filter(|o| o.region == region).collect()
    }

    pub fn for_year(&self, year: i32) -> Vec<&Observation> {
        self.records.iter().filter(|o| o.year == year).collect()
    }

    /// Highest-year record for `region`.
    pub fn latest(&self, region: Region) -> Option<&Observation> {
        self.records
            .iter()
            .filter(|o| o.region == region)
            .max_by_key(|o| o.year)
    }

    pub fn year_extent(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|o| o.year).min()?;
        let max = self.records.iter().map(|o| o.year).max()?;
        Some((min, max))
    }
}

impl FromIterator<Observation> for Dataset {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
