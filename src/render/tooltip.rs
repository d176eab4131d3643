use crate::data::Observation;

use super::surface::Point;

/// Pixel offset of the tooltip box from the pointer.
pub const OFFSET: Point = (10.0, -10.0);

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipView {
    pub lines: Vec<String>,
    pub pos: Point,
}

/// The single shared tooltip. The last `show` wins.
#[derive(Clone, Debug, Default)]
pub struct Tooltip {
    view: Option<TooltipView>,
}

impl Tooltip {
    pub fn show(&mut self, lines: &[String], pointer: Point) {
        self.view = Some(TooltipView {
            lines: lines.to_vec(),
            pos: (pointer.0 + OFFSET.0, pointer.1 + OFFSET.1),
        });
    }

    pub fn hide(&mut self) {
        self.view = None;
    }

    pub fn view(&self) -> Option<&TooltipView> {
        self.view.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.view.is_some()
    }
}

fn temp(o: &Observation) -> String {
    format!("Temperature: {:.2}°C", o.temperature_anomaly)
}

fn sea(o: &Observation) -> String {
    format!("Sea Level: {:.1}mm", o.sea_level_rise)
}

pub fn time_series(o: &Observation) -> Vec<String> {
    vec![
        format!("Year: {}", o.year),
        temp(o),
        sea(o),
        format!("Extreme Events: {}", o.extreme_events),
    ]
}

pub fn regional_stats(o: &Observation) -> Vec<String> {
    vec![
        o.region.name().to_string(),
        temp(o),
        format!("Sea Level Rise: {:.1}mm", o.sea_level_rise),
        format!("Extreme Events: {}", o.extreme_events),
        format!("CO2 Emissions: {:.0} ppm", o.co2_emissions),
    ]
}

pub fn scatter(o: &Observation) -> Vec<String> {
    vec![
        o.region.name().to_string(),
        format!("Year: {}", o.year),
        temp(o),
        format!("CO2: {:.0} ppm", o.co2_emissions),
        sea(o),
    ]
}
