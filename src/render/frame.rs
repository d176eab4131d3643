use serde::{Deserialize, Serialize};

use super::scale::{BandScale, LinearScale};
use super::surface::{Anchor, Axis, AxisOrient, DrawSurface, TextMark, TextRole, Tick, palette};

const DEFAULT_TICK_COUNT: usize = 10;
const AXIS_TITLE_OFFSET: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 60.0,
            right: 80.0,
            bottom: 80.0,
            left: 80.0,
        }
    }
}

/// Canvas size and margins; gives every scene its plotting rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl ChartFrame {
    pub fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    pub fn left(&self) -> f64 {
        self.margin.left
    }

    pub fn right(&self) -> f64 {
        self.margin.left + self.inner_width()
    }

    pub fn top(&self) -> f64 {
        self.margin.top
    }

    pub fn bottom(&self) -> f64 {
        self.margin.top + self.inner_height()
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.left(), self.right())
    }

    /// Bottom to top, so larger values sit higher.
    pub fn y_range(&self) -> (f64, f64) {
        (self.bottom(), self.top())
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.left() + self.inner_width() / 2.0,
            self.top() + self.inner_height() / 2.0,
        )
    }

    pub fn x_linear(&self, domain: (f64, f64)) -> LinearScale {
        LinearScale::new(domain, self.x_range())
    }

    pub fn y_linear(&self, domain: (f64, f64)) -> LinearScale {
        LinearScale::new(domain, self.y_range())
    }

    pub fn x_band<K: PartialEq + Clone>(&self, keys: &[K], padding: f64) -> BandScale<K> {
        BandScale::new(keys, self.x_range(), padding)
    }

    pub fn bottom_axis(
        &self,
        surface: &mut dyn DrawSurface,
        ticks: Vec<Tick>,
        label_rotation: f64,
        title: &str,
    ) {
        surface.axis(&Axis {
            orient: AxisOrient::Bottom,
            baseline: self.bottom(),
            span: self.x_range(),
            ticks,
            label_rotation,
        });
        surface.text(&axis_title(
            title,
            (self.center().0, self.bottom() + AXIS_TITLE_OFFSET),
            0.0,
        ));
    }

    pub fn left_axis(&self, surface: &mut dyn DrawSurface, ticks: Vec<Tick>, title: &str) {
        surface.axis(&Axis {
            orient: AxisOrient::Left,
            baseline: self.left(),
            span: (self.bottom(), self.top()),
            ticks,
            label_rotation: 0.0,
        });
        surface.text(&axis_title(
            title,
            (self.left() - AXIS_TITLE_OFFSET, self.center().1),
            -90.0,
        ));
    }

    pub fn message(&self, surface: &mut dyn DrawSurface, text: &str) {
        surface.text(&TextMark {
            role: TextRole::Message,
            text: text.to_string(),
            pos: self.center(),
            anchor: Anchor::Middle,
            size: 14.0,
            rotation: 0.0,
            fill: palette::INK,
        });
    }
}

fn axis_title(text: &str, pos: (f64, f64), rotation: f64) -> TextMark {
    TextMark {
        role: TextRole::AxisTitle,
        text: text.to_string(),
        pos,
        anchor: Anchor::Middle,
        size: 14.0,
        rotation,
        fill: palette::INK,
    }
}

pub fn linear_ticks(scale: &LinearScale, format: impl Fn(f64) -> String) -> Vec<Tick> {
    scale
        .ticks(DEFAULT_TICK_COUNT)
        .into_iter()
        .map(|v| Tick {
            pos: scale.map(v),
            label: format(v),
        })
        .collect()
}

pub fn band_ticks<K: PartialEq + Clone>(
    scale: &BandScale<K>,
    keys: &[K],
    label: impl Fn(&K) -> String,
) -> Vec<Tick> {
    keys.iter()
        .filter_map(|k| {
            scale.center(k).map(|pos| Tick {
                pos,
                label: label(k),
            })
        })
        .collect()
}

pub fn format_year(v: f64) -> String {
    format!("{}", v.round() as i64)
}

pub fn format_celsius(v: f64) -> String {
    format!("{v}°C")
}

pub fn format_plain(v: f64) -> String {
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::DrawList;

    #[test]
    fn default_frame_geometry() {
        let f = ChartFrame::new(960.0, 600.0, Margin::default());
        assert_eq!(f.inner_width(), 800.0);
        assert_eq!(f.inner_height(), 460.0);
        assert_eq!(f.x_range(), (80.0, 880.0));
        assert_eq!(f.y_range(), (520.0, 60.0));
        assert_eq!(f.center(), (480.0, 290.0));
    }

    #[test]
    fn axes_come_with_titles() {
        let f = ChartFrame::new(960.0, 600.0, Margin::default());
        let mut list = DrawList::new();
        let x = f.x_linear((1880.0, 2020.0));
        f.bottom_axis(&mut list, linear_ticks(&x, format_year), 0.0, "Year");
        let y = f.y_linear((-0.5, 1.2));
        f.left_axis(&mut list, linear_ticks(&y, format_celsius), "Temperature Anomaly (°C)");
        let shape = list.shape();
        assert_eq!(shape.axes, 2);
        assert_eq!(shape.texts, 2);
        let labels: Vec<_> = list.axes().flat_map(|a| a.ticks.iter()).collect();
        assert!(labels.iter().any(|t| t.label == "1950"));
        assert!(labels.iter().any(|t| t.label == "0.2°C"));
    }

    #[test]
    fn degenerate_frames_clamp_to_zero() {
        let f = ChartFrame::new(100.0, 50.0, Margin::default());
        assert_eq!(f.inner_width(), 0.0);
        assert_eq!(f.inner_height(), 0.0);
    }
}
