//! Declarative drawing primitives and the surfaces that consume them.
//!
//! Coordinates are canvas pixels with the origin at the top-left corner.

use crate::data::Observation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(v: u32) -> Self {
        Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub mod palette {
    use super::Rgb;

    pub const RED: Rgb = Rgb::hex(0xe74c3c);
    pub const DARK_RED: Rgb = Rgb::hex(0xc0392b);
    pub const BLUE: Rgb = Rgb::hex(0x3498db);
    pub const DARK_BLUE: Rgb = Rgb::hex(0x2980b9);
    pub const ORANGE: Rgb = Rgb::hex(0xf39c12);
    pub const DARK_ORANGE: Rgb = Rgb::hex(0xe67e22);
    pub const PURPLE: Rgb = Rgb::hex(0x9b59b6);
    pub const INK: Rgb = Rgb::hex(0x2c3e50);
    pub const AXIS: Rgb = Rgb::hex(0x333333);
}

pub type Point = (f64, f64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub pos: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    /// y of a bottom axis, x of a left axis.
    pub baseline: f64,
    pub span: (f64, f64),
    pub ticks: Vec<Tick>,
    /// Tick label rotation in degrees, counter-clockwise negative.
    pub label_rotation: f64,
}

impl Axis {
    pub const TICK_SIZE: f64 = 6.0;
    pub const TICK_PADDING: f64 = 3.0;

    /// Tick mark end points for a tick at `pos`.
    pub fn tick_segment(&self, pos: f64) -> (Point, Point) {
        match self.orient {
            AxisOrient::Bottom => ((pos, self.baseline), (pos, self.baseline + Self::TICK_SIZE)),
            AxisOrient::Left => ((self.baseline - Self::TICK_SIZE, pos), (self.baseline, pos)),
        }
    }

    pub fn domain_segment(&self) -> (Point, Point) {
        match self.orient {
            AxisOrient::Bottom => ((self.span.0, self.baseline), (self.span.1, self.baseline)),
            AxisOrient::Left => ((self.baseline, self.span.0), (self.baseline, self.span.1)),
        }
    }

    /// Where a tick label is anchored.
    pub fn label_position(&self, pos: f64) -> Point {
        let offset = Self::TICK_SIZE + Self::TICK_PADDING;
        match self.orient {
            AxisOrient::Bottom => (pos, self.baseline + offset),
            AxisOrient::Left => (self.baseline - offset, pos),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    Linear,
    MonotoneX,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineMark {
    pub points: Vec<Point>,
    pub curve: Curve,
    pub stroke: Rgb,
    pub width: f64,
}

/// How a mark changes while the pointer is over it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Highlight {
    Radius(f64),
    Fill(Rgb),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hover {
    pub datum: Observation,
    pub tooltip: Vec<String>,
    pub highlight: Highlight,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointMark {
    pub center: Point,
    pub radius: f64,
    pub fill: Rgb,
    pub hover: Option<Hover>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarMark {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
    pub hover: Option<Hover>,
}

impl BarMark {
    /// Rectangle with non-negative extent, whatever the sign of `height`.
    pub fn normalized(&self) -> (Point, Point) {
        let (y0, y1) = if self.height >= 0.0 {
            (self.y, self.y + self.height)
        } else {
            (self.y + self.height, self.y)
        };
        ((self.x, y0), (self.x + self.width, y1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    AxisTitle,
    PointLabel,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    pub role: TextRole,
    pub text: String,
    pub pos: Point,
    pub anchor: Anchor,
    pub size: f64,
    pub rotation: f64,
    pub fill: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub origin: Point,
    pub swatch: f64,
    pub row_pitch: f64,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    const LABEL_GAP: f64 = 5.0;

    /// Top-left corner of the swatch in row `row`.
    pub fn swatch_origin(&self, row: usize) -> Point {
        (self.origin.0, self.origin.1 + self.row_pitch * row as f64)
    }

    /// Left-middle anchor of the label in row `row`.
    pub fn label_position(&self, row: usize) -> Point {
        let (x, y) = self.swatch_origin(row);
        (x + self.swatch + Self::LABEL_GAP, y + self.swatch * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotationStyle {
    pub fill: Rgb,
    pub stroke: Rgb,
    pub stroke_width: f64,
    pub font_size: f64,
    pub bold: bool,
    pub text_fill: Rgb,
}

impl AnnotationStyle {
    pub const GLOBAL: Self = Self {
        fill: palette::RED,
        stroke: palette::DARK_RED,
        stroke_width: 2.0,
        font_size: 12.0,
        bold: false,
        text_fill: palette::INK,
    };

    pub const REGIONAL: Self = Self {
        fill: palette::BLUE,
        stroke: palette::DARK_BLUE,
        stroke_width: 2.0,
        font_size: 11.0,
        bold: false,
        text_fill: palette::INK,
    };

    pub const HIGHLIGHT: Self = Self {
        fill: palette::ORANGE,
        stroke: palette::DARK_ORANGE,
        stroke_width: 3.0,
        font_size: 14.0,
        bold: true,
        text_fill: palette::RED,
    };
}

#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub title: String,
    pub label: String,
    pub anchor: Point,
    pub dx: f64,
    pub dy: f64,
    pub style: AnnotationStyle,
}

impl Annotation {
    pub fn note_position(&self) -> Point {
        (self.anchor.0 + self.dx, self.anchor.1 + self.dy)
    }
}

pub trait DrawSurface {
    fn clear(&mut self);
    fn axis(&mut self, axis: &Axis);
    fn line(&mut self, line: &LineMark);
    fn point(&mut self, point: &PointMark);
    fn bar(&mut self, bar: &BarMark);
    fn text(&mut self, text: &TextMark);
    fn legend(&mut self, legend: &Legend);
    fn annotation(&mut self, annotation: &Annotation);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Axis(Axis),
    Line(LineMark),
    Point(PointMark),
    Bar(BarMark),
    Text(TextMark),
    Legend(Legend),
    Annotation(Annotation),
}

/// Mark and decoration counts of a rendered chart, independent of values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartShape {
    pub axes: usize,
    pub lines: usize,
    pub points: usize,
    pub bars: usize,
    pub texts: usize,
    pub legends: usize,
    pub annotations: usize,
}

/// Retained surface: records every primitive in draw order.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &PointMark> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Point(p) => Some(p),
            _ => None,
        })
    }

    pub fn bars(&self) -> impl Iterator<Item = &BarMark> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Bar(b) => Some(b),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineMark> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line(l) => Some(l),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextMark> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Axis(a) => Some(a),
            _ => None,
        })
    }

    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Annotation(a) => Some(a),
            _ => None,
        })
    }

    pub fn shape(&self) -> ChartShape {
        let mut shape = ChartShape::default();
        for op in &self.ops {
            match op {
                DrawOp::Axis(_) => shape.axes += 1,
                DrawOp::Line(_) => shape.lines += 1,
                DrawOp::Point(_) => shape.points += 1,
                DrawOp::Bar(_) => shape.bars += 1,
                DrawOp::Text(_) => shape.texts += 1,
                DrawOp::Legend(_) => shape.legends += 1,
                DrawOp::Annotation(_) => shape.annotations += 1,
            }
        }
        shape
    }

    /// Topmost hoverable mark under `pos`; points get a small grace margin.
    pub fn hit_test(&self, pos: Point) -> Option<(usize, &Hover)> {
        const POINT_SLOP: f64 = 2.0;
        self.ops
            .iter()
            .enumerate()
            .rev()
            .find_map(|(idx, op)| match op {
                DrawOp::Point(p) => {
                    let hover = p.hover.as_ref()?;
                    let dx = pos.0 - p.center.0;
                    let dy = pos.1 - p.center.1;
                    let r = p.radius + POINT_SLOP;
                    (dx * dx + dy * dy <= r * r).then_some((idx, hover))
                }
                DrawOp::Bar(b) => {
                    let hover = b.hover.as_ref()?;
                    let ((x0, y0), (x1, y1)) = b.normalized();
                    (pos.0 >= x0 && pos.0 <= x1 && pos.1 >= y0 && pos.1 <= y1)
                        .then_some((idx, hover))
                }
                _ => None,
            })
    }
}

impl DrawSurface for DrawList {
    fn clear(&mut self) {
        self.ops.clear();
    }

    fn axis(&mut self, axis: &Axis) {
        self.ops.push(DrawOp::Axis(axis.clone()));
    }

    fn line(&mut self, line: &LineMark) {
        self.ops.push(DrawOp::Line(line.clone()));
    }

    fn point(&mut self, point: &PointMark) {
        self.ops.push(DrawOp::Point(point.clone()));
    }

    fn bar(&mut self, bar: &BarMark) {
        self.ops.push(DrawOp::Bar(bar.clone()));
    }

    fn text(&mut self, text: &TextMark) {
        self.ops.push(DrawOp::Text(text.clone()));
    }

    fn legend(&mut self, legend: &Legend) {
        self.ops.push(DrawOp::Legend(legend.clone()));
    }

    fn annotation(&mut self, annotation: &Annotation) {
        self.ops.push(DrawOp::Annotation(annotation.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Region;

    fn datum() -> Observation {
        Observation {
            year: 2000,
            region: Region::Europe,
            temperature_anomaly: 0.5,
            sea_level_rise: 12.0,
            extreme_events: 3,
            co2_emissions: 280.0,
        }
    }

    #[test]
    fn hex_colors_decode() {
        assert_eq!(palette::RED, Rgb(0xe7, 0x4c, 0x3c));
        assert_eq!(palette::PURPLE.to_hex_string(), "#9b59b6");
    }

    #[test]
    fn hit_test_prefers_topmost_mark() {
        let mut list = DrawList::new();
        let hover = Hover {
            datum: datum(),
            tooltip: vec!["a".into()],
            highlight: Highlight::Radius(6.0),
        };
        list.bar(&BarMark {
            x: 0.0,
            y: 0.0,
            width: 20.0,
            height: 20.0,
            fill: palette::BLUE,
            hover: Some(hover.clone()),
        });
        list.point(&PointMark {
            center: (10.0, 10.0),
            radius: 4.0,
            fill: palette::RED,
            hover: Some(hover),
        });
        assert_eq!(list.hit_test((10.0, 10.0)).map(|(i, _)| i), Some(1));
        assert_eq!(list.hit_test((1.0, 19.0)).map(|(i, _)| i), Some(0));
        assert!(list.hit_test((50.0, 50.0)).is_none());
    }

    #[test]
    fn negative_bars_normalize() {
        let bar = BarMark {
            x: 5.0,
            y: 100.0,
            width: 10.0,
            height: -30.0,
            fill: palette::BLUE,
            hover: None,
        };
        assert_eq!(bar.normalized(), ((5.0, 70.0), (15.0, 100.0)));
    }

    #[test]
    fn clear_drops_everything() {
        let mut list = DrawList::new();
        list.text(&TextMark {
            role: TextRole::Message,
            text: "x".into(),
            pos: (0.0, 0.0),
            anchor: Anchor::Middle,
            size: 12.0,
            rotation: 0.0,
            fill: palette::INK,
        });
        assert_eq!(list.shape().texts, 1);
        list.clear();
        assert!(list.is_empty());
    }
}
