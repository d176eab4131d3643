use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontStyle, FontTransform};
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::render::curve;
use crate::render::surface::{
    Anchor, Annotation, Axis, AxisOrient, BarMark, DrawSurface, Legend, LineMark, PointMark, Rgb,
    TextMark, palette,
};

use super::ExportError;

const FONT: &str = "sans-serif";
const TICK_FONT_SIZE: f64 = 11.0;

fn px(p: (f64, f64)) -> (i32, i32) {
    (p.0.round() as i32, p.1.round() as i32)
}

fn color(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

fn stroke(c: Rgb, width: f64) -> ShapeStyle {
    color(c).stroke_width(width.round().max(1.0) as u32)
}

fn hpos(anchor: Anchor) -> HPos {
    match anchor {
        Anchor::Start => HPos::Left,
        Anchor::Middle => HPos::Center,
        Anchor::End => HPos::Right,
    }
}

#[derive(Clone, Copy)]
struct LabelStyle {
    size: f64,
    fill: Rgb,
    anchor: Pos,
    rotation: f64,
    bold: bool,
}

impl LabelStyle {
    fn plain(size: f64, fill: Rgb, anchor: Pos) -> Self {
        Self {
            size,
            fill,
            anchor,
            rotation: 0.0,
            bold: false,
        }
    }
}

/// SVG output through plotters. Only right-angle text rotations are
/// representable; other angles are drawn horizontally, right-aligned.
pub struct SvgSurface<'a> {
    area: DrawingArea<SVGBackend<'a>, Shift>,
    error: Option<String>,
}

impl<'a> SvgSurface<'a> {
    pub fn new(buffer: &'a mut String, size: (u32, u32)) -> Self {
        Self {
            area: SVGBackend::with_string(buffer, size).into_drawing_area(),
            error: None,
        }
    }

    /// Flushes the document; reports the first drawing failure, if any.
    pub fn finish(self) -> Result<(), ExportError> {
        if let Some(msg) = self.error {
            return Err(ExportError::Draw(msg));
        }
        self.area
            .present()
            .map_err(|e| ExportError::Draw(e.to_string()))
    }

    fn record<E: std::fmt::Display>(&mut self, result: Result<(), E>) {
        if let Err(e) = result {
            self.error.get_or_insert_with(|| e.to_string());
        }
    }

    fn segment(&mut self, a: (f64, f64), b: (f64, f64), style: ShapeStyle) {
        let r = self.area.draw(&PathElement::new(vec![px(a), px(b)], style));
        self.record(r);
    }

    fn label(&mut self, text: &str, pos: (f64, f64), label: LabelStyle) {
        let mut font = (FONT, label.size).into_font();
        if label.bold {
            font = font.style(FontStyle::Bold);
        }
        let (font, anchor) = if (label.rotation + 90.0).abs() < 1e-6 {
            (font.transform(FontTransform::Rotate270), label.anchor)
        } else if label.rotation != 0.0 {
            (font, Pos::new(HPos::Right, label.anchor.v_pos))
        } else {
            (font, label.anchor)
        };
        let style = font.color(&color(label.fill)).pos(anchor);
        let r = self.area.draw(&Text::new(text.to_string(), px(pos), style));
        self.record(r);
    }
}

impl DrawSurface for SvgSurface<'_> {
    fn clear(&mut self) {
        let r = self.area.fill(&WHITE);
        self.record(r);
    }

    fn axis(&mut self, axis: &Axis) {
        let style = stroke(palette::AXIS, 1.0);
        let (a, b) = axis.domain_segment();
        self.segment(a, b, style);
        let anchor = match axis.orient {
            AxisOrient::Bottom => Pos::new(HPos::Center, VPos::Top),
            AxisOrient::Left => Pos::new(HPos::Right, VPos::Center),
        };
        for tick in &axis.ticks {
            let (a, b) = axis.tick_segment(tick.pos);
            self.segment(a, b, style);
            self.label(
                &tick.label,
                axis.label_position(tick.pos),
                LabelStyle {
                    rotation: axis.label_rotation,
                    ..LabelStyle::plain(TICK_FONT_SIZE, palette::AXIS, anchor)
                },
            );
        }
    }

    fn line(&mut self, line: &LineMark) {
        let pts: Vec<_> = curve::flatten(&line.points, line.curve)
            .into_iter()
            .map(px)
            .collect();
        if pts.len() < 2 {
            return;
        }
        let r = self
            .area
            .draw(&PathElement::new(pts, stroke(line.stroke, line.width)));
        self.record(r);
    }

    fn point(&mut self, point: &PointMark) {
        let r = self.area.draw(&Circle::new(
            px(point.center),
            point.radius.round() as i32,
            color(point.fill).filled(),
        ));
        self.record(r);
    }

    fn bar(&mut self, bar: &BarMark) {
        let (a, b) = bar.normalized();
        let r = self
            .area
            .draw(&Rectangle::new([px(a), px(b)], color(bar.fill).filled()));
        self.record(r);
    }

    fn text(&mut self, text: &TextMark) {
        self.label(
            &text.text,
            text.pos,
            LabelStyle {
                rotation: text.rotation,
                ..LabelStyle::plain(
                    text.size,
                    text.fill,
                    Pos::new(hpos(text.anchor), VPos::Center),
                )
            },
        );
    }

    fn legend(&mut self, legend: &Legend) {
        for (row, entry) in legend.entries.iter().enumerate() {
            let (x, y) = legend.swatch_origin(row);
            let r = self.area.draw(&Rectangle::new(
                [px((x, y)), px((x + legend.swatch, y + legend.swatch))],
                color(entry.color).filled(),
            ));
            self.record(r);
            self.label(
                &entry.label,
                legend.label_position(row),
                LabelStyle::plain(
                    TICK_FONT_SIZE,
                    palette::INK,
                    Pos::new(HPos::Left, VPos::Center),
                ),
            );
        }
    }

    fn annotation(&mut self, note: &Annotation) {
        let style = note.style;
        let at = note.note_position();
        self.segment(note.anchor, at, stroke(style.stroke, style.stroke_width));
        let r = self.area.draw(&Circle::new(
            px(note.anchor),
            3,
            color(style.fill).filled(),
        ));
        self.record(r);
        let text = LabelStyle::plain(
            style.font_size,
            style.text_fill,
            Pos::new(HPos::Left, VPos::Bottom),
        );
        self.label(
            &note.title,
            (at.0, at.1 - style.font_size * 1.2),
            LabelStyle { bold: true, ..text },
        );
        self.label(
            &note.label,
            (at.0, at.1 - 2.0),
            LabelStyle {
                bold: style.bold,
                ..text
            },
        );
    }
}
