//! Paints a [`DrawList`] with egui and tracks the hovered mark.

use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::data::Observation;
use crate::render::DrawList;
use crate::render::curve;
use crate::render::surface::{
    Anchor, Annotation, Axis, AxisOrient, DrawOp, Highlight, Legend, Rgb, TextMark, palette,
};
use crate::render::tooltip::Tooltip;

const TICK_FONT: f32 = 11.0;

/// Outcome of pointer handling for one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum HoverChange {
    Unchanged,
    Entered(Observation),
    Left,
}

/// Index of the hovered op in the list, kept between frames.
#[derive(Default)]
pub struct CanvasState {
    hovered: Option<usize>,
    pub tooltip: Tooltip,
}

impl CanvasState {
    /// Forget the hovered mark, e.g. after the list was re-rendered.
    pub fn reset(&mut self) {
        self.hovered = None;
        self.tooltip.hide();
    }
}

fn color(c: Rgb) -> Color32 {
    Color32::from_rgb(c.0, c.1, c.2)
}

fn font(size: f64) -> FontId {
    FontId::proportional(size as f32)
}

fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

struct Canvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl Canvas<'_> {
    fn at(&self, p: (f64, f64)) -> Pos2 {
        self.origin + Vec2::new(p.0 as f32, p.1 as f32)
    }

    fn segment(&self, a: (f64, f64), b: (f64, f64), stroke: Stroke) {
        self.painter.line_segment([self.at(a), self.at(b)], stroke);
    }

    /// Draws `text` so that its anchor point (left, center or right edge at
    /// mid-height) lands on `pos`, rotated by `degrees` around that point.
    fn text(&self, text: &str, pos: (f64, f64), size: f64, fill: Rgb, anchor: Anchor, degrees: f64) {
        let galley = self
            .painter
            .layout_no_wrap(text.to_string(), font(size), color(fill));
        let size = galley.size();
        let local = match anchor {
            Anchor::Start => Vec2::new(0.0, size.y * 0.5),
            Anchor::Middle => Vec2::new(size.x * 0.5, size.y * 0.5),
            Anchor::End => Vec2::new(size.x, size.y * 0.5),
        };
        let angle = (degrees as f32).to_radians();
        let top_left = self.at(pos) - rotate(local, angle);
        self.painter
            .add(TextShape::new(top_left, galley, color(fill)).with_angle(angle));
    }

    fn axis(&self, axis: &Axis) {
        let stroke = Stroke::new(1.0, color(palette::AXIS));
        let (a, b) = axis.domain_segment();
        self.segment(a, b, stroke);
        let anchor = match (axis.orient, axis.label_rotation != 0.0) {
            (AxisOrient::Left, _) | (AxisOrient::Bottom, true) => Anchor::End,
            (AxisOrient::Bottom, false) => Anchor::Middle,
        };
        for tick in &axis.ticks {
            let (a, b) = axis.tick_segment(tick.pos);
            self.segment(a, b, stroke);
            let (x, mut y) = axis.label_position(tick.pos);
            if axis.orient == AxisOrient::Bottom {
                y += TICK_FONT as f64 * 0.5;
            }
            self.text(
                &tick.label,
                (x, y),
                TICK_FONT as f64,
                palette::AXIS,
                anchor,
                axis.label_rotation,
            );
        }
    }

    fn legend(&self, legend: &Legend) {
        for (row, entry) in legend.entries.iter().enumerate() {
            let (x, y) = legend.swatch_origin(row);
            let rect = Rect::from_min_max(self.at((x, y)), self.at((x + legend.swatch, y + legend.swatch)));
            self.painter.rect_filled(rect, 0.0, color(entry.color));
            self.text(
                &entry.label,
                legend.label_position(row),
                TICK_FONT as f64,
                palette::INK,
                Anchor::Start,
                0.0,
            );
        }
    }

    fn annotation(&self, note: &Annotation) {
        let style = note.style;
        let at = note.note_position();
        self.segment(
            note.anchor,
            at,
            Stroke::new(style.stroke_width as f32, color(style.stroke)),
        );
        self.painter.circle_filled(self.at(note.anchor), 3.0, color(style.fill));
        let title_size = style.font_size;
        self.text(
            &note.title,
            (at.0, at.1 - title_size * 1.6),
            title_size,
            style.text_fill,
            Anchor::Start,
            0.0,
        );
        self.text(
            &note.label,
            (at.0, at.1 - title_size * 0.6),
            style.font_size,
            style.text_fill,
            Anchor::Start,
            0.0,
        );
    }

    fn mark_text(&self, t: &TextMark) {
        self.text(&t.text, t.pos, t.size, t.fill, t.anchor, t.rotation);
    }
}

/// Allocates a `size` canvas, paints `list` and updates hover state.
pub fn show(ui: &mut Ui, size: Vec2, list: &DrawList, state: &mut CanvasState) -> HoverChange {
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = response.rect.min;
    painter.rect_filled(response.rect, 0.0, Color32::WHITE);

    let change = match response.hover_pos() {
        Some(pointer) => {
            let local = pointer - origin;
            let local = (local.x as f64, local.y as f64);
            match list.hit_test(local) {
                Some((idx, hover)) => {
                    state.tooltip.show(&hover.tooltip, local);
                    if state.hovered == Some(idx) {
                        HoverChange::Unchanged
                    } else {
                        state.hovered = Some(idx);
                        HoverChange::Entered(hover.datum)
                    }
                }
                None => leave(state),
            }
        }
        None => leave(state),
    };

    let canvas = Canvas {
        painter: &painter,
        origin,
    };
    for (idx, op) in list.ops().iter().enumerate() {
        let hovered = state.hovered == Some(idx);
        match op {
            DrawOp::Axis(axis) => canvas.axis(axis),
            DrawOp::Line(line) => {
                let pts: Vec<Pos2> = curve::flatten(&line.points, line.curve)
                    .into_iter()
                    .map(|p| canvas.at(p))
                    .collect();
                painter.add(egui::Shape::line(
                    pts,
                    Stroke::new(line.width as f32, color(line.stroke)),
                ));
            }
            DrawOp::Point(p) => {
                let (radius, fill) = match p.hover.as_ref().map(|h| h.highlight) {
                    Some(Highlight::Radius(r)) if hovered => (r, p.fill),
                    Some(Highlight::Fill(c)) if hovered => (p.radius, c),
                    _ => (p.radius, p.fill),
                };
                painter.circle_filled(canvas.at(p.center), radius as f32, color(fill));
            }
            DrawOp::Bar(b) => {
                let fill = match b.hover.as_ref().map(|h| h.highlight) {
                    Some(Highlight::Fill(c)) if hovered => c,
                    _ => b.fill,
                };
                let (a, z) = b.normalized();
                painter.rect_filled(Rect::from_min_max(canvas.at(a), canvas.at(z)), 0.0, color(fill));
            }
            DrawOp::Text(t) => canvas.mark_text(t),
            DrawOp::Legend(legend) => canvas.legend(legend),
            DrawOp::Annotation(note) => canvas.annotation(note),
        }
    }

    if let Some(view) = state.tooltip.view() {
        paint_tooltip(&painter, origin, &view.lines, view.pos);
    }
    change
}

fn leave(state: &mut CanvasState) -> HoverChange {
    state.tooltip.hide();
    if state.hovered.take().is_some() {
        HoverChange::Left
    } else {
        HoverChange::Unchanged
    }
}

fn paint_tooltip(painter: &Painter, origin: Pos2, lines: &[String], pos: (f64, f64)) {
    let text = lines.join("\n");
    let galley = painter.layout_no_wrap(text, FontId::proportional(12.0), Color32::WHITE);
    let pad = Vec2::splat(8.0);
    // Box bottom-left sits at the offset pointer position.
    let min = origin + Vec2::new(pos.0 as f32, pos.1 as f32 - galley.size().y - 2.0 * pad.y);
    let rect = Rect::from_min_size(min, galley.size() + 2.0 * pad);
    painter.rect_filled(rect, 5.0, Color32::from_black_alpha(204));
    painter.galley(rect.min + pad, galley, Color32::WHITE);
}
