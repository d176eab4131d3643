use egui::Vec2;
use tracing::*;

use crate::render::DrawList;
use crate::story::{Dispatcher, StoryText};
use crate::ui::canvas::CanvasState;
use crate::ui::windows::{self, NavView};

pub struct App {
    dispatcher: Dispatcher,
    list: DrawList,
    canvas: CanvasState,
    story: StoryText,
    nav: NavView,
    dirty: bool,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, dispatcher: Dispatcher, pixels_per_point: f32) -> Self {
        cc.egui_ctx.set_pixels_per_point(pixels_per_point);
        let story = dispatcher.story();
        let nav = NavView::from_state(dispatcher.state());
        info!(scene = %dispatcher.state().scene, "viewer started");
        Self {
            dispatcher,
            list: DrawList::new(),
            canvas: CanvasState::default(),
            story,
            nav,
            dirty: true,
        }
    }

    fn apply(&mut self, pending: windows::Pending) {
        for action in pending {
            let effects = self.dispatcher.dispatch(action);
            self.nav.apply(&effects);
            if let Some(story) = effects.story {
                self.story = story;
            }
            if effects.rerender {
                self.dirty = true;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.dirty {
            self.dispatcher.render_logged(&mut self.list);
            self.canvas.reset();
            self.dirty = false;
        }

        let frame = *self.dispatcher.frame();
        let size = Vec2::new(frame.width as f32, frame.height as f32);
        let mut pending = windows::Pending::new();

        windows::nav_bar(ctx, &self.nav, self.dispatcher.state(), &mut pending);
        windows::status_bar(ctx, self.dispatcher.state());
        windows::story_panel(ctx, &self.story);
        windows::chart(ctx, size, &self.list, &mut self.canvas, &mut pending);

        if !pending.is_empty() {
            self.apply(pending);
            ctx.request_repaint();
        }
    }
}
