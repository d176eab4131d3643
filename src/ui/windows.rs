use egui::{CentralPanel, ComboBox, RichText, ScrollArea, SidePanel, Slider, TopBottomPanel, Vec2};

use crate::data::{Region, RegionSelection, YEAR_END, YEAR_START};
use crate::render::DrawList;
use crate::story::{Action, Effects, NarrativeState, SceneId, StoryText};

use super::canvas::{self, CanvasState, HoverChange};

/// Actions produced by one frame of UI, in the order they happened.
pub type Pending = Vec<Action>;

/// What the nav bar shows; updated only from dispatcher effects.
#[derive(Clone, Debug, PartialEq)]
pub struct NavView {
    pub active: SceneId,
    pub controls_visible: bool,
    pub year_readout: i32,
}

impl NavView {
    pub fn from_state(state: &NarrativeState) -> Self {
        Self {
            active: state.scene,
            controls_visible: state.scene.uses_parameter_controls(),
            year_readout: state.year,
        }
    }

    pub fn apply(&mut self, effects: &Effects) {
        self.active = effects.active_scene;
        self.controls_visible = effects.controls_visible;
        if let Some(year) = effects.year_readout {
            self.year_readout = year;
        }
    }
}

/// A scene button always selects its scene, even the active one, so the
/// chart is drawn again.
fn scene_clicked(id: SceneId, pending: &mut Pending) {
    pending.push(Action::SelectScene(id));
}

/// Scene buttons plus, for the interactive scene, the year and region controls.
pub fn nav_bar(ctx: &egui::Context, nav: &NavView, state: &NarrativeState, pending: &mut Pending) {
    TopBottomPanel::top("nav").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Climate Change Narrative");
            ui.separator();
            for id in SceneId::ALL {
                if ui.selectable_label(nav.active == id, id.nav_label()).clicked() {
                    scene_clicked(id, pending);
                }
            }
        });

        if nav.controls_visible {
            ui.horizontal(|ui| {
                let mut year = nav.year_readout;
                let slider = Slider::new(&mut year, YEAR_START..=YEAR_END)
                    .text("Year")
                    .show_value(false);
                if ui.add(slider).changed() {
                    pending.push(Action::SetYear(year));
                }
                ui.label(RichText::new(nav.year_readout.to_string()).strong());
                ui.separator();

                let mut selected = state.region.label().to_string();
                ComboBox::from_label("Region")
                    .selected_text(selected.clone())
                    .show_ui(ui, |ui| {
                        for region in Region::ALL {
                            ui.selectable_value(&mut selected, region.name().to_string(), region.name());
                        }
                    });
                if selected != state.region.label() {
                    pending.push(Action::SelectRegion(RegionSelection::parse(&selected)));
                }
            });
        }
    });
}

pub fn story_panel(ctx: &egui::Context, story: &StoryText) {
    SidePanel::right("story").default_width(320.0).show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.heading(story.title);
            ui.label(story.description);
            if !story.notes.is_empty() {
                ui.add_space(8.0);
                ui.label(RichText::new(story.notes.heading).strong());
                for bullet in story.notes.bullets {
                    ui.label(format!("• {bullet}"));
                }
                ui.add_space(4.0);
                ui.label(RichText::new(story.notes.closing).italics());
            }
        });
    });
}

pub fn status_bar(ctx: &egui::Context, state: &NarrativeState) {
    TopBottomPanel::bottom("status").show(ctx, |ui| {
        let text = match &state.hovered {
            Some(o) => format!("{} {}: {:.2}°C", o.region, o.year, o.temperature_anomaly),
            None => format!("Scene: {}", state.scene.nav_label()),
        };
        ui.label(text);
    });
}

pub fn chart(
    ctx: &egui::Context,
    size: Vec2,
    list: &DrawList,
    canvas_state: &mut CanvasState,
    pending: &mut Pending,
) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::both().show(ui, |ui| {
            match canvas::show(ui, size, list, canvas_state) {
                HoverChange::Entered(datum) => pending.push(Action::Hover(Some(datum))),
                HoverChange::Left => pending.push(Action::Hover(None)),
                HoverChange::Unchanged => {}
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ChartFrame, Margin};
    use crate::story::{DataSource, DatasetPolicy, Dispatcher};

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(
            DataSource::new(DatasetPolicy::RegeneratePerRender, 1.0, Some(3)),
            ChartFrame::new(960.0, 600.0, Margin::default()),
        )
    }

    #[test]
    fn clicking_the_active_scene_still_rerenders() {
        let mut d = dispatcher();
        let mut pending = Pending::new();
        scene_clicked(d.state().scene, &mut pending);
        assert_eq!(pending, vec![Action::SelectScene(SceneId::Overview)]);

        let before = d.dataset().records().to_vec();
        let fx = d.dispatch(pending.remove(0));
        assert!(fx.rerender);
        let mut list = crate::render::DrawList::new();
        assert!(d.render_logged(&mut list));
        assert_ne!(d.dataset().records(), before.as_slice());
    }

    #[test]
    fn nav_view_follows_effects() {
        let mut d = dispatcher();
        let mut nav = NavView::from_state(d.state());
        assert_eq!(nav.active, SceneId::Overview);
        assert!(!nav.controls_visible);
        assert_eq!(nav.year_readout, 2020);

        nav.apply(&d.dispatch(Action::SelectScene(SceneId::Interactive)));
        assert_eq!(nav.active, SceneId::Interactive);
        assert!(nav.controls_visible);

        nav.apply(&d.dispatch(Action::SetYear(1700)));
        assert_eq!(nav.year_readout, 1880);

        nav.apply(&d.dispatch(Action::SelectScene(SceneId::Regional)));
        assert!(!nav.controls_visible);
        assert_eq!(nav.year_readout, 1880);
    }
}
