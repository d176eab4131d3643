use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error};

use crate::config::DatasetConfig;
use crate::data::{Dataset, generator};
use crate::render::{ChartFrame, DrawSurface, RenderError};

use super::scene::{SceneId, StoryText};
use super::state::{Action, NarrativeState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetPolicy {
    /// Generate once, reuse for every render.
    Cached,
    /// Draw fresh noise before each render.
    RegeneratePerRender,
}

pub struct DataSource {
    policy: DatasetPolicy,
    noise_scale: f64,
    rng: StdRng,
    current: Dataset,
}

impl DataSource {
    pub fn new(policy: DatasetPolicy, noise_scale: f64, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let current = generator::generate_with(&mut rng, noise_scale);
        debug!(records = current.len(), ?policy, "dataset generated");
        Self {
            policy,
            noise_scale,
            rng,
            current,
        }
    }

    pub fn from_config(cfg: &DatasetConfig) -> Self {
        let policy = if cfg.regenerate_per_render {
            DatasetPolicy::RegeneratePerRender
        } else {
            DatasetPolicy::Cached
        };
        Self::new(policy, cfg.noise_scale, cfg.seed)
    }

    /// Serves a fixed dataset for every render.
    pub fn fixed(dataset: Dataset) -> Self {
        Self {
            policy: DatasetPolicy::Cached,
            noise_scale: 0.0,
            rng: StdRng::seed_from_u64(0),
            current: dataset,
        }
    }

    pub fn current(&self) -> &Dataset {
        &self.current
    }

    fn for_render(&mut self) -> &Dataset {
        if self.policy == DatasetPolicy::RegeneratePerRender {
            self.current = generator::generate_with(&mut self.rng, self.noise_scale);
        }
        &self.current
    }
}

/// What the UI has to update after an action.
#[derive(Clone, Debug, PartialEq)]
pub struct Effects {
    pub active_scene: SceneId,
    pub controls_visible: bool,
    /// Set when the story panel content changed.
    pub story: Option<StoryText>,
    /// Set when the year readout next to the slider changed.
    pub year_readout: Option<i32>,
    pub rerender: bool,
}

pub struct Dispatcher {
    state: NarrativeState,
    data: DataSource,
    frame: ChartFrame,
}

impl Dispatcher {
    pub fn new(data: DataSource, frame: ChartFrame) -> Self {
        Self {
            state: NarrativeState::default(),
            data,
            frame,
        }
    }

    pub fn state(&self) -> &NarrativeState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        self.data.current()
    }

    pub fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    pub fn story(&self) -> StoryText {
        StoryText::for_scene(self.state.scene)
    }

    pub fn dispatch(&mut self, action: Action) -> Effects {
        let story_changes = matches!(action, Action::SelectScene(_));
        let year_changes = matches!(action, Action::SetYear(_));
        if !matches!(action, Action::Hover(_)) {
            debug!(?action, "dispatch");
        }

        let transition = self.state.apply(action);
        self.state = transition.state;

        let scene = self.state.scene;
        Effects {
            active_scene: scene,
            controls_visible: scene.uses_parameter_controls(),
            story: story_changes.then(|| StoryText::for_scene(scene)),
            year_readout: year_changes.then_some(self.state.year),
            rerender: transition.rerender,
        }
    }

    /// Clears `surface` and draws the current scene onto it.
    pub fn render(&mut self, surface: &mut dyn DrawSurface) -> Result<(), RenderError> {
        surface.clear();
        let data = self.data.for_render();
        let entry = self.state.scene.entry();
        entry.renderer.render(data, &self.state, &self.frame, surface)
    }

    /// Like [`Dispatcher::render`], but a failure is only logged and whatever
    /// was drawn so far stays on the surface.
    pub fn render_logged(&mut self, surface: &mut dyn DrawSurface) -> bool {
        match self.render(surface) {
            Ok(()) => true,
            Err(err) => {
                error!(scene = %self.state.scene, "render failed: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawList, Margin};

    fn dispatcher(policy: DatasetPolicy) -> Dispatcher {
        Dispatcher::new(
            DataSource::new(policy, 1.0, Some(7)),
            ChartFrame::new(960.0, 600.0, Margin::default()),
        )
    }

    #[test]
    fn cached_policy_keeps_values_between_renders() {
        let mut d = dispatcher(DatasetPolicy::Cached);
        let before = d.dataset().records().to_vec();
        let mut list = DrawList::new();
        d.render(&mut list).unwrap();
        d.render(&mut list).unwrap();
        assert_eq!(d.dataset().records(), before.as_slice());
    }

    #[test]
    fn jitter_policy_redraws_noise() {
        let mut d = dispatcher(DatasetPolicy::RegeneratePerRender);
        let before = d.dataset().records().to_vec();
        let mut list = DrawList::new();
        d.render(&mut list).unwrap();
        assert_ne!(d.dataset().records(), before.as_slice());
        assert_eq!(d.dataset().len(), before.len());
    }

    #[test]
    fn scene_selection_reports_story_and_controls() {
        let mut d = dispatcher(DatasetPolicy::Cached);
        let fx = d.dispatch(Action::SelectScene(SceneId::Interactive));
        assert!(fx.rerender);
        assert!(fx.controls_visible);
        assert_eq!(
            fx.story.map(|s| s.title),
            Some("Interactive Climate Explorer")
        );

        let fx = d.dispatch(Action::SelectScene(SceneId::Regional));
        assert!(!fx.controls_visible);
        assert_eq!(fx.active_scene, SceneId::Regional);
    }

    #[test]
    fn year_readout_follows_clamped_value() {
        let mut d = dispatcher(DatasetPolicy::Cached);
        let fx = d.dispatch(Action::SetYear(3000));
        assert_eq!(fx.year_readout, Some(2020));
        assert!(fx.story.is_none());
        assert!(!fx.rerender);
    }

    #[test]
    fn failed_render_keeps_partial_output() {
        let data = crate::data::Dataset::new(
            generator::generate_with(&mut StdRng::seed_from_u64(1), 0.0)
                .iter()
                .filter(|o| o.year != 1980)
                .copied()
                .collect(),
        );
        let mut d = Dispatcher::new(
            DataSource::fixed(data),
            ChartFrame::new(960.0, 600.0, Margin::default()),
        );
        let mut list = DrawList::new();
        assert!(!d.render_logged(&mut list));
        let shape = list.shape();
        assert_eq!(shape.axes, 2);
        assert_eq!(shape.annotations, 0);
    }
}
