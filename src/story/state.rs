use crate::data::{Observation, RegionSelection, YEAR_END, YEAR_START};

use super::scene::SceneId;

/// Snapshot of what the page is showing. Replaced, never edited in place.
#[derive(Clone, Debug, PartialEq)]
pub struct NarrativeState {
    pub scene: SceneId,
    pub year: i32,
    pub region: RegionSelection,
    /// Display only; no renderer reads it.
    pub hovered: Option<Observation>,
}

impl Default for NarrativeState {
    fn default() -> Self {
        Self {
            scene: SceneId::Overview,
            year: YEAR_END,
            region: RegionSelection::default(),
            hovered: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SelectScene(SceneId),
    SetYear(i32),
    SelectRegion(RegionSelection),
    Hover(Option<Observation>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: NarrativeState,
    pub rerender: bool,
}

impl NarrativeState {
    pub fn apply(&self, action: Action) -> Transition {
        let mut next = self.clone();
        let rerender = match action {
            Action::SelectScene(scene) => {
                next.scene = scene;
                true
            }
            Action::SetYear(year) => {
                next.year = year.clamp(YEAR_START, YEAR_END);
                next.scene == SceneId::Interactive
            }
            Action::SelectRegion(region) => {
                next.region = region;
                next.scene == SceneId::Interactive
            }
            Action::Hover(datum) => {
                next.hovered = datum;
                false
            }
        };
        Transition {
            state: next,
            rerender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Region;

    #[test]
    fn defaults() {
        let s = NarrativeState::default();
        assert_eq!(s.scene, SceneId::Overview);
        assert_eq!(s.year, 2020);
        assert!(s.region.is_global());
        assert!(s.hovered.is_none());
    }

    #[test]
    fn year_outside_range_is_clamped() {
        let s = NarrativeState::default();
        assert_eq!(s.apply(Action::SetYear(1700)).state.year, 1880);
        assert_eq!(s.apply(Action::SetYear(2100)).state.year, 2020);
    }

    #[test]
    fn parameters_only_rerender_interactive() {
        let s = NarrativeState::default();
        let t = s.apply(Action::SelectRegion(Region::Asia.into()));
        assert!(!t.rerender);
        assert_eq!(t.state.region, RegionSelection::Known(Region::Asia));

        let s = s.apply(Action::SelectScene(SceneId::Interactive)).state;
        assert!(s.apply(Action::SetYear(1950)).rerender);
        assert!(s.apply(Action::SelectRegion(Region::Europe.into())).rerender);
    }

    #[test]
    fn hover_records_datum_without_rerender() {
        let o = crate::data::trend(Region::Africa, 1990);
        let s = NarrativeState::default()
            .apply(Action::SelectScene(SceneId::Interactive))
            .state;

        let t = s.apply(Action::Hover(Some(o)));
        assert!(!t.rerender);
        assert_eq!(t.state.hovered, Some(o));

        let t = t.state.apply(Action::Hover(None));
        assert!(!t.rerender);
        assert!(t.state.hovered.is_none());
    }

    #[test]
    fn apply_leaves_the_original_untouched() {
        let s = NarrativeState::default();
        let _ = s.apply(Action::SelectScene(SceneId::Regional));
        assert_eq!(s.scene, SceneId::Overview);
    }
}
