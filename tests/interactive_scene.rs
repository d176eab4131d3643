use climate_narrative::data::{Region, RegionSelection, generate_with};
use climate_narrative::render::scenes::{InteractiveScene, NO_DATA_FOR_REGION, SceneRenderer};
use climate_narrative::render::surface::TextRole;
use climate_narrative::render::{ChartFrame, DrawList, Margin};
use climate_narrative::story::{NarrativeState, SceneId};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn frame() -> ChartFrame {
    ChartFrame::new(960.0, 600.0, Margin::default())
}

fn state(year: i32, region: RegionSelection) -> NarrativeState {
    NarrativeState {
        scene: SceneId::Interactive,
        year,
        region,
        hovered: None,
    }
}

#[test]
fn global_year_scatter_excludes_global() {
    let data = generate_with(&mut StdRng::seed_from_u64(11), 1.0);
    let mut list = DrawList::new();
    InteractiveScene
        .render(&data, &state(1880, RegionSelection::default()), &frame(), &mut list)
        .unwrap();

    assert_eq!(list.points().count(), 6);
    let labels: Vec<_> = list
        .texts()
        .filter(|t| t.role == TextRole::PointLabel)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(labels.len(), 6);
    assert!(!labels.contains(&"Global"));
    assert!(labels.contains(&"Europe"));
}

#[test]
fn region_series_draws_full_line() {
    let data = generate_with(&mut StdRng::seed_from_u64(11), 1.0);
    let mut list = DrawList::new();
    InteractiveScene
        .render(&data, &state(2020, Region::Africa.into()), &frame(), &mut list)
        .unwrap();
    let shape = list.shape();
    assert_eq!(shape.lines, 1);
    assert_eq!(shape.points, 141);
}

#[test]
fn unknown_region_shows_message_only() {
    let data = generate_with(&mut StdRng::seed_from_u64(11), 1.0);
    let mut list = DrawList::new();
    InteractiveScene
        .render(
            &data,
            &state(2020, RegionSelection::parse("Antarctica")),
            &frame(),
            &mut list,
        )
        .unwrap();
    let shape = list.shape();
    assert_eq!(shape.axes, 0);
    assert_eq!(shape.points, 0);
    let msg: Vec<_> = list.texts().map(|t| t.text.as_str()).collect();
    assert_eq!(msg, vec![NO_DATA_FOR_REGION]);
}
