use climate_narrative::data::{Dataset, Observation, Region, YEAR_END, trend};
use climate_narrative::render::annotations::{most_affected, regional};
use climate_narrative::render::scale::{BandScale, LinearScale};
use climate_narrative::render::scenes::{RegionalScene, SceneRenderer};
use climate_narrative::render::{ChartFrame, DrawList, Margin};
use climate_narrative::story::NarrativeState;

fn latest_with(temps: &[(Region, f64)]) -> Dataset {
    temps
        .iter()
        .map(|&(region, t)| Observation {
            temperature_anomaly: t,
            ..trend(region, YEAR_END)
        })
        .collect()
}

#[test]
fn hottest_region_gets_the_callout() {
    let data = latest_with(&[
        (Region::NorthAmerica, 1.0),
        (Region::Europe, 1.1),
        (Region::Asia, 1.3),
        (Region::Africa, 0.9),
        (Region::SouthAmerica, 0.8),
        (Region::Australia, 1.0),
    ]);
    let mut list = DrawList::new();
    RegionalScene
        .render(
            &data,
            &NarrativeState::default(),
            &ChartFrame::new(960.0, 600.0, Margin::default()),
            &mut list,
        )
        .unwrap();

    assert_eq!(list.bars().count(), 6);
    let notes: Vec<_> = list.annotations().collect();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Most Affected");
    assert_eq!(notes[0].label, "Highest warming: Asia");
}

#[test]
fn tie_keeps_the_earlier_region() {
    let data = latest_with(&[(Region::Europe, 1.2), (Region::Africa, 1.2)]);
    let latest: Vec<_> = data.iter().collect();
    assert_eq!(most_affected(&latest).map(|o| o.region), Some(Region::Europe));

    let x = BandScale::new(&Region::NON_GLOBAL, (0.0, 600.0), 0.3);
    let y = LinearScale::new((0.0, 1.5), (400.0, 0.0));
    let notes = regional(&latest, &x, &y).unwrap();
    assert_eq!(notes[0].label, "Highest warming: Europe");
    assert_eq!(notes[0].anchor.0, x.center(&Region::Europe).unwrap());
}

#[test]
fn no_latest_values_is_an_error() {
    let x = BandScale::new(&Region::NON_GLOBAL, (0.0, 600.0), 0.3);
    let y = LinearScale::new((0.0, 1.5), (400.0, 0.0));
    assert!(regional(&[], &x, &y).is_err());
}
