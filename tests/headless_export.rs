use std::fs;
use std::path::PathBuf;

use climate_narrative::export::{dump_dataset, export_scenes};
use climate_narrative::render::{ChartFrame, Margin};
use climate_narrative::story::{DataSource, DatasetPolicy, Dispatcher, SceneId};

fn unique_dir(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "climate_narrative_export_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

fn dispatcher() -> Dispatcher {
    Dispatcher::new(
        DataSource::new(DatasetPolicy::Cached, 1.0, Some(8)),
        ChartFrame::new(960.0, 600.0, Margin::default()),
    )
}

#[test]
fn every_scene_gets_svg_and_story() {
    let dir = unique_dir("all");
    let mut d = dispatcher();
    let written = export_scenes(&mut d, &SceneId::ALL, &dir).unwrap();
    assert_eq!(written.len(), 8);

    for id in SceneId::ALL {
        let svg = fs::read_to_string(dir.join(format!("{id}.svg"))).unwrap();
        assert!(svg.contains("<svg"), "{id}");
        let md = fs::read_to_string(dir.join(format!("{id}.md"))).unwrap();
        assert!(md.starts_with(&format!("## {}", id.entry().title)), "{id}");
    }
    assert_eq!(d.state().scene, SceneId::Interactive);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn dataset_dump_reads_back() {
    let dir = unique_dir("dump");
    let path = dir.join("data.json");
    let d = dispatcher();
    dump_dataset(d.dataset(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let values: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
    assert_eq!(values.len(), d.dataset().len());
    assert_eq!(values[0]["region"], "Global");
    assert_eq!(values[0]["year"], 1880);
    let _ = fs::remove_dir_all(&dir);
}
