//! Headless output: one SVG and one story file per scene, plus a dataset dump.

pub mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::data::Dataset;
use crate::story::{Action, Dispatcher, SceneId};

pub use svg::SvgSurface;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to draw chart: {0}")]
    Draw(String),

    #[error("failed to serialize dataset: {0}")]
    Json(#[from] serde_json::Error),
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError + '_ {
    move |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Renders the dispatcher's current scene into an SVG document.
pub fn render_svg(dispatcher: &mut Dispatcher) -> Result<String, ExportError> {
    let frame = *dispatcher.frame();
    let size = (
        frame.width.round().max(1.0) as u32,
        frame.height.round().max(1.0) as u32,
    );
    let mut buffer = String::new();
    {
        let mut surface = SvgSurface::new(&mut buffer, size);
        dispatcher.render_logged(&mut surface);
        surface.finish()?;
    }
    Ok(buffer)
}

/// Writes `<scene>.svg` and `<scene>.md` for each scene into `out_dir`.
pub fn export_scenes(
    dispatcher: &mut Dispatcher,
    scenes: &[SceneId],
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(out_dir).map_err(io_err(out_dir))?;
    let mut written = Vec::with_capacity(scenes.len() * 2);
    for &scene in scenes {
        let effects = dispatcher.dispatch(Action::SelectScene(scene));
        let svg = render_svg(dispatcher)?;
        let svg_path = out_dir.join(format!("{scene}.svg"));
        fs::write(&svg_path, svg).map_err(io_err(&svg_path))?;

        let story = effects.story.unwrap_or_else(|| dispatcher.story());
        let md_path = out_dir.join(format!("{scene}.md"));
        fs::write(&md_path, story.to_markdown()).map_err(io_err(&md_path))?;

        info!("Saved scene {scene} to {}", svg_path.display());
        written.push(svg_path);
        written.push(md_path);
    }
    Ok(written)
}

pub fn dump_dataset(dataset: &Dataset, path: &Path) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(dataset)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }
    fs::write(path, json).map_err(io_err(path))?;
    info!(records = dataset.len(), "Wrote dataset to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ChartFrame, Margin};
    use crate::story::DataSource;
    use crate::story::dispatch::DatasetPolicy;

    #[test]
    fn svg_document_contains_marks() {
        let mut d = Dispatcher::new(
            DataSource::new(DatasetPolicy::Cached, 1.0, Some(5)),
            ChartFrame::new(960.0, 600.0, Margin::default()),
        );
        d.dispatch(Action::SelectScene(SceneId::Regional));
        let svg = render_svg(&mut d).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<rect"));
        assert!(svg.contains("Most Affected"));
    }
}
