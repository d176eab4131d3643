// Entry point: builds the dispatcher, then either exports scenes headless or opens the viewer.
use std::error::Error;
use std::path::Path;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use climate_narrative::cli::Args;
use climate_narrative::config::AppConfig;
use climate_narrative::data::RegionSelection;
use climate_narrative::export;
use climate_narrative::story::{Action, DataSource, Dispatcher, SceneId};
use climate_narrative::ui;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "climate_narrative=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(Args::parse()) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut config = AppConfig::load_or_default(&args.config);
    if let Some(seed) = args.seed {
        config.dataset.seed = Some(seed);
    }
    if args.jitter {
        config.dataset.regenerate_per_render = true;
    }
    if let Some(dir) = &args.out_dir {
        config.export.out_dir = dir.clone();
    }

    let mut dispatcher = Dispatcher::new(
        DataSource::from_config(&config.dataset),
        config.chart.frame(),
    );
    if let Some(year) = args.year {
        dispatcher.dispatch(Action::SetYear(year));
    }
    if let Some(region) = &args.region {
        dispatcher.dispatch(Action::SelectRegion(RegionSelection::parse(region)));
    }
    if let Some(scene) = args.scene {
        dispatcher.dispatch(Action::SelectScene(scene));
    }

    if let Some(path) = &args.dump_data {
        export::dump_dataset(dispatcher.dataset(), Path::new(path))?;
    }

    if args.nogui {
        let scenes = match args.scene {
            Some(scene) => vec![scene],
            None => SceneId::ALL.to_vec(),
        };
        let out_dir = Path::new(&config.export.out_dir);
        let written = export::export_scenes(&mut dispatcher, &scenes, out_dir)?;
        info!("Exported {} files to {}", written.len(), out_dir.display());
        return Ok(());
    }

    ui::run(dispatcher, &config.ui)?;
    Ok(())
}
