use clap::Parser;

use crate::story::SceneId;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "climate-narrative.toml")]
    pub config: String,

    /// Run without GUI: export every scene (or --scene) as SVG + story text
    #[arg(long, default_value_t = false)]
    pub nogui: bool,

    /// Output directory for headless export (overrides config)
    #[arg(long)]
    pub out_dir: Option<String>,

    /// Initial scene: overview, temperature, regional or interactive
    #[arg(long)]
    pub scene: Option<SceneId>,

    /// Initial year for the interactive scene
    #[arg(long)]
    pub year: Option<i32>,

    /// Initial region for the interactive scene ("Global" for all)
    #[arg(long)]
    pub region: Option<String>,

    /// Seed for the synthetic dataset (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Draw fresh noise on every render
    #[arg(long, default_value_t = false)]
    pub jitter: bool,

    /// Write the generated dataset as JSON
    #[arg(long, value_name = "PATH")]
    pub dump_data: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let args = Args::try_parse_from(["climate-narrative"]).unwrap();
        assert_eq!(args.config, "climate-narrative.toml");
        assert!(!args.nogui);
        assert!(!args.jitter);
        assert_eq!(args.scene, None);
    }

    #[test]
    fn scene_and_overrides_parse() {
        let args = Args::try_parse_from([
            "climate-narrative",
            "--nogui",
            "--scene",
            "interactive",
            "--year",
            "1990",
            "--region",
            "Europe",
            "--seed",
            "7",
        ])
        .unwrap();
        assert!(args.nogui);
        assert_eq!(args.scene, Some(SceneId::Interactive));
        assert_eq!(args.year, Some(1990));
        assert_eq!(args.region.as_deref(), Some("Europe"));
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn unknown_scene_is_rejected() {
        assert!(Args::try_parse_from(["climate-narrative", "--scene", "ocean"]).is_err());
    }
}
