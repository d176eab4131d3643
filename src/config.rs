use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::render::{ChartFrame, Margin};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "ChartConfig::default_width")]
    pub width: f64,
    #[serde(default = "ChartConfig::default_height")]
    pub height: f64,
    #[serde(default)]
    pub margin: Margin,
}

impl ChartConfig {
    fn default_width() -> f64 {
        960.0
    }
    fn default_height() -> f64 {
        600.0
    }

    pub fn frame(&self) -> ChartFrame {
        ChartFrame::new(self.width, self.height, self.margin)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            margin: Margin::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Draw new noise on every render instead of reusing the first dataset.
    #[serde(default)]
    pub regenerate_per_render: bool,
    #[serde(default = "DatasetConfig::default_noise_scale")]
    pub noise_scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl DatasetConfig {
    fn default_noise_scale() -> f64 {
        1.0
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            regenerate_per_render: false,
            noise_scale: Self::default_noise_scale(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "UiConfig::default_window_width")]
    pub window_width: f32,
    #[serde(default = "UiConfig::default_window_height")]
    pub window_height: f32,
    #[serde(default = "UiConfig::default_pixels_per_point")]
    pub pixels_per_point: f32,
}

impl UiConfig {
    fn default_window_width() -> f32 {
        1400.0
    }
    fn default_window_height() -> f32 {
        820.0
    }
    fn default_pixels_per_point() -> f32 {
        1.0
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: Self::default_window_width(),
            window_height: Self::default_window_height(),
            pixels_per_point: Self::default_pixels_per_point(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "ExportConfig::default_out_dir")]
    pub out_dir: String,
}

impl ExportConfig {
    fn default_out_dir() -> String {
        "target/scenes".to_string()
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: Self::default_out_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Reads `path`, falling back to defaults on any problem. A missing file is
    /// created with every default value commented out.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => warn!("Failed to parse config {path}: {err}. Using defaults."),
                },
                Err(err) => warn!("Failed to read config {path}: {err}. Using defaults."),
            }
            return Self::default();
        }

        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, comment_out(&text)) {
                    warn!("Failed to write default config to {path}: {err}");
                }
            }
            Err(err) => warn!("Failed to serialize default config: {err}"),
        }
        default_cfg
    }
}

/// Keeps section headers live and comments out every key.
fn comment_out(text: &str) -> String {
    let mut out = String::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || (trimmed.starts_with('[') && trimmed.ends_with(']')) {
            out.push_str(line);
        } else {
            out.push_str("# ");
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
