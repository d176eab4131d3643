use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::render::scenes::{
    InteractiveScene, OverviewScene, RegionalScene, SceneRenderer, TemperatureScene,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SceneId {
    #[default]
    Overview,
    Temperature,
    Regional,
    Interactive,
}

impl SceneId {
    pub const ALL: [SceneId; 4] = [
        SceneId::Overview,
        SceneId::Temperature,
        SceneId::Regional,
        SceneId::Interactive,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SceneId::Overview => "overview",
            SceneId::Temperature => "temperature",
            SceneId::Regional => "regional",
            SceneId::Interactive => "interactive",
        }
    }

    /// Short label for navigation buttons.
    pub fn nav_label(self) -> &'static str {
        match self {
            SceneId::Overview => "Overview",
            SceneId::Temperature => "Temperature Trends",
            SceneId::Regional => "Regional Impact",
            SceneId::Interactive => "Explore",
        }
    }

    pub fn entry(self) -> &'static SceneEntry {
        &SCENES[self as usize]
    }

    pub fn uses_parameter_controls(self) -> bool {
        self == SceneId::Interactive
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scene '{0}' (expected one of: overview, temperature, regional, interactive)")]
pub struct UnknownScene(pub String);

impl FromStr for SceneId {
    type Err = UnknownScene;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SceneId::ALL
            .into_iter()
            .find(|id| id.key() == trimmed)
            .ok_or_else(|| UnknownScene(trimmed.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneNotes {
    pub heading: &'static str,
    pub bullets: &'static [&'static str],
    pub closing: &'static str,
}

impl SceneNotes {
    pub fn is_empty(&self) -> bool {
        self.heading.is_empty() && self.bullets.is_empty() && self.closing.is_empty()
    }
}

pub struct SceneEntry {
    pub id: SceneId,
    pub title: &'static str,
    pub description: &'static str,
    pub notes: SceneNotes,
    pub renderer: &'static dyn SceneRenderer,
}

impl fmt::Debug for SceneEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneEntry")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

// Indexed by `SceneId as usize`.
static SCENES: [SceneEntry; 4] = [
    SceneEntry {
        id: SceneId::Overview,
        title: "Global Climate Change Overview",
        description: "Explore the global impact of climate change through temperature anomalies, sea level rise, and extreme weather events.",
        notes: SceneNotes {
            heading: "Key Insights:",
            bullets: &[
                "Global temperatures have increased by approximately 1°C since pre-industrial times",
                "Sea levels are rising at an accelerating rate",
                "Extreme weather events have become more frequent and intense",
            ],
            closing: "Click on different regions to explore their specific climate challenges.",
        },
        renderer: &OverviewScene,
    },
    SceneEntry {
        id: SceneId::Temperature,
        title: "Temperature Trends Analysis",
        description: "Dive deeper into temperature anomalies across different regions and time periods.",
        notes: SceneNotes {
            heading: "Temperature Analysis:",
            bullets: &[
                "Asia shows the highest temperature anomalies in recent years",
                "Arctic regions are warming at twice the global average rate",
                "Temperature increases are accelerating since the 1980s",
            ],
            closing: "Hover over data points to see detailed temperature information.",
        },
        renderer: &TemperatureScene,
    },
    SceneEntry {
        id: SceneId::Regional,
        title: "Regional Impact Analysis",
        description: "Compare how different regions are affected by climate change.",
        notes: SceneNotes {
            heading: "Regional Comparison:",
            bullets: &[
                "Different regions experience climate change impacts differently",
                "Coastal regions face unique challenges from sea level rise",
                "Developing regions often have fewer resources to adapt",
            ],
            closing: "Use the interactive controls to compare specific regions and time periods.",
        },
        renderer: &RegionalScene,
    },
    SceneEntry {
        id: SceneId::Interactive,
        title: "Interactive Climate Explorer",
        description: "Customize your exploration by selecting specific years and regions.",
        notes: SceneNotes {
            heading: "Interactive Exploration:",
            bullets: &[
                "Adjust the year slider to see how climate indicators have changed over time",
                "Select different regions to compare their climate trajectories",
                "Explore the relationship between CO2 emissions and climate impacts",
            ],
            closing: "This interactive tool allows you to discover your own insights about climate change patterns.",
        },
        renderer: &InteractiveScene,
    },
];

pub fn lookup(key: &str) -> Option<&'static SceneEntry> {
    key.parse::<SceneId>().ok().map(SceneId::entry)
}

/// Scene-specific notes; an unknown key gets an empty block.
pub fn notes_for(key: &str) -> SceneNotes {
    lookup(key).map(|e| e.notes).unwrap_or_default()
}

/// Text shown in the story panel for one scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoryText {
    pub title: &'static str,
    pub description: &'static str,
    pub notes: SceneNotes,
}

impl StoryText {
    pub fn for_scene(id: SceneId) -> Self {
        let entry = id.entry();
        Self {
            title: entry.title,
            description: entry.description,
            notes: entry.notes,
        }
    }

    pub fn to_markdown(&self) -> String {
        let mut out = format!("## {}\n\n{}\n", self.title, self.description);
        if !self.notes.is_empty() {
            out.push_str(&format!("\n**{}**\n\n", self.notes.heading));
            for bullet in self.notes.bullets {
                out.push_str(&format!("- {bullet}\n"));
            }
            out.push_str(&format!("\n{}\n", self.notes.closing));
        }
        out
    }
}
