pub mod dispatch;
pub mod scene;
pub mod state;

pub use dispatch::{DataSource, DatasetPolicy, Dispatcher, Effects};
pub use scene::{SceneEntry, SceneId, SceneNotes, StoryText, UnknownScene};
pub use state::{Action, NarrativeState, Transition};
