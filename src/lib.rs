pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod guards;
pub mod intent;
pub mod key;
pub mod navigate;
pub mod repair;
pub mod traits;
pub mod types;
pub mod view;

pub use crate::config::GuardConfig;
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::error::ConfigError;
pub use crate::intent::{Classification, Direction, Intent, Reach, classify_command, classify_key};
pub use crate::key::{EditCommand, InputEvent, KeyCode, KeyEvent, Modifiers};
pub use crate::navigate::{Granularity, OverlappedElements};
pub use crate::traits::{DocumentTree, EditorHost};
pub use crate::types::{BlockReason, Boundary, NodeKind, Range, Verdict};
pub use crate::view::TreeView;
