pub mod catalog;
pub mod cli;
pub mod error;
pub mod frame;
pub mod output;
pub mod sheet;
pub mod split;

pub use catalog::{ANIMATIONS, AnimationKind, AnimationSpec, ENEMY_IDS, FrameLayout, StripLayout};
pub use cli::{CliArgs, CompressionLevel};
pub use error::FramecutError;
pub use frame::{DEFAULT_FALLBACK_FRAMES, FrameBox, locate, remove_background};
pub use sheet::SpriteSheet;
