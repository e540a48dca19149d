mod background;
mod bounds;
mod locator;

pub use background::{BACKGROUND_GREEN_MAX, BACKGROUND_RED_MIN, remove_background};
pub use bounds::FrameBox;
pub use locator::{DEFAULT_FALLBACK_FRAMES, locate};
