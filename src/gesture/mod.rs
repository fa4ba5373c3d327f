pub mod mouse;
pub mod swipe;
