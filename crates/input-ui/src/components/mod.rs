pub mod glyph;
pub mod icon_input;
pub mod notification_listener;

pub use glyph::*;
pub use icon_input::*;
pub use notification_listener::*;
