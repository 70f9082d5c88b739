pub mod config;
pub mod delivery;
pub mod error;
pub mod event;
pub mod icon;
pub mod resolver;
pub mod state;
pub mod style;
pub mod view;

pub use config::*;
pub use delivery::*;
pub use error::*;
pub use event::*;
pub use icon::*;
pub use resolver::*;
pub use state::*;
pub use style::*;
pub use view::*;
