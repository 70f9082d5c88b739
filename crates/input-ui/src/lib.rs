pub mod components;
pub mod icons;

pub use components::*;
pub use icons::{request_icon_set, BundledIconSets, ICON_SETS_REVISION};
pub use input_core::{Notification, NotificationKind, StyleProperty, StyleVars};
