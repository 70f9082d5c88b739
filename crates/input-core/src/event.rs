use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic vocabulary of outbound notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    EnterPressed,
    KeyPressed,
    FocusLost,
    IconClicked,
}

impl NotificationKind {
    /// Name the host listens for.
    pub fn event_name(&self) -> &'static str {
        match self {
            NotificationKind::EnterPressed => "enter-pressed",
            NotificationKind::KeyPressed => "key-pressed",
            NotificationKind::FocusLost => "focus-lost",
            NotificationKind::IconClicked => "icon-clicked",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// Propagation flags carried by every notification.
///
/// Both must be set for ancestors of the widget to observe it: `composed`
/// lets it out of the widget's isolated scope, `bubbles` carries it up the
/// containment tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub bubbles: bool,
    pub composed: bool,
}

impl Delivery {
    pub const BUBBLING: Delivery = Delivery {
        bubbles: true,
        composed: true,
    };

    pub fn reaches_ancestors(&self) -> bool {
        self.bubbles && self.composed
    }
}

impl Default for Delivery {
    fn default() -> Self {
        Self::BUBBLING
    }
}

/// Immutable outbound message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub value: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub delivery: Delivery,
}

impl Notification {
    pub fn new(kind: NotificationKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            timestamp: Utc::now(),
            delivery: Delivery::BUBBLING,
        }
    }

    pub fn event_name(&self) -> &'static str {
        self.kind.event_name()
    }

    /// The `detail` payload a DOM-style listener would receive.
    pub fn detail(&self) -> serde_json::Value {
        serde_json::json!({ "value": self.value })
    }
}

/// Key identity as far as the translator cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    Enter,
    /// Any other key, named the way the input surface reports it
    /// (`"a"`, `"Shift"`, `"ArrowLeft"`, ...).
    Other(String),
}

impl KeyInput {
    pub fn from_name(name: &str) -> Self {
        if name == "Enter" {
            KeyInput::Enter
        } else {
            KeyInput::Other(name.to_string())
        }
    }
}

/// Raw events arriving from the native input and the icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEvent {
    KeyUp(KeyInput),
    FocusOut,
    IconActivated,
}

/// Result of translating one raw event.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub notification: Notification,
    /// The raw event's default action must be suppressed.
    pub prevent_default: bool,
}

/// Map a raw event to its notification.
///
/// `live_value` must be read from the input surface at the instant the raw
/// event arrived. Icon activation fires whether or not the icon is visible.
pub fn translate(raw: &RawEvent, live_value: &str) -> Translation {
    let (kind, prevent_default) = match raw {
        RawEvent::KeyUp(KeyInput::Enter) => (NotificationKind::EnterPressed, true),
        RawEvent::KeyUp(KeyInput::Other(_)) => (NotificationKind::KeyPressed, false),
        RawEvent::FocusOut => (NotificationKind::FocusLost, false),
        RawEvent::IconActivated => (NotificationKind::IconClicked, false),
    };
    Translation {
        notification: Notification::new(kind, live_value),
        prevent_default,
    }
}

/// The widget's view of the native input's content.
///
/// Updated from every native `input` event, so it is current by the time
/// the matching key release arrives. Notification payloads are read from
/// here, never from the host-provided `value`, which may lag a tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSurface {
    content: String,
}

impl InputSurface {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn record_input(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Translate a raw event against the current content.
    pub fn translate(&self, raw: &RawEvent) -> Translation {
        translate(raw, &self.content)
    }
}
