use crate::icon::IconRef;
use serde::{Deserialize, Serialize};

/// Placeholder shown by a freshly constructed widget.
pub const DEFAULT_PLACEHOLDER: &str = "Search...";

/// Where the icon is drawn inside the widget.
///
/// The two sides are mutually exclusive: applying one side flag replaces the
/// other, so the enum can never describe both at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    #[default]
    None,
    Left,
    Right,
}

impl IconPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconPosition::None => "none",
            IconPosition::Left => "left",
            IconPosition::Right => "right",
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, IconPosition::None)
    }
}

/// Horizontal alignment of the input text. Independent of [`IconPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Right => "right",
        }
    }
}

/// Presence-based attributes that switch presentational modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryFlag {
    IconLeft,
    IconRight,
    TextLeft,
    TextRight,
}

/// Canonical application order. When a host sets contradictory flags in one
/// batch, the later entry wins.
pub const ALL_FLAGS: &[BoundaryFlag] = &[
    BoundaryFlag::IconLeft,
    BoundaryFlag::IconRight,
    BoundaryFlag::TextLeft,
    BoundaryFlag::TextRight,
];

impl BoundaryFlag {
    pub fn attribute(&self) -> &'static str {
        match self {
            BoundaryFlag::IconLeft => "icon-left",
            BoundaryFlag::IconRight => "icon-right",
            BoundaryFlag::TextLeft => "text-left",
            BoundaryFlag::TextRight => "text-right",
        }
    }

    pub fn from_attribute(name: &str) -> Option<Self> {
        ALL_FLAGS.iter().copied().find(|f| f.attribute() == name)
    }
}

/// Which boundary flags a host currently sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlagSet {
    pub icon_left: bool,
    pub icon_right: bool,
    pub text_left: bool,
    pub text_right: bool,
}

impl FlagSet {
    pub fn contains(&self, flag: BoundaryFlag) -> bool {
        match flag {
            BoundaryFlag::IconLeft => self.icon_left,
            BoundaryFlag::IconRight => self.icon_right,
            BoundaryFlag::TextLeft => self.text_left,
            BoundaryFlag::TextRight => self.text_right,
        }
    }
}

/// Outcome of a host attribute write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeChange {
    /// Observable state changed; a re-render is due.
    Applied,
    /// A declared attribute was written with the value it already had.
    Unchanged,
    /// Not a declared attribute. Nothing was stored.
    Ignored,
}

/// The authoritative reactive state of one widget instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetState {
    pub value: String,
    pub placeholder: String,
    pub icon: IconRef,
    pub icon_position: IconPosition,
    /// `None` until a text flag is applied; renders as left-aligned.
    pub text_align: Option<TextAlign>,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            value: String::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            icon: IconRef::default(),
            icon_position: IconPosition::None,
            text_align: None,
        }
    }
}

impl WidgetState {
    /// Write a declared attribute. Boundary flags are presence-based, so any
    /// value (including the empty string) turns them on.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> AttributeChange {
        match name {
            "value" => replace(&mut self.value, value.to_string()),
            "placeholder" => replace(&mut self.placeholder, value.to_string()),
            "icon" => replace(&mut self.icon, IconRef::parse(value)),
            _ => match BoundaryFlag::from_attribute(name) {
                Some(flag) => self.set_flag(flag, true),
                None => AttributeChange::Ignored,
            },
        }
    }

    /// Remove a declared attribute. Text fields fall back to their defaults.
    pub fn remove_attribute(&mut self, name: &str) -> AttributeChange {
        match name {
            "value" => replace(&mut self.value, String::new()),
            "placeholder" => replace(&mut self.placeholder, DEFAULT_PLACEHOLDER.to_string()),
            "icon" => replace(&mut self.icon, IconRef::default()),
            _ => match BoundaryFlag::from_attribute(name) {
                Some(flag) => self.set_flag(flag, false),
                None => AttributeChange::Ignored,
            },
        }
    }

    /// Turn a boundary flag on or off.
    ///
    /// Turning a side on replaces the opposite side. Turning off the side
    /// that is not active leaves the state alone.
    pub fn set_flag(&mut self, flag: BoundaryFlag, present: bool) -> AttributeChange {
        match (flag, present) {
            (BoundaryFlag::IconLeft, true) => replace(&mut self.icon_position, IconPosition::Left),
            (BoundaryFlag::IconRight, true) => {
                replace(&mut self.icon_position, IconPosition::Right)
            }
            (BoundaryFlag::TextLeft, true) => replace(&mut self.text_align, Some(TextAlign::Left)),
            (BoundaryFlag::TextRight, true) => {
                replace(&mut self.text_align, Some(TextAlign::Right))
            }
            (BoundaryFlag::IconLeft, false) if self.icon_position == IconPosition::Left => {
                replace(&mut self.icon_position, IconPosition::None)
            }
            (BoundaryFlag::IconRight, false) if self.icon_position == IconPosition::Right => {
                replace(&mut self.icon_position, IconPosition::None)
            }
            (BoundaryFlag::TextLeft, false) if self.text_align == Some(TextAlign::Left) => {
                replace(&mut self.text_align, None)
            }
            (BoundaryFlag::TextRight, false) if self.text_align == Some(TextAlign::Right) => {
                replace(&mut self.text_align, None)
            }
            _ => AttributeChange::Unchanged,
        }
    }

    /// Apply a batch of flags in [`ALL_FLAGS`] order.
    pub fn with_flags(mut self, flags: FlagSet) -> Self {
        for flag in ALL_FLAGS {
            if flags.contains(*flag) {
                self.set_flag(*flag, true);
            }
        }
        self
    }

    /// Bring the flags in line with what the host sets now. Every flag that
    /// changed since `previous` counts as a fresh write, so the side switched
    /// on most recently wins.
    ///
    /// Switching off the active side hands over to the other side if the
    /// host still sets it.
    pub fn sync_flags(&mut self, previous: FlagSet, next: FlagSet) -> AttributeChange {
        let before = (self.icon_position, self.text_align);
        for flag in ALL_FLAGS {
            if previous.contains(*flag) && !next.contains(*flag) {
                self.set_flag(*flag, false);
            }
        }
        for flag in ALL_FLAGS {
            if !previous.contains(*flag) && next.contains(*flag) {
                self.set_flag(*flag, true);
            }
        }
        if self.icon_position == IconPosition::None {
            for flag in [BoundaryFlag::IconLeft, BoundaryFlag::IconRight] {
                if next.contains(flag) {
                    self.set_flag(flag, true);
                }
            }
        }
        if self.text_align.is_none() {
            for flag in [BoundaryFlag::TextLeft, BoundaryFlag::TextRight] {
                if next.contains(flag) {
                    self.set_flag(flag, true);
                }
            }
        }
        if (self.icon_position, self.text_align) == before {
            AttributeChange::Unchanged
        } else {
            AttributeChange::Applied
        }
    }

    /// Flags that are currently active, in canonical order.
    pub fn boundary_flags(&self) -> Vec<BoundaryFlag> {
        let mut flags = Vec::new();
        match self.icon_position {
            IconPosition::Left => flags.push(BoundaryFlag::IconLeft),
            IconPosition::Right => flags.push(BoundaryFlag::IconRight),
            IconPosition::None => {}
        }
        match self.text_align {
            Some(TextAlign::Left) => flags.push(BoundaryFlag::TextLeft),
            Some(TextAlign::Right) => flags.push(BoundaryFlag::TextRight),
            None => {}
        }
        flags
    }

    pub fn effective_text_align(&self) -> TextAlign {
        self.text_align.unwrap_or_default()
    }
}

fn replace<T: PartialEq>(slot: &mut T, next: T) -> AttributeChange {
    if *slot == next {
        AttributeChange::Unchanged
    } else {
        *slot = next;
        AttributeChange::Applied
    }
}
