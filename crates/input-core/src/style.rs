//! Named custom properties through which a host restyles the widget.
//!
//! The stylesheet declares every property with a fallback default; this
//! module mirrors that table so hosts can override values from Rust (or a
//! config file) without touching the widget's internals.

use serde::{Deserialize, Serialize};

/// Prefix shared by every custom property.
pub const PROPERTY_PREFIX: &str = "--icon-input-";

/// Pixels subtracted from the widget height to size the icon.
pub const ICON_INSET_PX: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleProperty {
    Width,
    Height,
    Border,
    BorderFocus,
    BackgroundColor,
    FontSize,
    TextColor,
    PlaceholderColor,
    IconFillColor,
    IconStrokeColor,
}

pub const ALL_PROPERTIES: &[StyleProperty] = &[
    StyleProperty::Width,
    StyleProperty::Height,
    StyleProperty::Border,
    StyleProperty::BorderFocus,
    StyleProperty::BackgroundColor,
    StyleProperty::FontSize,
    StyleProperty::TextColor,
    StyleProperty::PlaceholderColor,
    StyleProperty::IconFillColor,
    StyleProperty::IconStrokeColor,
];

impl StyleProperty {
    /// Custom property name, e.g. `--icon-input-width`.
    pub fn name(&self) -> &'static str {
        match self {
            StyleProperty::Width => "--icon-input-width",
            StyleProperty::Height => "--icon-input-height",
            StyleProperty::Border => "--icon-input-border",
            StyleProperty::BorderFocus => "--icon-input-border-focus",
            StyleProperty::BackgroundColor => "--icon-input-background-color",
            StyleProperty::FontSize => "--icon-input-font-size",
            StyleProperty::TextColor => "--icon-input-text-color",
            StyleProperty::PlaceholderColor => "--icon-input-placeholder-color",
            StyleProperty::IconFillColor => "--icon-input-icon-fill-color",
            StyleProperty::IconStrokeColor => "--icon-input-icon-stroke-color",
        }
    }

    /// Value used when the host sets nothing.
    pub fn default_value(&self) -> &'static str {
        match self {
            StyleProperty::Width => "300px",
            StyleProperty::Height => "30px",
            StyleProperty::Border => "1px solid black",
            StyleProperty::BorderFocus => "1px solid #4d90fe",
            StyleProperty::BackgroundColor => "white",
            StyleProperty::FontSize => "calc(var(--icon-input-height, 30px) / 1.8)",
            StyleProperty::TextColor => "inherit",
            StyleProperty::PlaceholderColor => "#a0a0a0",
            StyleProperty::IconFillColor => "currentcolor",
            StyleProperty::IconStrokeColor => "none",
        }
    }
}

/// Host overrides. Unset fields keep the stylesheet default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleVars {
    pub width: Option<String>,
    pub height: Option<String>,
    pub border: Option<String>,
    pub border_focus: Option<String>,
    pub background_color: Option<String>,
    pub font_size: Option<String>,
    pub text_color: Option<String>,
    pub placeholder_color: Option<String>,
    pub icon_fill_color: Option<String>,
    pub icon_stroke_color: Option<String>,
}

impl StyleVars {
    fn slot(&self, property: StyleProperty) -> &Option<String> {
        match property {
            StyleProperty::Width => &self.width,
            StyleProperty::Height => &self.height,
            StyleProperty::Border => &self.border,
            StyleProperty::BorderFocus => &self.border_focus,
            StyleProperty::BackgroundColor => &self.background_color,
            StyleProperty::FontSize => &self.font_size,
            StyleProperty::TextColor => &self.text_color,
            StyleProperty::PlaceholderColor => &self.placeholder_color,
            StyleProperty::IconFillColor => &self.icon_fill_color,
            StyleProperty::IconStrokeColor => &self.icon_stroke_color,
        }
    }

    fn slot_mut(&mut self, property: StyleProperty) -> &mut Option<String> {
        match property {
            StyleProperty::Width => &mut self.width,
            StyleProperty::Height => &mut self.height,
            StyleProperty::Border => &mut self.border,
            StyleProperty::BorderFocus => &mut self.border_focus,
            StyleProperty::BackgroundColor => &mut self.background_color,
            StyleProperty::FontSize => &mut self.font_size,
            StyleProperty::TextColor => &mut self.text_color,
            StyleProperty::PlaceholderColor => &mut self.placeholder_color,
            StyleProperty::IconFillColor => &mut self.icon_fill_color,
            StyleProperty::IconStrokeColor => &mut self.icon_stroke_color,
        }
    }

    pub fn with(mut self, property: StyleProperty, value: impl Into<String>) -> Self {
        *self.slot_mut(property) = Some(value.into());
        self
    }

    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.slot(property).as_deref()
    }

    /// Override if set, otherwise the stylesheet default.
    pub fn resolved(&self, property: StyleProperty) -> &str {
        self.get(property).unwrap_or(property.default_value())
    }

    /// Icon edge length. Always derived from the height so that resizing
    /// the widget keeps icon and text in proportion.
    pub fn icon_size(&self) -> String {
        format!("calc({} - {ICON_INSET_PX}px)", self.resolved(StyleProperty::Height))
    }

    /// Inline `style` declarations for the overridden properties only.
    /// Empty when nothing is overridden.
    pub fn inline_style(&self) -> String {
        ALL_PROPERTIES
            .iter()
            .filter_map(|p| self.get(*p).map(|v| format!("{}: {v};", p.name())))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        ALL_PROPERTIES.iter().all(|p| self.get(*p).is_none())
    }
}
