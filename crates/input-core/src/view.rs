//! Pure mapping from [`WidgetState`] to a description of the rendered tree.
//!
//! The tree always has the same shape, `host > [icon, input]`. Only attribute
//! values vary between renders, which keeps diffing in the host runtime
//! trivial.

use crate::icon::IconRef;
use crate::state::{IconPosition, TextAlign, WidgetState};

/// Class carried by the outer element; the stylesheet keys off it.
pub const HOST_CLASS: &str = "icon-input";

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
    pub host: HostView,
    pub icon: IconView,
    pub input: InputView,
}

/// Outer element. The data attributes are what the stylesheet's flag rules
/// select on.
#[derive(Debug, Clone, PartialEq)]
pub struct HostView {
    pub class: &'static str,
    pub icon_position: &'static str,
    pub text_align: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconView {
    pub icon: IconRef,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputView {
    pub input_type: &'static str,
    pub value: String,
    pub placeholder: String,
    pub text_align: TextAlign,
    /// Side whose padding is widened to make room for the icon.
    pub reserve_padding: IconPosition,
}

/// Render the widget. No side effects.
pub fn render(state: &WidgetState) -> WidgetView {
    WidgetView {
        host: HostView {
            class: HOST_CLASS,
            icon_position: state.icon_position.as_str(),
            text_align: state.text_align.map(|a| a.as_str()),
        },
        icon: IconView {
            icon: state.icon.clone(),
            hidden: !state.icon_position.is_visible(),
        },
        input: InputView {
            input_type: "text",
            value: state.value.clone(),
            placeholder: state.placeholder.clone(),
            text_align: state.effective_text_align(),
            reserve_padding: state.icon_position,
        },
    }
}
