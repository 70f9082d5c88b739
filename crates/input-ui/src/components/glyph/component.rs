use crate::icons::{lookup_glyph, ICON_SETS_REVISION};
use dioxus::prelude::*;
use input_core::{IconRef, IconResourceCache};

/// Vector icon addressed by a namespaced id.
///
/// Draws an empty `svg` until the namespace is available; it never fails.
/// Clicks are forwarded whether or not the glyph is drawn or visible.
#[component]
pub fn Glyph(
    icon: IconRef,
    #[props(default)] hidden: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
) -> Element {
    // Subscribe so a glyph waiting on a background load redraws when it lands.
    let _revision = ICON_SETS_REVISION();
    let draw = lookup_glyph(&icon, IconResourceCache::global());
    let resolved = if draw.is_some() { "true" } else { "false" };
    let aria_hidden = if hidden { "true" } else { "false" };

    rsx! {
        span {
            class: "icon-input-glyph",
            "data-icon": "{icon}",
            "data-resolved": resolved,
            "aria-hidden": aria_hidden,
            onclick: move |evt| onclick.call(evt),
            if let Some(draw) = draw {
                {draw()}
            } else {
                svg { class: "icon-input-glyph-blank", view_box: "0 0 24 24" }
            }
        }
    }
}
