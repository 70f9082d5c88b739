//! Server-side renders of the widget: markup shape, defaults, flags and
//! style overrides.

use crate::common::{mount, render_html, rerender};
use dioxus::prelude::*;
use input_ui::{IconInput, NotificationListener, StyleProperty, StyleVars};
use std::cell::Cell;

thread_local! {
    static ICON_LEFT: Cell<Option<Signal<bool>>> = const { Cell::new(None) };
}

#[test]
fn default_widget_markup() {
    fn app() -> Element {
        rsx! { IconInput {} }
    }
    let html = render_html(app);
    assert!(html.contains(r#"class="icon-input""#), "{html}");
    assert!(html.contains(r#"data-icon-position="none""#), "{html}");
    assert!(!html.contains("data-text-align"), "{html}");
    assert!(html.contains(r#"placeholder="Search...""#), "{html}");
    assert!(html.contains(r#"type="text""#), "{html}");
    assert!(html.contains(r#"data-icon="icons:search""#), "{html}");
    assert!(html.contains(r#"aria-hidden="true""#), "{html}");
    assert!(!html.contains("style="), "{html}");
}

#[test]
fn rendering_is_idempotent() {
    fn app() -> Element {
        rsx! {
            IconInput { value: "cat", icon: "hardware:headset", icon_left: true }
        }
    }
    assert_eq!(render_html(app), render_html(app));
}

#[test]
fn both_icon_flags_resolve_to_right() {
    fn app() -> Element {
        rsx! { IconInput { icon_left: true, icon_right: true } }
    }
    let html = render_html(app);
    assert!(html.contains(r#"data-icon-position="right""#), "{html}");
    assert!(!html.contains(r#"data-icon-position="left""#), "{html}");
    assert!(html.contains(r#"aria-hidden="false""#), "{html}");
}

#[test]
fn icon_side_switched_on_later_wins() {
    fn app() -> Element {
        let icon_left = use_signal(|| false);
        use_hook(|| ICON_LEFT.with(|slot| slot.set(Some(icon_left))));
        rsx! { IconInput { icon_right: true, icon_left: icon_left() } }
    }
    let mut dom = mount(app);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(r#"data-icon-position="right""#), "{html}");

    let mut icon_left = ICON_LEFT.with(Cell::get).expect("app keeps its signal");
    dom.in_runtime(|| icon_left.set(true));
    rerender(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(r#"data-icon-position="left""#), "{html}");

    // Dropping the winning side hands the icon back to the one still set.
    dom.in_runtime(|| icon_left.set(false));
    rerender(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(r#"data-icon-position="right""#), "{html}");
}

#[test]
fn text_alignment_is_independent_of_icon() {
    fn app() -> Element {
        rsx! { IconInput { icon_left: true, text_right: true } }
    }
    let html = render_html(app);
    assert!(html.contains(r#"data-icon-position="left""#), "{html}");
    assert!(html.contains(r#"data-text-align="right""#), "{html}");
}

#[test]
fn host_value_and_placeholder_are_rendered() {
    fn app() -> Element {
        rsx! { IconInput { value: "dog", placeholder: "Find a pet" } }
    }
    let html = render_html(app);
    assert!(html.contains(r#"value="dog""#), "{html}");
    assert!(html.contains(r#"placeholder="Find a pet""#), "{html}");
}

#[test]
fn default_namespace_glyph_draws_immediately() {
    fn app() -> Element {
        rsx! { IconInput { icon: "icons:search", icon_right: true } }
    }
    let html = render_html(app);
    assert!(html.contains(r#"data-resolved="true""#), "{html}");
}

#[test]
fn unloaded_namespace_renders_blank_glyph() {
    fn app() -> Element {
        rsx! { IconInput { icon: "weather:cloud", icon_left: true } }
    }
    let html = render_html(app);
    assert!(html.contains(r#"data-resolved="false""#), "{html}");
    assert!(html.contains("icon-input-glyph-blank"), "{html}");
}

#[test]
fn style_overrides_become_custom_properties() {
    fn app() -> Element {
        let vars = StyleVars::default()
            .with(StyleProperty::Height, "40px")
            .with(StyleProperty::BackgroundColor, "#fafafa");
        rsx! { IconInput { vars: vars } }
    }
    let html = render_html(app);
    assert!(html.contains("--icon-input-height: 40px;"), "{html}");
    assert!(html.contains("--icon-input-background-color: #fafafa;"), "{html}");
    assert!(!html.contains("--icon-input-width"), "{html}");
}

#[test]
fn host_class_is_merged() {
    fn app() -> Element {
        rsx! { IconInput { class: "toolbar-search" } }
    }
    let html = render_html(app);
    assert!(html.contains("icon-input"), "{html}");
    assert!(html.contains("toolbar-search"), "{html}");
}

#[test]
fn listener_renders_children_untouched() {
    fn app() -> Element {
        rsx! {
            NotificationListener {
                on_notification: move |_| {},
                div { id: "outer",
                    NotificationListener {
                        on_notification: move |_| {},
                        IconInput { placeholder: "nested" }
                    }
                }
            }
        }
    }
    let html = render_html(app);
    assert!(html.contains(r#"id="outer""#), "{html}");
    assert!(html.contains(r#"placeholder="nested""#), "{html}");
}
