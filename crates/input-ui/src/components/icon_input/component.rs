use crate::components::glyph::Glyph;
use crate::components::notification_listener::{handler_sink, use_listener_chain, ListenerChain};
use crate::icons::request_icon_set;
use dioxus::prelude::*;
use input_core::{
    dispatch, render, FlagSet, IconRef, InputSurface, KeyInput, Notification, NotificationKind,
    RawEvent, StyleVars, Translation, WidgetState, DEFAULT_PLACEHOLDER,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// The outbound handlers of one [`IconInput`].
#[derive(Clone, Copy, Default)]
pub struct IconInputHandlers {
    pub on_enter_pressed: EventHandler<Notification>,
    pub on_key_pressed: EventHandler<Notification>,
    pub on_focus_lost: EventHandler<Notification>,
    pub on_icon_clicked: EventHandler<Notification>,
    pub on_notification: EventHandler<Notification>,
}

impl IconInputHandlers {
    /// The handler named after `kind`.
    pub fn direct(&self, kind: NotificationKind) -> EventHandler<Notification> {
        match kind {
            NotificationKind::EnterPressed => self.on_enter_pressed,
            NotificationKind::KeyPressed => self.on_key_pressed,
            NotificationKind::FocusLost => self.on_focus_lost,
            NotificationKind::IconClicked => self.on_icon_clicked,
        }
    }

    /// Deliver to the matching `on_*` handler, then `on_notification`, then
    /// each listener in `chain`. Returns how many handlers saw it.
    pub fn deliver(&self, notification: &Notification, chain: &ListenerChain) -> usize {
        let target = [
            handler_sink(self.direct(notification.kind)),
            handler_sink(self.on_notification),
        ];
        dispatch(notification, &target, &chain.sinks()[..])
    }
}

/// Text input with an optional icon and a fixed set of outbound events.
///
/// The icon is hidden unless `icon_left` or `icon_right` is set; when both
/// are set the side switched on last wins (right, if they arrive together). Every notification carries the input's
/// content at the moment of the triggering event and reaches, in order, the
/// matching `on_*` handler, `on_notification`, and each enclosing
/// [`NotificationListener`](crate::NotificationListener).
///
/// ```rust,ignore
/// rsx! {
///     IconInput {
///         icon: "hardware:headset",
///         icon_left: true,
///         on_enter_pressed: move |n: Notification| query.set(n.value),
///     }
/// }
/// ```
#[component]
pub fn IconInput(
    #[props(default)] value: String,
    #[props(default = DEFAULT_PLACEHOLDER.to_string())] placeholder: String,
    #[props(default, into)] icon: IconRef,
    #[props(default)] icon_left: bool,
    #[props(default)] icon_right: bool,
    #[props(default)] text_left: bool,
    #[props(default)] text_right: bool,
    #[props(default)] vars: StyleVars,
    #[props(default)] on_enter_pressed: EventHandler<Notification>,
    #[props(default)] on_key_pressed: EventHandler<Notification>,
    #[props(default)] on_focus_lost: EventHandler<Notification>,
    #[props(default)] on_icon_clicked: EventHandler<Notification>,
    #[props(default)] on_notification: EventHandler<Notification>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut surface = use_signal(|| InputSurface::new(value.clone()));
    let first_commit_done = use_hook(|| Rc::new(Cell::new(false)));
    let flags = FlagSet {
        icon_left,
        icon_right,
        text_left,
        text_right,
    };
    // Flags seen on the previous render and the layout they produced. Kept
    // across renders so a side switched on later beats one already set.
    let layout = use_hook(|| {
        Rc::new(RefCell::new((flags, WidgetState::default().with_flags(flags))))
    });
    let chain = use_listener_chain();

    // A host write to `value` replaces what the input shows.
    use_effect(use_reactive((&value,), move |(value,)| {
        if surface.peek().content() != value {
            surface.write().record_input(value);
        }
    }));

    let handlers = IconInputHandlers {
        on_enter_pressed,
        on_key_pressed,
        on_focus_lost,
        on_icon_clicked,
        on_notification,
    };
    let emit = use_callback(move |translation: Translation| {
        let notification = translation.notification;
        tracing::trace!(event = notification.event_name(), value = %notification.value, "emit");
        handlers.deliver(&notification, &chain);
    });

    let (icon_position, text_align) = {
        let mut current = layout.borrow_mut();
        let (seen, placed) = &mut *current;
        placed.sync_flags(*seen, flags);
        *seen = flags;
        (placed.icon_position, placed.text_align)
    };
    let state = WidgetState {
        value: surface.read().content().to_string(),
        placeholder,
        icon,
        icon_position,
        text_align,
    };
    let view = render(&state);

    let mut base = vec![
        Attribute::new("class", view.host.class, None, false),
        Attribute::new("data-icon-position", view.host.icon_position, None, false),
    ];
    if let Some(align) = view.host.text_align {
        base.push(Attribute::new("data-text-align", align, None, false));
    }
    if !vars.is_empty() {
        base.push(Attribute::new("style", vars.inline_style(), None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let first_icon = view.icon.icon.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            Glyph {
                icon: view.icon.icon.clone(),
                hidden: view.icon.hidden,
                onclick: move |_| emit.call(surface.peek().translate(&RawEvent::IconActivated)),
            }
            input {
                r#type: view.input.input_type,
                value: "{view.input.value}",
                placeholder: "{view.input.placeholder}",
                "data-align": view.input.text_align.as_str(),
                "data-reserve": view.input.reserve_padding.as_str(),
                oninput: move |evt: FormEvent| surface.write().record_input(evt.value()),
                onkeyup: move |evt: KeyboardEvent| {
                    let key = match evt.key() {
                        Key::Enter => KeyInput::Enter,
                        other => KeyInput::Other(other.to_string()),
                    };
                    let translation = surface.peek().translate(&RawEvent::KeyUp(key));
                    if translation.prevent_default {
                        evt.prevent_default();
                    }
                    emit.call(translation);
                },
                onblur: move |_| emit.call(surface.peek().translate(&RawEvent::FocusOut)),
                onmounted: move |_| {
                    // Runs after the first commit only; later mounts of the
                    // same instance never re-resolve.
                    if !first_commit_done.replace(true) {
                        let decision = request_icon_set(&first_icon);
                        tracing::debug!(icon = %first_icon, ?decision, "icon set resolved");
                    }
                },
            }
        }
    }
}
