//! Delivery inside a mounted tree: the widget's own handlers first, then
//! enclosing listeners from nearest to outermost.

use crate::common::mount;
use dioxus::prelude::*;
use input_core::{dispatch, Notification, NotificationKind};
use input_ui::{use_listener_chain, IconInputHandlers, ListenerChain, NotificationListener};
use pretty_assertions::assert_eq;
use std::cell::RefCell;

thread_local! {
    static HEARD: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    static WIRING: RefCell<Option<(IconInputHandlers, ListenerChain)>> =
        const { RefCell::new(None) };
}

fn record(who: &str, n: &Notification) {
    HEARD.with(|h| h.borrow_mut().push(format!("{who}:{}:{}", n.event_name(), n.value)));
}

fn heard() -> Vec<String> {
    HEARD.with(|h| h.borrow().clone())
}

fn wiring() -> (IconInputHandlers, ListenerChain) {
    WIRING
        .with(|w| w.borrow().clone())
        .expect("emitter mounted")
}

/// Stands in for a widget: owns a full set of handlers and picks up the
/// listeners above it.
#[component]
fn Emitter() -> Element {
    let chain = use_listener_chain();
    let handlers = use_hook(|| IconInputHandlers {
        on_enter_pressed: EventHandler::new(move |n: Notification| record("enter", &n)),
        on_key_pressed: EventHandler::new(move |n: Notification| record("key", &n)),
        on_focus_lost: EventHandler::new(move |n: Notification| record("blur", &n)),
        on_icon_clicked: EventHandler::new(move |n: Notification| record("icon", &n)),
        on_notification: EventHandler::new(move |n: Notification| record("any", &n)),
    });
    use_hook(|| WIRING.with(|w| *w.borrow_mut() = Some((handlers, chain.clone()))));
    rsx! { span { "emitter" } }
}

fn nested() -> Element {
    rsx! {
        NotificationListener {
            on_notification: move |n: Notification| record("outer", &n),
            div {
                NotificationListener {
                    on_notification: move |n: Notification| record("inner", &n),
                    Emitter {}
                }
            }
        }
    }
}

fn bare() -> Element {
    rsx! { Emitter {} }
}

#[test]
fn nearest_listener_hears_first() {
    let dom = mount(nested);
    let (_, chain) = wiring();
    assert_eq!(chain.len(), 2);

    let n = Notification::new(NotificationKind::KeyPressed, "a");
    let no_target: [fn(&Notification); 0] = [];
    let mut reached = 0;
    dom.in_runtime(|| reached = dispatch(&n, &no_target, &chain.sinks()[..]));

    assert_eq!(reached, 2);
    assert_eq!(heard(), vec!["inner:key-pressed:a", "outer:key-pressed:a"]);
}

#[test]
fn each_kind_reaches_its_handler_then_bubbles() {
    let dom = mount(nested);
    let (handlers, chain) = wiring();

    let sent = [
        (NotificationKind::EnterPressed, "enter"),
        (NotificationKind::KeyPressed, "key"),
        (NotificationKind::FocusLost, "blur"),
        (NotificationKind::IconClicked, "icon"),
    ];
    for (kind, _) in sent {
        let n = Notification::new(kind, "cat");
        let mut reached = 0;
        dom.in_runtime(|| reached = handlers.deliver(&n, &chain));
        assert_eq!(reached, 4);
    }

    let expected: Vec<String> = sent
        .iter()
        .flat_map(|(kind, direct)| {
            let event = kind.event_name();
            [
                format!("{direct}:{event}:cat"),
                format!("any:{event}:cat"),
                format!("inner:{event}:cat"),
                format!("outer:{event}:cat"),
            ]
        })
        .collect();
    assert_eq!(heard(), expected);
}

#[test]
fn widget_without_listeners_only_reaches_its_own_handlers() {
    let dom = mount(bare);
    let (handlers, chain) = wiring();
    assert!(chain.is_empty());

    let n = Notification::new(NotificationKind::EnterPressed, "dog");
    let mut reached = 0;
    dom.in_runtime(|| reached = handlers.deliver(&n, &chain));

    assert_eq!(reached, 2);
    assert_eq!(heard(), vec!["enter:enter-pressed:dog", "any:enter-pressed:dog"]);
}
