use dioxus::prelude::*;
use input_core::{Notification, NotificationSink};
use std::rc::Rc;

/// Container-level listeners above a widget, nearest first.
#[derive(Clone, Default)]
pub struct ListenerChain {
    listeners: Rc<Vec<EventHandler<Notification>>>,
}

impl ListenerChain {
    fn extended(&self, nearest: EventHandler<Notification>) -> Self {
        let mut listeners = Vec::with_capacity(self.listeners.len() + 1);
        listeners.push(nearest);
        listeners.extend(self.listeners.iter().copied());
        Self {
            listeners: Rc::new(listeners),
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn sinks(&self) -> Vec<impl NotificationSink> {
        self.listeners.iter().copied().map(handler_sink).collect()
    }
}

/// Adapt an event handler to the delivery interface.
pub fn handler_sink(handler: EventHandler<Notification>) -> impl NotificationSink {
    move |n: &Notification| handler.call(n.clone())
}

/// Listeners registered by enclosing [`NotificationListener`]s.
pub fn use_listener_chain() -> ListenerChain {
    try_use_context::<ListenerChain>().unwrap_or_default()
}

/// Receives every notification emitted by widgets anywhere below it.
///
/// Listeners nest: a notification reaches the innermost listener first and
/// then each enclosing one, so a host can listen once at the container level
/// instead of on each widget.
#[component]
pub fn NotificationListener(
    on_notification: EventHandler<Notification>,
    children: Element,
) -> Element {
    let parent = use_listener_chain();
    use_context_provider(|| parent.extended(on_notification));

    rsx! {
        {children}
    }
}
