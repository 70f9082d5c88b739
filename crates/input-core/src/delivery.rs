use crate::event::Notification;

/// Anything that can observe a notification.
pub trait NotificationSink {
    fn deliver(&self, notification: &Notification);
}

impl<F> NotificationSink for F
where
    F: Fn(&Notification),
{
    fn deliver(&self, notification: &Notification) {
        self(notification)
    }
}

/// Deliver to the target's own listeners, then outward through `ancestors`
/// (nearest first) when the notification is allowed past the widget.
///
/// Returns the number of sinks that saw the notification.
pub fn dispatch<T, A>(notification: &Notification, target: &[T], ancestors: &[A]) -> usize
where
    T: NotificationSink,
    A: NotificationSink,
{
    for sink in target {
        sink.deliver(notification);
    }
    if !notification.delivery.reaches_ancestors() {
        tracing::debug!(
            event = notification.event_name(),
            "notification not composed/bubbling; ancestors skipped"
        );
        return target.len();
    }
    for sink in ancestors {
        sink.deliver(notification);
    }
    target.len() + ancestors.len()
}
