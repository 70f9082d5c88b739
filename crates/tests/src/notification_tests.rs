//! Raw input sequences through translation and delivery, observed by a
//! direct listener and by container-level listeners.

use crate::common::{summary, Harness};
use input_core::{KeyInput, RawEvent};
use pretty_assertions::assert_eq;

#[test]
fn typing_then_enter_reports_literal_content() {
    let mut h = Harness::new(0);
    h.type_text("cat");
    let suppressed = h.raw(RawEvent::KeyUp(KeyInput::Enter));

    assert!(suppressed);
    assert_eq!(summary(&h.direct).last().cloned(), Some(("enter-pressed", "cat".to_string())));
}

#[test]
fn each_key_release_is_reported_in_order() {
    let mut h = Harness::new(0);
    h.type_text("ab");
    assert_eq!(
        summary(&h.direct),
        vec![("key-pressed", "a".to_string()), ("key-pressed", "ab".to_string())]
    );
}

#[test]
fn single_key_value_is_the_content_after_that_key() {
    let mut h = Harness::new(0);
    h.surface.record_input("a");
    h.raw(RawEvent::KeyUp(KeyInput::from_name("a")));
    h.surface.record_input("b");
    h.raw(RawEvent::KeyUp(KeyInput::from_name("b")));
    assert_eq!(
        summary(&h.direct),
        vec![("key-pressed", "a".to_string()), ("key-pressed", "b".to_string())]
    );
}

#[test]
fn blur_emits_exactly_one_focus_lost() {
    let mut h = Harness::new(0);
    h.type_text("x");
    h.direct.borrow_mut().clear();
    h.raw(RawEvent::FocusOut);
    assert_eq!(summary(&h.direct), vec![("focus-lost", "x".to_string())]);
}

#[test]
fn blur_without_edits_still_fires() {
    let mut h = Harness::new(0);
    h.raw(RawEvent::FocusOut);
    h.raw(RawEvent::FocusOut);
    assert_eq!(
        summary(&h.direct),
        vec![("focus-lost", String::new()), ("focus-lost", String::new())]
    );
}

#[test]
fn modifier_keys_are_reported() {
    let mut h = Harness::new(0);
    h.type_text("q");
    let suppressed = h.raw(RawEvent::KeyUp(KeyInput::from_name("Shift")));
    assert!(!suppressed);
    assert_eq!(summary(&h.direct).last().cloned(), Some(("key-pressed", "q".to_string())));
}

#[test]
fn icon_click_reports_current_content() {
    let mut h = Harness::new(0);
    h.type_text("lamp");
    h.raw(RawEvent::IconActivated);
    assert_eq!(summary(&h.direct).last().cloned(), Some(("icon-clicked", "lamp".to_string())));
}

#[test]
fn every_notification_reaches_all_ancestors() {
    let mut h = Harness::new(2);
    h.type_text("hi");
    h.raw(RawEvent::KeyUp(KeyInput::Enter));
    h.raw(RawEvent::FocusOut);
    h.raw(RawEvent::IconActivated);

    let direct = summary(&h.direct);
    assert_eq!(direct.len(), 5);
    for ancestor in &h.ancestors {
        assert_eq!(summary(ancestor), direct);
    }
}

#[test]
fn notifications_are_stamped_in_order() {
    let mut h = Harness::new(0);
    h.type_text("abc");
    let received = h.direct.borrow();
    assert!(received.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    assert!(received.iter().all(|n| n.delivery.bubbles && n.delivery.composed));
}
