use super::*;
use crate::dom::memory::{MemoryNode, MemoryPage};

fn notifier() -> (Rc<MemoryPage>, ToastNotifier<MemoryPage>) {
    let page = Rc::new(MemoryPage::new());
    let notifier = ToastNotifier::new(Rc::clone(&page), &NotificationConfig::default());
    (page, notifier)
}

fn toasts(page: &MemoryPage) -> Vec<MemoryNode> {
    page.select("#notification-container")
        .map(|c| c.children())
        .unwrap_or_default()
}

#[test]
fn level_names_match_toast_classes() {
    assert_eq!(NotificationLevel::Success.as_str(), "success");
    assert_eq!(NotificationLevel::Error.as_str(), "error");
    assert_eq!(NotificationLevel::Info.as_str(), "info");
    assert_eq!(NotificationLevel::Warning.as_str(), "warning");
}

#[test]
fn notify_creates_container_once() {
    let (page, notifier) = notifier();
    notifier.notify("one", NotificationLevel::Info);
    notifier.notify("two", NotificationLevel::Info);

    let body = page.body().unwrap();
    let containers = body
        .children()
        .into_iter()
        .filter(|n| n.id().as_deref() == Some("notification-container"))
        .count();
    assert_eq!(containers, 1);
    assert_eq!(toasts(&page).len(), 2);
}

#[test]
fn toast_carries_level_class_and_message() {
    let (page, notifier) = notifier();
    notifier.notify("Thank you for subscribing!", NotificationLevel::Success);

    let toast = toasts(&page).remove(0);
    assert!(toast.has_class("toast"));
    assert!(toast.has_class("toast-success"));
    assert!(toast.has_class("show"));
    let message = page.select_in(&toast, ".toast-message").unwrap();
    assert_eq!(message.text(), "Thank you for subscribing!");
}

#[test]
fn toast_hides_after_duration_then_detaches_after_fade() {
    let (page, notifier) = notifier();
    notifier.notify("Saved", NotificationLevel::Info);
    assert_eq!(page.pending_timers(), vec![3000]);

    page.run_timers();
    let toast = toasts(&page).remove(0);
    assert!(!toast.has_class("show"));
    assert_eq!(page.pending_timers(), vec![300]);

    page.run_timers();
    assert!(toasts(&page).is_empty());
}

#[test]
fn close_button_removes_toast_immediately() {
    let (page, notifier) = notifier();
    notifier.notify("Oops", NotificationLevel::Error);

    let toast = toasts(&page).remove(0);
    let close = page.select_in(&toast, ".toast-close").unwrap();
    page.click(&close);
    assert!(toasts(&page).is_empty());
}

#[test]
fn removed_toasts_release_their_close_listeners() {
    let (page, notifier) = notifier();
    notifier.notify("closed", NotificationLevel::Info);
    notifier.notify("expired", NotificationLevel::Info);
    assert_eq!(page.listener_count(), 2);

    let closed = toasts(&page).remove(0);
    let close = page.select_in(&closed, ".toast-close").unwrap();
    page.click(&close);
    assert_eq!(page.listener_count(), 1);

    page.run_timers();
    page.run_timers();
    assert_eq!(page.listener_count(), 0);
}

#[test]
fn reuses_existing_container_from_markup() {
    let (page, notifier) = notifier();
    let existing = MemoryNode::new("div").with_id("notification-container");
    page.mount(&existing);

    notifier.notify("hello", NotificationLevel::Warning);
    assert_eq!(existing.children().len(), 1);
}
