use super::*;

fn note(id: &'static str, read: bool) -> Notification {
    Notification { id, title: "Title", message: "Message", kind: NotificationKind::Info, read, timestamp: "now" }
}

#[test]
fn counts_for_mock_inbox() {
    assert_eq!(notification_counts(MOCK_NOTIFICATIONS), NotificationCounts { unread: 2, all: 3, archived: 0 });
}

#[test]
fn counts_for_empty_list() {
    assert_eq!(notification_counts(&[]), NotificationCounts { unread: 0, all: 0, archived: 0 });
}

#[test]
fn counts_all_read() {
    let items = [note("a", true), note("b", true)];
    assert_eq!(notification_counts(&items).unread, 0);
}

#[test]
fn colors_per_kind() {
    assert_eq!(NotificationKind::Info.color(), "blue");
    assert_eq!(NotificationKind::Warning.color(), "orange");
    assert_eq!(NotificationKind::Success.color(), "green");
    assert_eq!(NotificationKind::Error.color(), "red");
}

#[test]
fn inbox_lists_read_and_unread() {
    let items = tab_items(MOCK_NOTIFICATIONS, NotificationTab::Inbox);
    assert_eq!(items.len(), 3);
    assert!(items.iter().any(|n| n.read));
}

#[test]
fn archived_tab_is_empty() {
    assert!(tab_items(MOCK_NOTIFICATIONS, NotificationTab::Archived).is_empty());
}

#[test]
fn tab_parse_defaults_to_inbox() {
    assert_eq!(NotificationTab::parse("archived"), NotificationTab::Archived);
    assert_eq!(NotificationTab::parse("ARCHIVED"), NotificationTab::Archived);
    assert_eq!(NotificationTab::parse("inbox"), NotificationTab::Inbox);
    assert_eq!(NotificationTab::parse("other"), NotificationTab::Inbox);
}

#[test]
fn unread_badge_hidden_when_all_read() {
    let items = [note("a", true)];
    assert_eq!(NotificationsView::new(&items, NotificationTab::Inbox).unread_badge(), None);
    assert_eq!(NotificationsView::new(MOCK_NOTIFICATIONS, NotificationTab::Inbox).unread_badge(), Some(2));
}

#[test]
fn empty_state_text_per_tab() {
    let inbox = NotificationsView::new(&[], NotificationTab::Inbox);
    assert_eq!(inbox.empty_title(), "No notifications");
    let archived = NotificationsView::new(MOCK_NOTIFICATIONS, NotificationTab::Archived);
    assert_eq!(archived.empty_title(), "No archived notifications");
    assert_eq!(archived.empty_description(), "Archived notifications will appear here.");
}

#[test]
fn initial_is_first_title_letter() {
    assert_eq!(MOCK_NOTIFICATIONS[1].initial(), "C");
    let blank = Notification { title: "", ..note("x", false) };
    assert_eq!(blank.initial(), "");
}
