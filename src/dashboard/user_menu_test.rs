use super::*;

fn labels(items: &[MenuItem]) -> Vec<&'static str> {
    items.iter().map(|item| item.label).collect()
}

#[test]
fn light_mode_offers_dark_mode() {
    assert_eq!(labels(&menu_items(ColorMode::Light)), vec!["My Profile", "Account Settings", "Dark Mode", "Help & Support"]);
}

#[test]
fn dark_mode_offers_light_mode() {
    let items = menu_items(ColorMode::Dark);
    let theme = items.iter().find(|item| item.id == "theme").unwrap();
    assert_eq!(theme.label, "Light Mode");
    assert_eq!(theme.icon, "sun");
    assert!(theme.is_post());
}

#[test]
fn sign_out_posts_to_logout() {
    assert_eq!(SIGN_OUT.href(), "/logout");
    assert!(SIGN_OUT.is_post());
    assert!(SIGN_OUT.danger);
}

#[test]
fn settings_item_opens_settings_modal() {
    let items = menu_items(ColorMode::Light);
    let settings = items.iter().find(|item| item.id == "settings").unwrap();
    assert_eq!(settings.href(), "/?settings=open");
    assert!(!settings.is_post());
}

#[test]
fn initials_use_first_and_last_words() {
    assert_eq!(initials("John Doe"), "JD");
    assert_eq!(initials("mary ann smith"), "MS");
    assert_eq!(initials("Administrator"), "A");
    assert_eq!(initials("   "), "");
}

#[test]
fn view_uses_signed_in_user() {
    let user = User { email: "admin".to_owned(), name: "Administrator".to_owned() };
    let view = UserMenuView::new(Some(&user), ColorMode::Light);
    assert_eq!(view.name, "Administrator");
    assert_eq!(view.email, "admin");
    assert_eq!(view.initials, "A");
}

#[test]
fn view_falls_back_without_user() {
    let view = UserMenuView::new(None, ColorMode::Dark);
    assert_eq!(view.name, "John Doe");
    assert_eq!(view.email, "john.doe@example.com");
    assert_eq!(view.initials, "JD");
}
