use super::*;
use crate::storage::MemoryStore;

#[test]
fn missing_preference_is_light() {
    assert_eq!(read_preference(&MemoryStore::new()), ColorMode::Light);
}

#[test]
fn unknown_preference_is_light() {
    let store = MemoryStore::new();
    store.set(COLOR_MODE_STORAGE_KEY, "sepia").unwrap();
    assert_eq!(read_preference(&store), ColorMode::Light);
}

#[test]
fn stored_dark_is_read_back() {
    let store = MemoryStore::new();
    store.set(COLOR_MODE_STORAGE_KEY, "dark").unwrap();
    assert_eq!(read_preference(&store), ColorMode::Dark);
}

#[test]
fn toggle_flips_and_persists() {
    let store = MemoryStore::new();
    assert_eq!(toggle(&store).unwrap(), ColorMode::Dark);
    assert_eq!(store.get(COLOR_MODE_STORAGE_KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(toggle(&store).unwrap(), ColorMode::Light);
    assert_eq!(read_preference(&store), ColorMode::Light);
}

#[test]
fn toggled_is_an_involution() {
    for mode in [ColorMode::Light, ColorMode::Dark] {
        assert_eq!(mode.toggled().toggled(), mode);
        assert_eq!(ColorMode::parse(mode.as_str()), Some(mode));
    }
}
