// Where the chosen theme is remembered between visits.
//
// The browser build keeps it in localStorage as the bare theme name,
// tests and non-browser renders use the in-memory variant.

use super::themes::{ThemeParseError, Themes};

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage is not available: {0}")]
    Unavailable(String),

    #[error("stored theme is not recognized")]
    Unrecognized(#[source] ThemeParseError),
}

pub trait ThemeStorage {
    fn load(&self, key: &str) -> Result<Option<Themes>, StorageError>;
    fn store(&self, key: &str, theme: Themes) -> Result<(), StorageError>;
}

pub struct LocalThemeStorage;

impl LocalThemeStorage {
    // Blocked or disabled storage is an error, not a throw.
    fn raw() -> Result<web_sys::Storage, StorageError> {
        gloo_utils::window()
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StorageError::Unavailable("no local storage".into()))
    }
}

impl ThemeStorage for LocalThemeStorage {
    fn load(&self, key: &str) -> Result<Option<Themes>, StorageError> {
        let stored = Self::raw()?
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?;

        stored
            .map(|value| Themes::try_from(value.as_str()))
            .transpose()
            .map_err(StorageError::Unrecognized)
    }

    fn store(&self, key: &str, theme: Themes) -> Result<(), StorageError> {
        Self::raw()?
            .set_item(key, theme.as_str())
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }
}

#[derive(Clone, Default)]
pub struct MemoryThemeStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryThemeStorage {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.set_raw(key, value);
        storage
    }

    pub fn set_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl ThemeStorage for MemoryThemeStorage {
    fn load(&self, key: &str) -> Result<Option<Themes>, StorageError> {
        self.get_raw(key)
            .map(|value| Themes::try_from(value.as_str()))
            .transpose()
            .map_err(StorageError::Unrecognized)
    }

    fn store(&self, key: &str, theme: Themes) -> Result<(), StorageError> {
        self.set_raw(key, theme.as_str());
        Ok(())
    }
}

// Property-friendly handle: equal only to clones of itself.
#[derive(Clone)]
pub struct Persistence(Rc<dyn ThemeStorage>);

impl Persistence {
    pub fn new<S: ThemeStorage + 'static>(storage: S) -> Self {
        Self(Rc::new(storage))
    }

    pub fn local() -> Self {
        Self::new(LocalThemeStorage)
    }

    pub fn memory(storage: MemoryThemeStorage) -> Self {
        Self::new(storage)
    }

    // A failed or unrecognized read falls back to `default`.
    pub fn derive(&self, key: &str, default: Themes) -> Themes {
        match self.0.load(key) {
            Ok(Some(theme)) => theme,
            Ok(None) => default,
            Err(err) => {
                log_storage_error(&err);
                default
            }
        }
    }

    pub fn remember(&self, key: &str, theme: Themes) {
        if let Err(err) = self.0.store(key, theme) {
            log_storage_error(&err);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn log_storage_error(err: &StorageError) {
    gloo_console::log!(format!("theme storage: {err}"));
}

#[cfg(not(target_arch = "wasm32"))]
fn log_storage_error(_err: &StorageError) {}

impl PartialEq for Persistence {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Persistence")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static KEY: &str = "vite-ui-theme";

    #[test]
    fn test_missing_preference_falls_back_to_default() {
        let persistence = Persistence::memory(MemoryThemeStorage::default());

        assert_eq!(persistence.derive(KEY, Themes::Dark), Themes::Dark);
        assert_eq!(persistence.derive(KEY, Themes::Light), Themes::Light);
    }

    #[test]
    fn test_stored_preference_wins() {
        let persistence = Persistence::memory(MemoryThemeStorage::with_entry(KEY, "light"));

        assert_eq!(persistence.derive(KEY, Themes::Dark), Themes::Light);
    }

    #[test]
    fn test_unrecognized_preference_falls_back_to_default() {
        let storage = MemoryThemeStorage::with_entry(KEY, "sepia");

        assert!(matches!(
            storage.load(KEY),
            Err(StorageError::Unrecognized(_))
        ));
        assert_eq!(
            Persistence::memory(storage).derive(KEY, Themes::Dark),
            Themes::Dark
        );
    }

    // Stands in for a browser with storage disabled.
    struct BlockedStorage;

    impl ThemeStorage for BlockedStorage {
        fn load(&self, _key: &str) -> Result<Option<Themes>, StorageError> {
            Err(StorageError::Unavailable("access denied".into()))
        }

        fn store(&self, _key: &str, _theme: Themes) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("access denied".into()))
        }
    }

    #[test]
    fn test_unavailable_storage_falls_back_to_default() {
        let persistence = Persistence::new(BlockedStorage);

        assert_eq!(persistence.derive(KEY, Themes::Dark), Themes::Dark);
        assert_eq!(persistence.derive(KEY, Themes::Light), Themes::Light);
    }

    #[test]
    fn test_remember_on_unavailable_storage_does_not_fail() {
        let persistence = Persistence::new(BlockedStorage);

        persistence.remember(KEY, Themes::Light);

        assert_eq!(persistence.derive(KEY, Themes::Dark), Themes::Dark);
    }

    #[test]
    fn test_remember_uses_given_key_verbatim() {
        let storage = MemoryThemeStorage::default();
        let persistence = Persistence::memory(storage.clone());

        persistence.remember("custom-key", Themes::System);

        assert_eq!(storage.get_raw("custom-key").as_deref(), Some("system"));
        assert_eq!(storage.get_raw(KEY), None);
        assert_eq!(persistence.derive("custom-key", Themes::Dark), Themes::System);
    }

    #[test]
    fn test_persistence_equality_is_identity() {
        let storage = MemoryThemeStorage::default();
        let a = Persistence::memory(storage.clone());
        let b = Persistence::memory(storage);

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
