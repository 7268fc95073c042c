//! Preference storage shared by the language and theme modules.
//!
//! The site persists exactly two keys. Browser builds keep them in
//! `localStorage`; everything else (and every test) uses an in-memory map so
//! behavior stays deterministic. Modules receive the store through the
//! [`PrefStore`] trait instead of reaching for global storage directly.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key holding the active UI language ("es" / "en").
pub const LANG_KEY: &str = "softwivo-lang";

/// Key holding the explicit theme choice ("light" / "dark"). Stays absent
/// until the user toggles the theme for the first time.
pub const THEME_KEY: &str = "softwivo-theme";

pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store used by tests and non-browser builds.
#[derive(Clone, Default)]
pub struct MemoryPrefs {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// `localStorage`-backed store. Storage failures (private browsing, quota)
/// degrade to "no preference" rather than erroring.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct LocalStoragePrefs;

#[cfg(target_arch = "wasm32")]
impl PrefStore for LocalStoragePrefs {
    fn get(&self, key: &str) -> Option<String> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
        {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Cloneable handle handed to components through context.
#[derive(Clone)]
pub struct SharedPrefs(Rc<dyn PrefStore>);

impl SharedPrefs {
    pub fn new(store: impl PrefStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    /// Store appropriate for the current platform.
    pub fn platform_default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(LocalStoragePrefs)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(MemoryPrefs::new())
        }
    }
}

impl PrefStore for SharedPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.0.set(key, value)
    }
}
