//! Light/dark theme handling, persisted under [`prefs::THEME_KEY`].
//!
//! The stored key stays absent until the user explicitly toggles. While it
//! is absent the site follows the operating-system color scheme, including
//! live `prefers-color-scheme` changes; the first explicit choice wins over
//! every later system change.

use super::platform;
use super::prefs::{PrefStore, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph on the toggle button. Advertises the *next* action, so dark
    /// mode shows the sun.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Dark => "\u{2600}\u{fe0f}",
            Theme::Light => "\u{1f319}",
        }
    }
}

/// Explicit stored choice, if any. Unknown values are treated as absent.
pub fn stored_theme(store: &dyn PrefStore) -> Option<Theme> {
    store.get(THEME_KEY).as_deref().and_then(Theme::from_str)
}

/// Stored preference if present, otherwise the OS color scheme.
pub fn resolve_initial(store: &dyn PrefStore) -> Theme {
    stored_theme(store).unwrap_or_else(platform::system_theme)
}

/// Reflect `theme` on `<html data-theme>`. Does not persist.
pub fn apply(theme: Theme) {
    platform::set_document_theme(theme.as_str());
}

/// Persist and apply an explicit user choice.
pub fn set(store: &dyn PrefStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
    apply(theme);
}

/// Decide what to do when the OS scheme flips. The store is consulted at
/// event-fire time, so an explicit [`set`] made at any earlier point
/// permanently silences system changes.
pub fn on_system_change(store: &dyn PrefStore, system: Theme) -> Option<Theme> {
    if stored_theme(store).is_none() {
        Some(system)
    } else {
        None
    }
}

/// Follow `prefers-color-scheme` changes for the rest of the page session.
#[cfg(target_arch = "wasm32")]
pub fn watch_system(store: crate::core::prefs::SharedPrefs, mut applied: dioxus::prelude::Signal<Theme>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(query) = platform::prefers_dark_query() else {
        return;
    };

    let closure = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        move |event: web_sys::MediaQueryListEvent| {
            let system = if event.matches() {
                Theme::Dark
            } else {
                Theme::Light
            };
            if let Some(next) = on_system_change(&store, system) {
                apply(next);
                applied.set(next);
            }
        },
    );
    query.set_onchange(Some(closure.as_ref().unchecked_ref()));
    // The listener lives for the whole page session.
    closure.forget();
}
