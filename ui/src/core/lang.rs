//! Active-language selection, persisted under [`prefs::LANG_KEY`].
//!
//! Spanish is the site's primary language. Without a stored preference the
//! browser locale decides: any `es*` tag selects Spanish, everything else
//! falls back to English.

use super::platform;
use super::prefs::{PrefStore, LANG_KEY};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Es,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Es, Lang::En];

    /// Short code stored in preferences and mirrored on `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    /// Locale tag understood by the fluent loader.
    pub fn locale(self) -> &'static str {
        match self {
            Lang::Es => "es-ES",
            Lang::En => "en-US",
        }
    }

    /// Label shown on the toggle buttons.
    pub fn label(self) -> &'static str {
        match self {
            Lang::Es => "ES",
            Lang::En => "EN",
        }
    }

    /// Parse a stored code or locale tag. Unknown values map to `None` and
    /// are ignored by callers, so a corrupted preference never selects a
    /// language the catalog cannot serve.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "es" | "es-es" | "es-mx" | "es-ar" => Some(Lang::Es),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }
}

/// Map a raw BCP-47 tag from the browser onto a supported language.
pub fn detect(browser_tag: &str) -> Lang {
    if browser_tag.to_ascii_lowercase().starts_with("es") {
        Lang::Es
    } else {
        Lang::En
    }
}

/// Stored preference if present and valid, otherwise the browser locale.
pub fn active_language(store: &dyn PrefStore) -> Lang {
    store
        .get(LANG_KEY)
        .and_then(|code| Lang::from_code(&code))
        .unwrap_or_else(|| detect(&platform::navigator_language().unwrap_or_default()))
}

/// Persist `lang` and mirror it on the document's `lang` attribute.
pub fn set_language(store: &dyn PrefStore, lang: Lang) {
    store.set(LANG_KEY, lang.code());
    platform::set_document_lang(lang.code());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prefs::MemoryPrefs;

    #[test]
    fn detect_maps_spanish_variants_to_primary() {
        assert_eq!(detect("es"), Lang::Es);
        assert_eq!(detect("es-MX"), Lang::Es);
        assert_eq!(detect("ES-AR"), Lang::Es);
    }

    #[test]
    fn detect_falls_back_to_english() {
        assert_eq!(detect("en-US"), Lang::En);
        assert_eq!(detect("fr-FR"), Lang::En);
        assert_eq!(detect(""), Lang::En);
    }

    #[test]
    fn active_language_prefers_stored_value() {
        let store = MemoryPrefs::new();
        store.set(LANG_KEY, "es");
        assert_eq!(active_language(&store), Lang::Es);
    }

    #[test]
    fn unknown_stored_value_is_ignored() {
        let store = MemoryPrefs::new();
        store.set(LANG_KEY, "de");
        // No navigator off-wasm, so detection lands on the fallback.
        assert_eq!(active_language(&store), Lang::En);
    }

    #[test]
    fn set_language_persists_the_short_code() {
        let store = MemoryPrefs::new();
        set_language(&store, Lang::Es);
        assert_eq!(store.get(LANG_KEY), Some("es".to_string()));
    }

    #[test]
    fn set_language_is_idempotent() {
        let store = MemoryPrefs::new();
        set_language(&store, Lang::En);
        set_language(&store, Lang::En);
        assert_eq!(active_language(&store), Lang::En);
    }

    #[test]
    fn codes_roundtrip_through_from_code() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
            assert_eq!(Lang::from_code(lang.locale()), Some(lang));
        }
    }
}
