//! Internationalization (i18n) support for `softwivo-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   es-ES/softwivo-ui.ftl   (fallback/reference — the site's primary locale)
//!   en-US/softwivo-ui.ftl   (additional locale)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let label = t!("nav-contact");
//! ```
//!
//! Platform notes:
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - Host (tests): uses `DesktopLanguageRequester` (OS locale list).
//! - Assets are always embedded on WASM (`debug-embed` in the
//!   target-specific dependency section).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-contact")
///     t!("hello-user", name = "Ana")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/es-ES/{DOMAIN}.ftl`
const DOMAIN: &str = "softwivo-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "es-ES".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            eprintln!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(lang) => lang,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;
    use serial_test::serial;

    #[test]
    #[serial]
    fn both_site_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "es-ES"));
        assert!(langs.iter().any(|l| l == "en-US"));
    }

    #[test]
    #[serial]
    fn lookup_follows_the_selected_language() {
        init();
        set_language("en-US").expect("en-US is embedded");
        assert_eq!(fl!(&*LOADER, "nav-services"), "Services");

        set_language("es-ES").expect("es-ES is embedded");
        assert_eq!(fl!(&*LOADER, "nav-services"), "Servicios");
    }

    #[test]
    #[serial]
    fn failed_language_switch_keeps_previous_state() {
        init();
        set_language("es-ES").expect("es-ES is embedded");
        let before = fl!(&*LOADER, "contact-submit");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "contact-submit");
        assert_eq!(before, after);
    }
}
