use dioxus::prelude::*;

use crate::core::lang::{self, Lang};
use crate::core::prefs::SharedPrefs;
use crate::core::theme::{self, Theme};
use crate::{i18n, t};

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Switch the active language: persist it, mirror it on `<html lang>`,
/// swap the fluent bundle, and nudge the shared signal so every localized
/// component re-renders.
fn select_language(prefs: &SharedPrefs, mut current: Signal<Lang>, next: Lang) {
    lang::set_language(prefs, next);
    let _ = i18n::set_language(next.locale());
    current.set(next);
}

/// One hamburger click flips the menu state.
fn toggled_menu(open: bool) -> bool {
    !open
}

/// Class pair (hamburger, link container) driven by the menu's boolean open
/// state. Both elements carry the `open` class together or not at all.
fn menu_classes(open: bool) -> (&'static str, &'static str) {
    if open {
        ("navbar__hamburger open", "navbar__links open")
    } else {
        ("navbar__hamburger", "navbar__links")
    }
}

/// Site header: brand, section links, language toggle, theme toggle and the
/// mobile hamburger. Open/closed state of the mobile menu is a plain boolean
/// signal reflected onto the `open` class of both the hamburger and the link
/// container; clicking any link closes the menu unconditionally.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let prefs = use_context::<SharedPrefs>();
    let lang_signal = use_context::<Signal<Lang>>();
    let mut theme_signal = use_context::<Signal<Theme>>();
    let mut menu_open = use_signal(|| false);

    // Re-render whenever the language flips.
    let active_lang = lang_signal();
    let theme = theme_signal();

    #[cfg(debug_assertions)]
    println!("[i18n] navbar render lang={}", active_lang.code());

    let theme_label = match theme {
        Theme::Dark => t!("theme-to-light"),
        Theme::Light => t!("theme-to-dark"),
    };

    let toggle_theme = {
        let prefs = prefs.clone();
        move |_| {
            let next = theme_signal().toggled();
            theme::set(&prefs, next);
            theme_signal.set(next);
        }
    };

    let (hamburger_class, links_class) = menu_classes(menu_open());

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    a { class: "navbar__brand-link", href: "#inicio",
                        span { class: "navbar__brand-mark", "Softwivo" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("brand-tagline")} }
                }

                nav { class: "{links_class}",
                    a {
                        class: "navbar__link",
                        href: "#servicios",
                        onclick: move |_| menu_open.set(false),
                        {t!("nav-services")}
                    }
                    a {
                        class: "navbar__link",
                        href: "#nosotros",
                        onclick: move |_| menu_open.set(false),
                        {t!("nav-about")}
                    }
                    a {
                        class: "navbar__link",
                        href: "#contacto",
                        onclick: move |_| menu_open.set(false),
                        {t!("nav-contact")}
                    }
                }

                div { class: "navbar__actions",
                    div {
                        class: "lang-toggle",
                        role: "group",
                        aria_label: t!("nav-language-label"),
                        { Lang::ALL.iter().map(|&lang| {
                            let class = if lang == active_lang { "active" } else { "" };
                            let prefs = prefs.clone();
                            rsx! {
                                button {
                                    key: "{lang.code()}",
                                    class: "{class}",
                                    onclick: move |_| select_language(&prefs, lang_signal, lang),
                                    "{lang.label()}"
                                }
                            }
                        })}
                    }

                    button {
                        class: "theme-toggle",
                        aria_label: "{theme_label}",
                        onclick: toggle_theme,
                        "{theme.toggle_glyph()}"
                    }

                    button {
                        class: "{hamburger_class}",
                        aria_label: t!("nav-menu-label"),
                        aria_expanded: if menu_open() { "true" } else { "false" },
                        onclick: move |_| {
                            let open = menu_open();
                            menu_open.set(toggled_menu(open));
                        },
                        span { class: "navbar__hamburger-bar" }
                        span { class: "navbar__hamburger-bar" }
                        span { class: "navbar__hamburger-bar" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamburger_click_flips_the_open_pair_exactly_once() {
        let mut open = false;
        assert_eq!(menu_classes(open), ("navbar__hamburger", "navbar__links"));

        open = toggled_menu(open);
        assert_eq!(
            menu_classes(open),
            ("navbar__hamburger open", "navbar__links open")
        );

        open = toggled_menu(open);
        assert_eq!(menu_classes(open), ("navbar__hamburger", "navbar__links"));
    }

    #[test]
    fn link_click_always_leaves_the_menu_closed() {
        // The link handler sets the state to closed unconditionally, so the
        // rendered classes lose `open` whatever the prior state was.
        let (hamburger, links) = menu_classes(false);
        assert!(!hamburger.contains("open"));
        assert!(!links.contains("open"));
    }

    #[test]
    fn both_elements_carry_the_open_class_together() {
        let (hamburger, links) = menu_classes(true);
        assert!(hamburger.ends_with(" open"));
        assert!(links.ends_with(" open"));
    }
}
