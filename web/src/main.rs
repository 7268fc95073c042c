use dioxus::prelude::*;

use ui::components::{AppNavbar, SiteFooter};
use ui::core::lang;
use ui::core::prefs::SharedPrefs;
use ui::core::theme;
use ui::i18n;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    let prefs = use_context_provider(SharedPrefs::platform_default);
    let mut lang_signal = use_context_provider(|| Signal::new(lang::active_language(&prefs)));
    let theme_signal = use_context_provider(|| Signal::new(theme::resolve_initial(&prefs)));

    // One-time wiring on load: persist+mirror the derived language, select
    // the matching fluent bundle, apply the resolved theme (without
    // persisting it) and follow the OS color scheme until the user picks a
    // theme explicitly. Reads go through peek so the effect never re-runs.
    use_effect({
        let prefs = prefs.clone();
        move || {
            let active = *lang_signal.peek();
            lang::set_language(&prefs, active);
            let _ = i18n::set_language(active.locale());
            // Nudge subscribers so the first paint picks up the selected bundle.
            lang_signal.set(active);

            theme::apply(*theme_signal.peek());
            #[cfg(target_arch = "wasm32")]
            theme::watch_system(prefs.clone(), theme_signal);
        }
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web layout: the fixed navbar above the routed content, plus the footer.
#[component]
fn SiteShell() -> Element {
    rsx! {
        AppNavbar {}
        main { class: "site-main", Outlet::<Route> {} }
        SiteFooter {}
    }
}
