use dioxus::prelude::*;

use crate::core::lang::Lang;
use crate::t;

#[component]
pub fn Hero() -> Element {
    let _lang = try_use_context::<Signal<Lang>>().map(|signal| signal());

    rsx! {
        section { id: "inicio", class: "hero",
            h1 { class: "hero__title", {t!("hero-title")} }
            p { class: "hero__subtitle", {t!("hero-subtitle")} }
            a { class: "button button--primary hero__cta", href: "#contacto", {t!("hero-cta")} }
        }
    }
}
