use dioxus::prelude::*;

use crate::core::lang::Lang;
use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    let _lang = try_use_context::<Signal<Lang>>().map(|signal| signal());

    rsx! {
        footer { class: "site-footer",
            p { {t!("footer-note")} }
        }
    }
}
