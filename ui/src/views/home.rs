use dioxus::prelude::*;

use crate::components::ContactForm;
use crate::core::lang::Lang;
use crate::{t, Hero};

#[cfg(debug_assertions)]
fn log_home_render(lang: Option<Lang>) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Home render (lang={lang:?})");
}

/// The whole site is one page: hero plus the three anchored sections the
/// navbar links to.
#[component]
pub fn Home() -> Element {
    // Subscribe to the shared language signal so copy re-renders on switch.
    let lang_signal = try_use_context::<Signal<Lang>>();
    let _lang_current = lang_signal.as_ref().map(|signal| signal());

    #[cfg(debug_assertions)]
    log_home_render(_lang_current);

    rsx! {
        Hero {}

        section { id: "servicios", class: "page-section services",
            h2 { {t!("services-title")} }
            div { class: "services__grid",
                article { class: "service-card",
                    h3 { {t!("service-web-title")} }
                    p { {t!("service-web-desc")} }
                }
                article { class: "service-card",
                    h3 { {t!("service-cloud-title")} }
                    p { {t!("service-cloud-desc")} }
                }
                article { class: "service-card",
                    h3 { {t!("service-support-title")} }
                    p { {t!("service-support-desc")} }
                }
            }
        }

        section { id: "nosotros", class: "page-section about",
            h2 { {t!("about-title")} }
            p { {t!("about-body")} }
        }

        section { id: "contacto", class: "page-section contact",
            h2 { {t!("contact-title")} }
            ContactForm {}
        }
    }
}
