//! Shared UI crate for the Softwivo site. Cross-platform logic and views live here.

pub mod core;
pub mod i18n;
pub mod views;

mod hero;
pub use hero::Hero;

pub mod components {
    // Localized site navbar with the language / theme / hamburger toggles.
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    // Contact form posting to the remote endpoint.
    pub mod contact_form;
    pub use contact_form::ContactForm;

    pub mod site_footer;
    pub use site_footer::SiteFooter;
}
