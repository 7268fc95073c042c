pub mod contact;
pub mod lang;
pub mod platform;
pub mod prefs;
pub mod theme;
