pub mod console;
pub mod i18n;
pub mod render;
