pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod i18n;
pub mod locale;
