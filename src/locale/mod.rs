//! Locale handling: ordered locale maps and the source/target default resolver.

mod map;
mod resolver;

pub use map::{LocaleEntry, LocaleMap};
pub use resolver::{
    current_field_locale, default_target_locale, prioritized_source_locales,
    source_locale_options, target_locale_options, SourceLocaleStrategy,
};
