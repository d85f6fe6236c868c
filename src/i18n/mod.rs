//! Localized strings for the translate action.
//!
//! - `messages`: the fixed set of message IDs the core selects from
//! - `strings`: bundled English, Spanish and Brazilian Portuguese strings
//! - `catalog`: locale lookup with base-language and English fallback
//!
//! # Example
//!
//! ```rust,ignore
//! use field_translate::i18n::{MessageCatalog, MessageId};
//!
//! let title = MessageCatalog::get().message("pt-br", MessageId::ModalTitle);
//! ```

mod catalog;
mod messages;
mod strings;

pub use catalog::{CatalogEntry, MessageCatalog, FALLBACK_LOCALE};
pub use messages::MessageId;
pub use strings::MessageStrings;
