//! Field normalization rules applied before a document is persisted.

mod date;
mod email;
mod error;
mod slug;
mod time;

pub use date::normalize_date;
pub use email::normalize_email;
pub use error::NormalizeError;
pub use slug::slugify;
pub use time::normalize_time;
