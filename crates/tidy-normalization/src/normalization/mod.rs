//! Per-cell cleaning rules.
//!
//! Every rule is a pure function from one cell's text to an `Option` of its
//! output type. `None` is the missing marker; no rule ever panics or errors
//! on bad input.

pub mod cipher;
pub mod email;
pub mod monetary;
pub mod percentage;
pub mod phone;
pub mod roman;
pub mod scientific;
pub mod url;

pub use cipher::{decrypt_value, encrypt_value};
pub use email::normalize_email;
pub use monetary::normalize_monetary;
pub use percentage::normalize_percentage;
pub use phone::normalize_phone;
pub use roman::{int_to_roman, roman_to_int};
pub use scientific::normalize_scientific;
pub use url::normalize_url;
