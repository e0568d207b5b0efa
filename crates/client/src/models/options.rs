//! Shared helpers for request option structs.
//!
//! Every operation has an options struct built with `new(required..)` and
//! chainable setters for its optional members. Options are checked with
//! `validate()` when the call is made, before any request is built.

use crate::error::{ClientError, Result};

/// Per-call header overrides.
pub type Headers = std::collections::HashMap<String, String>;

/// Generate chainable setters for the optional members of an options struct.
///
/// Each listed field must be declared as `Option<T>`; the setter accepts
/// anything convertible into `T`. A `headers()` setter is always generated.
macro_rules! option_setters {
    ($options:ty { $($field:ident: $value:ty),* $(,)? }) => {
        impl $options {
            $(
                #[doc = concat!("Set `", stringify!($field), "`.")]
                pub fn $field(mut self, value: impl Into<$value>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            /// Add or override request headers for this call.
            pub fn headers(mut self, headers: $crate::models::Headers) -> Self {
                self.headers = Some(headers);
                self
            }
        }
    };
}

pub(crate) use option_setters;

/// Reject an empty required string.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!("{field} must be provided")));
    }
    Ok(())
}

/// Reject an empty required list.
pub(crate) fn require_items<T>(field: &'static str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(ClientError::Validation(format!(
            "{field} must contain at least one item"
        )));
    }
    Ok(())
}
