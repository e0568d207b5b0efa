//! Query string assembly for endpoint modules.
//!
//! The [`query_params!`](crate::query_params) macro appends one `(key, value)`
//! pair per present parameter. Values are rendered through [`QueryValue`]:
//! booleans as `true`/`false`, timestamps as RFC 3339, lists comma-joined.
//!
//! # Example Usage
//!
//! ```ignore
//! let mut query: Vec<(&'static str, String)> = vec![];
//! query_params! { query =>
//!     "data_set_type" => required options.data_set_type,
//!     "limit" => options.limit,
//!     "record_id" => options.record_id,
//! }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};

/// Query parameter list in insertion order.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Rendering of a value as a query-string parameter.
///
/// Returns `None` when the value should be omitted (an empty list).
pub trait QueryValue {
    fn to_query_value(&self) -> Option<String>;
}

impl QueryValue for bool {
    fn to_query_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl QueryValue for i64 {
    fn to_query_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl QueryValue for f64 {
    fn to_query_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl QueryValue for &str {
    fn to_query_value(&self) -> Option<String> {
        Some((*self).to_string())
    }
}

impl QueryValue for DateTime<Utc> {
    fn to_query_value(&self) -> Option<String> {
        Some(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl QueryValue for Vec<String> {
    fn to_query_value(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.join(","))
        }
    }
}

/// Append query parameters to a `Vec<(&'static str, String)>`.
///
/// # Syntax Patterns
///
/// - `key => expr` - For `Option<T>` where `T: QueryValue`, includes if Some
/// - `key => required expr` - For a required `T: QueryValue`, always includes
#[macro_export]
macro_rules! query_params {
    ($vec:ident =>) => {};

    // Required value - MUST be before generic expr
    ($vec:ident => $key:literal => required $val:expr, $($rest:tt)*) => {
        if let Some(v) = $crate::endpoints::query_params::QueryValue::to_query_value(&$val) {
            $vec.push(($key, v));
        }
        $crate::query_params!($vec => $($rest)*);
    };

    // Option<T> - includes if Some
    ($vec:ident => $key:literal => $val:expr, $($rest:tt)*) => {
        if let Some(ref v) = $val {
            if let Some(v) = $crate::endpoints::query_params::QueryValue::to_query_value(v) {
                $vec.push(($key, v));
            }
        }
        $crate::query_params!($vec => $($rest)*);
    };
}
