//! Configuration utility types.
//!
//! | Module   | Purpose                                         |
//! |----------|-------------------------------------------------|
//! | `error`  | Schema, lookup, and loading errors; diagnostics |
//! | `field`  | Field paths reported with every diagnostic      |

mod error;
mod field;

pub use error::{ConfigDiagnostics, ConfigError, ConfigWarning, NotFoundError, SchemaError};
pub use field::FieldPath;
