//! Recovery of a polynomial's constant term from radix-encoded points.
//!
//! ```
//! use secret_core::solve_str;
//!
//! let json = r#"{
//!     "keys": { "n": 3, "k": 3 },
//!     "1": { "base": "10", "value": "3" },
//!     "2": { "base": "2", "value": "110" },
//!     "3": { "base": "16", "value": "b" }
//! }"#;
//! assert_eq!(solve_str(json).unwrap().to_string(), "1");
//! ```

pub mod document;
pub mod error;
pub mod points;
pub mod secret;
pub mod solve;

pub use document::{Document, Entry, Keys, Numeric};
pub use error::{SolveError, SolveResult};
pub use points::PointSet;
pub use secret::Secret;
pub use solve::{solve, solve_reader, solve_str};
