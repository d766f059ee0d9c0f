//! Calculatrice scientifique : noyau d’évaluation d’expressions (f64).
//!
//! ```
//! use calculatrice_sci::{evaluate, AngleMode};
//!
//! assert_eq!(evaluate("2+3*4", AngleMode::Degrees), Ok(14.0));
//! ```

pub mod noyau;

pub use noyau::{evaluate, AngleMode, Error};
