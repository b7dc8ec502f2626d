//! Category-based unit conversion.
//!
//! Every value is stored in its category's **reference unit** (m, s, kg,
//! K, Pa, …). Each other unit is related to it by an affine transform
//! `unit = reference · scale + offset`. This crate holds the table of those
//! transforms and converts in both directions.
//!
//! | Category    | Reference | Examples                      |
//! |-------------|-----------|-------------------------------|
//! | Length      | m         | km, mm, ft, inch, mi          |
//! | Temperature | K         | °C, °F, °Ra                   |
//! | Pressure    | Pa        | bar, kPa, psi, atm, mmHg      |
//! | Velocity    | m/s       | km/h, mph, kn, ft/s           |
//! | Massflow    | kg/s      | kg/h, lbm/s, (tn. sh.)/min    |
//!
//! # Example
//!
//! ```
//! use converter::{Category, Direction, UnitConverter};
//!
//! let conv = UnitConverter::global();
//! let pa = conv.to_reference(Category::Pressure, "bar", 14.0)?;
//! assert!((pa - 1_400_000.0_f64).abs() < 1e-6);
//!
//! // Soft failure: the value comes back untouched.
//! let (v, ok) = conv.convert_or_passthrough(Category::Length, "bogus", 5.0, Direction::ToReference);
//! assert_eq!((v, ok), (5.0, false));
//! # Ok::<(), converter::ConversionError>(())
//! ```
//!
//! Unknown units are reported through a `tracing` warning; the crate never
//! installs a subscriber itself.

mod category;
mod engine;
mod error;
mod formula;
mod table;
mod transform;

pub use category::Category;
pub use engine::{Direction, UnitConverter};
pub use error::{ConversionError, Result, TableError};
pub use formula::Formula;
pub use table::{CategoryBuilder, Populate, Stage, StageKind, TableBuilder, UnitTable, pipeline};
pub use transform::AffineTransform;
