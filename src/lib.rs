//! # unitconv
//!
//! Unit conversion for engineering data: values are stored in each
//! category's reference unit (m, kg, K, Pa, …) and shown in whatever unit
//! the user picks.
//!
//! ## Highlights
//!
//! * **28 categories, ~330 units**: Length to Massflow, Pressure and a few Custom convenience units
//! * **Affine transforms**: `°C`, `°F` work next to plain scale factors
//! * **Derived units are composed** from their constituents at build time (`km/h = km / h`)
//! * **Soft failure**: an unknown unit is logged and the value returned untouched
//! * **Thread-safe**: the table is built once and read without locks
//!
//! ## Quick example
//!
//! ```
//! use unitconv::{Category, UnitConverter};
//!
//! let conv = UnitConverter::global();
//! let kelvin = conv.to_reference(Category::Temperature, "°C", -59.15)?;
//! assert!((kelvin - 214.0_f64).abs() < 1e-9);
//!
//! for unit in conv.units_of(Category::Velocity) {
//!     let v = conv.from_reference(Category::Velocity, unit, 10.0_f64)?;
//!     println!("10 m/s = {v:.3} {unit}");
//! }
//! # Ok::<(), unitconv::ConversionError>(())
//! ```
//!
//! ## Display units
//!
//! ```
//! use unitconv::{Category, DisplayConverter, DisplayUnits};
//!
//! let conv = DisplayConverter::new(DisplayUnits::engineering());
//! let bar = conv.to_display(Category::Pressure, 101_325.0);
//! assert!((bar - 1.01325).abs() < 1e-12);
//! ```

// ── Internal modules ─────────────────────────────────────────────────
pub mod config;
pub mod error;
pub mod preferences;

// ── Public re-exports ────────────────────────────────────────────────
pub use error::{Result, UnitconvError};
pub use preferences::{DisplayConverter, DisplayUnits, Preset};

pub use converter::{
    AffineTransform, Category, CategoryBuilder, ConversionError, Direction, Formula, Stage,
    TableBuilder, TableError, UnitConverter, UnitTable,
};
