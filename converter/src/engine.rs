use std::sync::LazyLock;

use num_traits::Float;
use tracing::warn;

use crate::category::Category;
use crate::error::{ConversionError, Result};
use crate::table::UnitTable;
use crate::transform::AffineTransform;

/// Process-wide converter, built on first access.
static GLOBAL: LazyLock<UnitConverter> = LazyLock::new(UnitConverter::new);

/// Direction of a conversion relative to the category's reference unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Displayed unit → stored reference value.
    ToReference,
    /// Stored reference value → displayed unit.
    FromReference,
}

/// Converts values between named units and their category's reference unit.
///
/// The underlying [`UnitTable`] is read-only, so a converter can be shared
/// freely between threads. Use [`UnitConverter::global`] for the
/// process-wide instance or build one with [`UnitConverter::new`] and pass
/// it to consumers explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitConverter {
    table: UnitTable,
}

impl UnitConverter {
    /// Build the builtin unit table.
    ///
    /// # Panics
    /// If the builtin construction pipeline is inconsistent. This is a
    /// defect in the crate, never a runtime condition.
    pub fn new() -> Self {
        let table = UnitTable::builtin().expect("builtin unit table is consistent");
        Self { table }
    }

    /// Wrap an already-built or deserialized table.
    pub fn from_table(table: UnitTable) -> Self {
        Self { table }
    }

    pub fn global() -> &'static UnitConverter {
        &GLOBAL
    }

    pub fn table(&self) -> &UnitTable {
        &self.table
    }

    // ── Conversion ──────────────────────────────────────────────────

    /// Value in `unit` → value in the reference unit.
    ///
    /// ```
    /// use converter::{Category, UnitConverter};
    ///
    /// let m = UnitConverter::global().to_reference(Category::Length, "km", 1.4).unwrap();
    /// assert!((m - 1400.0_f64).abs() < 1e-9);
    /// ```
    pub fn to_reference<T: Float>(&self, category: Category, unit: &str, value: T) -> Result<T> {
        Ok(self.lookup(category, unit)?.to_reference(value))
    }

    /// Value in the reference unit → value in `unit`.
    pub fn from_reference<T: Float>(&self, category: Category, unit: &str, value: T) -> Result<T> {
        Ok(self.lookup(category, unit)?.from_reference(value))
    }

    pub fn convert<T: Float>(
        &self,
        category: Category,
        unit: &str,
        value: T,
        direction: Direction,
    ) -> Result<T> {
        match direction {
            Direction::ToReference => self.to_reference(category, unit, value),
            Direction::FromReference => self.from_reference(category, unit, value),
        }
    }

    /// Like [`convert`](Self::convert), but an unknown unit hands back the
    /// input unchanged together with `false`.
    pub fn convert_or_passthrough<T: Float>(
        &self,
        category: Category,
        unit: &str,
        value: T,
        direction: Direction,
    ) -> (T, bool) {
        match self.convert(category, unit, value, direction) {
            Ok(v) => (v, true),
            Err(_) => (value, false),
        }
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Unit symbols of `category`, without duplicates. Categories without
    /// a table give an empty list.
    pub fn units_of(&self, category: Category) -> Vec<&str> {
        self.table.units(category)
    }

    /// [`units_of`](Self::units_of) by category name; an unknown name gives
    /// an empty list.
    pub fn units_of_name(&self, category: &str) -> Vec<&str> {
        category
            .parse::<Category>()
            .map(|c| self.units_of(c))
            .unwrap_or_default()
    }

    pub fn transform(&self, category: Category, unit: &str) -> Option<AffineTransform> {
        self.table.transform(category, unit).copied()
    }

    pub fn contains(&self, category: Category, unit: &str) -> bool {
        self.table.transform(category, unit).is_some()
    }

    /// Categories that have units, in table order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.table.categories()
    }

    /// Single lookup point; the only place unknown units are reported.
    fn lookup(&self, category: Category, unit: &str) -> Result<&AffineTransform> {
        self.table.transform(category, unit).ok_or_else(|| {
            warn!(%category, unit, "no such unit in category, no conversion done");
            ConversionError::UnknownUnit { category, unit: unit.to_string() }
        })
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new()
    }
}
