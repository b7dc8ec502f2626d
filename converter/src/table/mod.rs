//! Unit table and its construction pipeline.
//!
//! The table is built by running an ordered list of [`Stage`]s. Atomic
//! stages hold literal constants; derived stages compose the scales of
//! categories built before them through [`Formula`]s. Every reference is
//! checked while building, so a reordered or incomplete pipeline fails
//! instead of producing silent garbage.

mod atomic;
mod derived;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::Category;
use crate::error::TableError;
use crate::formula::Formula;
use crate::transform::AffineTransform;

type Units = BTreeMap<String, AffineTransform>;

// ────────────────────────────────────────────────────────────────────
//  UnitTable
// ────────────────────────────────────────────────────────────────────

/// Immutable mapping `Category → (unit symbol → AffineTransform)`.
///
/// Deserializing goes through the same scale and offset checks as
/// [`CategoryBuilder`], so a loaded table cannot hold a zero scale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawUnitTable")]
pub struct UnitTable {
    categories: BTreeMap<Category, Units>,
}

/// Serialized shape of [`UnitTable`] before it is checked.
#[derive(Deserialize)]
struct RawUnitTable {
    categories: BTreeMap<Category, Units>,
}

impl TryFrom<RawUnitTable> for UnitTable {
    type Error = TableError;

    fn try_from(raw: RawUnitTable) -> Result<Self, TableError> {
        for (&category, units) in &raw.categories {
            for (unit, t) in units {
                if let Some(scale) = t.scale {
                    check_scale(category, unit, scale)?;
                }
                if let Some(offset) = t.offset {
                    check_offset(category, unit, offset)?;
                }
            }
        }
        Ok(Self { categories: raw.categories })
    }
}

fn check_scale(category: Category, unit: &str, scale: f64) -> Result<(), TableError> {
    if scale == 0.0 || !scale.is_finite() {
        return Err(TableError::DegenerateScale { category, unit: unit.to_string(), scale });
    }
    Ok(())
}

fn check_offset(category: Category, unit: &str, offset: f64) -> Result<(), TableError> {
    if !offset.is_finite() {
        return Err(TableError::NonFiniteOffset { category, unit: unit.to_string(), offset });
    }
    Ok(())
}

impl UnitTable {
    /// Build the table of all builtin categories.
    pub fn builtin() -> Result<Self, TableError> {
        TableBuilder::new().run(&pipeline())
    }

    pub fn transform(&self, category: Category, unit: &str) -> Option<&AffineTransform> {
        self.categories.get(&category)?.get(unit)
    }

    /// Unit symbols of `category`: scale-bearing symbols first, then the
    /// offset-only ones, each group in lexical order.
    pub fn units(&self, category: Category) -> Vec<&str> {
        let Some(units) = self.categories.get(&category) else {
            return Vec::new();
        };
        let scaled = units.iter().filter(|(_, t)| t.scale.is_some());
        let shifted = units.iter().filter(|(_, t)| t.scale.is_none() && t.offset.is_some());
        scaled.chain(shifted).map(|(u, _)| u.as_str()).collect()
    }

    /// Categories that have at least one unit.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ────────────────────────────────────────────────────────────────────
//  Pipeline
// ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// Literal constants; may only reference its own category.
    Atomic,
    /// Composed from categories built earlier.
    Derived,
}

pub type Populate = fn(&mut CategoryBuilder<'_>) -> Result<(), TableError>;

/// One category's step in the build pipeline.
#[derive(Clone, Copy)]
pub struct Stage {
    pub category: Category,
    pub kind: StageKind,
    pub populate: Populate,
}

impl Stage {
    pub const fn atomic(category: Category, populate: Populate) -> Self {
        Self { category, kind: StageKind::Atomic, populate }
    }

    pub const fn derived(category: Category, populate: Populate) -> Self {
        Self { category, kind: StageKind::Derived, populate }
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("category", &self.category)
            .field("kind", &self.kind)
            .finish()
    }
}

/// The builtin pipeline, atomic categories first, derived categories in
/// dependency order.
pub fn pipeline() -> Vec<Stage> {
    use Category::*;
    vec![
        Stage::atomic(Length, atomic::length),
        Stage::atomic(Time, atomic::time),
        Stage::atomic(Mass, atomic::mass),
        Stage::atomic(Temperature, atomic::temperature),
        Stage::atomic(Angle, atomic::angle),
        Stage::atomic(VgvGradients, atomic::vgv_gradients),
        Stage::atomic(VgvGradientsPow2, atomic::vgv_gradients_pow2),
        Stage::atomic(DataSize, atomic::data_size),
        Stage::atomic(NonDimensionalPercentage, atomic::non_dimensional_percentage),
        Stage::atomic(NonDimensional, atomic::non_dimensional),
        Stage::derived(Area, derived::area),
        Stage::derived(Volume, derived::volume),
        Stage::derived(VolumeFlow, derived::volume_flow),
        Stage::derived(Velocity, derived::velocity),
        Stage::derived(MassMomentOfInertia, derived::mass_moment_of_inertia),
        Stage::derived(Massflow, derived::massflow),
        Stage::derived(Density, derived::density),
        Stage::derived(Force, derived::force),
        Stage::derived(Frequency, derived::frequency),
        Stage::derived(Torque, derived::torque),
        Stage::derived(Pressure, derived::pressure),
        Stage::derived(Energy, derived::energy),
        Stage::derived(Power, derived::power),
        Stage::derived(Inertia, derived::inertia),
        Stage::derived(EnergyDensity, derived::energy_density),
        Stage::derived(PowerDensity, derived::power_density),
        Stage::derived(KinematicViscosity, derived::kinematic_viscosity),
        Stage::derived(Custom, derived::custom),
    ]
}

// ────────────────────────────────────────────────────────────────────
//  Builders
// ────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct TableBuilder {
    built: BTreeMap<Category, Units>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `stages` in order and return the finished table.
    pub fn run(mut self, stages: &[Stage]) -> Result<UnitTable, TableError> {
        let mut seen = BTreeSet::new();
        let mut derived_started = false;

        for stage in stages {
            if !seen.insert(stage.category) {
                return Err(TableError::DuplicateCategory(stage.category));
            }
            match stage.kind {
                StageKind::Derived => derived_started = true,
                StageKind::Atomic if derived_started => {
                    return Err(TableError::StageOrder(stage.category));
                }
                StageKind::Atomic => {}
            }

            let mut cat = CategoryBuilder {
                category: stage.category,
                kind: stage.kind,
                built: &self.built,
                units: Units::new(),
            };
            (stage.populate)(&mut cat)?;
            let units = cat.units;

            debug!(category = %stage.category, kind = ?stage.kind, units = units.len(), "unit category built");
            self.built.insert(stage.category, units);
        }

        Ok(UnitTable { categories: self.built })
    }
}

/// Collects the units of a single category while its stage runs.
///
/// Reads of other categories only see stages that already completed.
pub struct CategoryBuilder<'a> {
    category: Category,
    kind: StageKind,
    built: &'a BTreeMap<Category, Units>,
    units: Units,
}

impl CategoryBuilder<'_> {
    pub fn category(&self) -> Category {
        self.category
    }

    /// Set the scale of `unit`.
    pub fn scale(&mut self, unit: &str, scale: f64) -> Result<&mut Self, TableError> {
        check_scale(self.category, unit, scale)?;
        let entry = self.units.entry(unit.to_string()).or_default();
        if entry.scale.is_some() {
            return Err(TableError::DuplicateUnit {
                category: self.category,
                unit: unit.to_string(),
                what: "scale",
            });
        }
        entry.scale = Some(scale);
        Ok(self)
    }

    /// Set the offset of `unit`.
    pub fn offset(&mut self, unit: &str, offset: f64) -> Result<&mut Self, TableError> {
        check_offset(self.category, unit, offset)?;
        let entry = self.units.entry(unit.to_string()).or_default();
        if entry.offset.is_some() {
            return Err(TableError::DuplicateUnit {
                category: self.category,
                unit: unit.to_string(),
                what: "offset",
            });
        }
        entry.offset = Some(offset);
        Ok(self)
    }

    /// Set several literal scales at once.
    pub fn scales(&mut self, entries: &[(&str, f64)]) -> Result<&mut Self, TableError> {
        for (unit, scale) in entries {
            self.scale(unit, *scale)?;
        }
        Ok(self)
    }

    /// Set the scale of `unit` from a formula over already-built units.
    pub fn derive(&mut self, unit: &str, formula: &Formula) -> Result<&mut Self, TableError> {
        let scale = formula.eval(|category, symbol| self.factor(category, symbol))?;
        self.scale(unit, scale)
    }

    /// Effective scale of an already-built unit.
    pub fn factor(&self, category: Category, unit: &str) -> Result<f64, TableError> {
        let units = if category == self.category {
            &self.units
        } else if self.kind == StageKind::Atomic {
            return Err(TableError::ForeignReference { from: self.category, category });
        } else {
            self.built
                .get(&category)
                .ok_or(TableError::NotYetBuilt { from: self.category, category })?
        };

        units
            .get(unit)
            .map(AffineTransform::scale_or_one)
            .ok_or_else(|| TableError::MissingUnit {
                from: self.category,
                category,
                unit: unit.to_string(),
            })
    }
}
