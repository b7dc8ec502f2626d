use std::collections::BTreeMap;
use std::str::FromStr;

use converter::{Category, ConversionError, Direction, UnitConverter};
use serde::{Deserialize, Serialize};

use crate::error::{Result, UnitconvError};

// ────────────────────────────────────────────────────────────────────
//  Presets
// ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Si,
    Engineering,
    Imperial,
}

impl FromStr for Preset {
    type Err = UnitconvError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "si" => Ok(Preset::Si),
            "engineering" => Ok(Preset::Engineering),
            "imperial" => Ok(Preset::Imperial),
            _ => Err(UnitconvError::InvalidPreset(s.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  DisplayUnits: which unit each category is shown in
// ────────────────────────────────────────────────────────────────────

/// The unit a consumer displays for each category.
///
/// Values are always stored in the reference unit; categories without an
/// entry are displayed in it as well.
///
/// ```
/// use unitconv::{Category, DisplayUnits};
///
/// let units = DisplayUnits::si()
///     .with(Category::Temperature, "°C")
///     .with(Category::Pressure, "bar");
/// assert_eq!(units.unit(Category::Pressure), Some("bar"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayUnits {
    units: BTreeMap<Category, String>,
}

impl DisplayUnits {
    /// No explicit choices: everything displays in its reference unit.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Si => Self::si(),
            Preset::Engineering => Self::engineering(),
            Preset::Imperial => Self::imperial(),
        }
    }

    // ── Presets ──────────────────────────────────────────────────────

    /// Reference units for every category that has a table.
    pub fn si() -> Self {
        Category::ALL
            .into_iter()
            .filter(|c| c.has_units() && *c != Category::Custom)
            .fold(Self::new(), |u, c| u.with(c, c.reference_unit()))
    }

    /// Workshop units: °C, bar, km/h, kJ/kg, kg/h, mm, g/cm³, kW, rpm.
    pub fn engineering() -> Self {
        Self::si()
            .with(Category::Temperature, "°C")
            .with(Category::Pressure, "bar")
            .with(Category::Velocity, "km/h")
            .with(Category::EnergyDensity, "kJ/kg")
            .with(Category::Massflow, "kg/h")
            .with(Category::Length, "mm")
            .with(Category::Density, "g/cm^3")
            .with(Category::Power, "kW")
            .with(Category::Frequency, "rpm")
            .with(Category::Angle, "deg")
    }

    /// US customary units.
    pub fn imperial() -> Self {
        Self::si()
            .with(Category::Length, "ft")
            .with(Category::Area, "ft^2")
            .with(Category::Volume, "gal")
            .with(Category::Temperature, "°F")
            .with(Category::Mass, "lbm")
            .with(Category::Massflow, "lbm/s")
            .with(Category::Density, "lbm/ft^3")
            .with(Category::Force, "lbf")
            .with(Category::Torque, "lbf*ft")
            .with(Category::Pressure, "psi")
            .with(Category::Velocity, "mph")
            .with(Category::Energy, "BTU")
            .with(Category::Power, "hp")
    }

    // ── Builder ──────────────────────────────────────────────────────

    pub fn with(mut self, category: Category, unit: impl Into<String>) -> Self {
        self.units.insert(category, unit.into());
        self
    }

    /// Drop the choice for `category` so it falls back to the reference unit.
    pub fn without(mut self, category: Category) -> Self {
        self.units.remove(&category);
        self
    }

    pub fn unit(&self, category: Category) -> Option<&str> {
        self.units.get(&category).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        self.units.iter().map(|(c, u)| (*c, u.as_str()))
    }

    /// Check every chosen unit against `engine`'s table.
    pub fn validate(&self, engine: &UnitConverter) -> Result<()> {
        match self.iter().find(|(c, u)| !engine.contains(*c, u)) {
            Some((category, unit)) => Err(ConversionError::UnknownUnit {
                category,
                unit: unit.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  DisplayConverter: DisplayUnits + engine
// ────────────────────────────────────────────────────────────────────

/// Converts between stored reference values and the consumer's display
/// units.
#[derive(Debug, Clone)]
pub struct DisplayConverter<'a> {
    pub units: DisplayUnits,
    engine: &'a UnitConverter,
}

impl DisplayConverter<'static> {
    /// Use the process-wide engine.
    pub fn new(units: DisplayUnits) -> Self {
        Self { units, engine: UnitConverter::global() }
    }

    /// Everything in reference units.
    pub fn identity() -> Self {
        Self::new(DisplayUnits::new())
    }
}

impl<'a> DisplayConverter<'a> {
    pub fn with_engine(units: DisplayUnits, engine: &'a UnitConverter) -> Self {
        Self { units, engine }
    }

    /// Stored reference value → displayed value.
    ///
    /// Categories without a chosen unit, and unknown units, give the value
    /// back unchanged.
    pub fn to_display(&self, category: Category, value: f64) -> f64 {
        self.apply(category, value, Direction::FromReference)
    }

    /// Displayed value → stored reference value.
    pub fn from_display(&self, category: Category, value: f64) -> f64 {
        self.apply(category, value, Direction::ToReference)
    }

    /// Displayed unit label for `category`.
    pub fn label(&self, category: Category) -> &str {
        self.units.unit(category).unwrap_or(category.reference_unit())
    }

    fn apply(&self, category: Category, value: f64, direction: Direction) -> f64 {
        match self.units.unit(category) {
            Some(unit) => self.engine.convert_or_passthrough(category, unit, value, direction).0,
            None => value,
        }
    }
}
