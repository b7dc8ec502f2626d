use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// Physical-quantity category.
///
/// Every category has a reference unit (see [`Category::reference_unit`])
/// in which values are stored; the other units of the category are related
/// to it by an affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Length (m)
    Length,
    /// Area (m^2)
    Area,
    /// Volume (m^3)
    Volume,
    /// Time (s)
    Time,
    /// Volume flow (m^3/s)
    VolumeFlow,
    /// Temperature (K); the only category with offset units
    Temperature,
    /// Plane angle (rad)
    Angle,
    /// Velocity (m/s)
    Velocity,
    /// Mass (kg)
    Mass,
    /// Mass moment of inertia (kg*m^2)
    MassMomentOfInertia,
    /// Gradients of variable guide vane schedules (per degree)
    VgvGradients,
    /// Second-order VGV gradients (per degree squared)
    VgvGradientsPow2,
    /// Mass flow (kg/s)
    Massflow,
    /// Density (kg/m^3)
    Density,
    /// Force (N)
    Force,
    /// Frequency (1/s)
    Frequency,
    /// Torque (N*m)
    Torque,
    /// Pressure (Pa)
    Pressure,
    /// Energy (J)
    Energy,
    /// Power (W)
    Power,
    /// Rotational inertia (kg*m^2), listed separately from
    /// [`MassMomentOfInertia`](Category::MassMomentOfInertia)
    Inertia,
    /// Energy per mass (J/kg)
    EnergyDensity,
    /// Power per mass (W/kg)
    PowerDensity,
    /// Kinematic viscosity (m^2/s)
    KinematicViscosity,
    /// Data size (KB)
    DataSize,
    /// Plain ratio (-)
    NonDimensional,
    /// Ratio shown as a fraction or a percentage (-)
    NonDimensionalPercentage,
    /// Convenience units combining unrelated dimensions.
    Custom,
    // ── Categories without a unit table ──────────────────────────────
    /// Untyped values
    Default,
    /// Specific energy (J/kg), no unit table
    SpecificEnergy,
    /// Specific heat capacity (J/(kg*K)), no unit table
    SpecificEnergyPerTemperature,
    /// Heat transfer coefficient (W/(m^2*K)), no unit table
    PowerTempArea,
}

impl Category {
    pub const ALL: [Category; 32] = [
        Category::Length,
        Category::Area,
        Category::Volume,
        Category::Time,
        Category::VolumeFlow,
        Category::Temperature,
        Category::Angle,
        Category::Velocity,
        Category::Mass,
        Category::MassMomentOfInertia,
        Category::VgvGradients,
        Category::VgvGradientsPow2,
        Category::Massflow,
        Category::Density,
        Category::Force,
        Category::Frequency,
        Category::Torque,
        Category::Pressure,
        Category::Energy,
        Category::Power,
        Category::Inertia,
        Category::EnergyDensity,
        Category::PowerDensity,
        Category::KinematicViscosity,
        Category::DataSize,
        Category::NonDimensional,
        Category::NonDimensionalPercentage,
        Category::Custom,
        Category::Default,
        Category::SpecificEnergy,
        Category::SpecificEnergyPerTemperature,
        Category::PowerTempArea,
    ];

    /// Human-readable name, as shown next to unit selectors.
    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Area => "Area",
            Category::Volume => "Volume",
            Category::Time => "Time",
            Category::VolumeFlow => "VolumeFlow",
            Category::Temperature => "Temperature",
            Category::Angle => "Angle",
            Category::Velocity => "Velocity",
            Category::Mass => "Mass",
            Category::MassMomentOfInertia => "Mass Moment of Inertia",
            Category::VgvGradients => "VGV Gradients",
            Category::VgvGradientsPow2 => "VGV Gradients Pow2",
            Category::Massflow => "Massflow",
            Category::Density => "Density",
            Category::Force => "Force",
            Category::Frequency => "Frequency",
            Category::Torque => "Torque",
            Category::Pressure => "Pressure",
            Category::Energy => "Energy",
            Category::Power => "Power",
            Category::Inertia => "Inertia",
            Category::EnergyDensity => "EnergyDensity",
            Category::PowerDensity => "PowerDensity",
            Category::KinematicViscosity => "Kinematic Viscosity",
            Category::DataSize => "Data size",
            Category::NonDimensional => "Non Dimensional",
            Category::NonDimensionalPercentage => "NonDimensionalPercentage",
            Category::Custom => "Custom",
            Category::Default => "Default",
            Category::SpecificEnergy => "Specific Energy",
            Category::SpecificEnergyPerTemperature => "SpecificEnergyPerTemperature",
            Category::PowerTempArea => "PowerTempArea",
        }
    }

    /// Rust identifier of the variant (`"MassMomentOfInertia"`).
    pub fn ident(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Area => "Area",
            Category::Volume => "Volume",
            Category::Time => "Time",
            Category::VolumeFlow => "VolumeFlow",
            Category::Temperature => "Temperature",
            Category::Angle => "Angle",
            Category::Velocity => "Velocity",
            Category::Mass => "Mass",
            Category::MassMomentOfInertia => "MassMomentOfInertia",
            Category::VgvGradients => "VgvGradients",
            Category::VgvGradientsPow2 => "VgvGradientsPow2",
            Category::Massflow => "Massflow",
            Category::Density => "Density",
            Category::Force => "Force",
            Category::Frequency => "Frequency",
            Category::Torque => "Torque",
            Category::Pressure => "Pressure",
            Category::Energy => "Energy",
            Category::Power => "Power",
            Category::Inertia => "Inertia",
            Category::EnergyDensity => "EnergyDensity",
            Category::PowerDensity => "PowerDensity",
            Category::KinematicViscosity => "KinematicViscosity",
            Category::DataSize => "DataSize",
            Category::NonDimensional => "NonDimensional",
            Category::NonDimensionalPercentage => "NonDimensionalPercentage",
            Category::Custom => "Custom",
            Category::Default => "Default",
            Category::SpecificEnergy => "SpecificEnergy",
            Category::SpecificEnergyPerTemperature => "SpecificEnergyPerTemperature",
            Category::PowerTempArea => "PowerTempArea",
        }
    }

    /// Symbol of the unit values of this category are stored in.
    ///
    /// `Custom` groups unrelated units and reports `"-"`; it has no single
    /// reference.
    pub fn reference_unit(self) -> &'static str {
        match self {
            Category::Length => "m",
            Category::Area => "m^2",
            Category::Volume => "m^3",
            Category::Time => "s",
            Category::VolumeFlow => "m^3/s",
            Category::Temperature => "K",
            Category::Angle => "rad",
            Category::Velocity => "m/s",
            Category::Mass => "kg",
            Category::MassMomentOfInertia => "kg*m^2",
            Category::VgvGradients => "1/deg",
            Category::VgvGradientsPow2 => "1/deg^2",
            Category::Massflow => "kg/s",
            Category::Density => "kg/m^3",
            Category::Force => "N",
            Category::Frequency => "1/s",
            Category::Torque => "N*m",
            Category::Pressure => "Pa",
            Category::Energy => "J",
            Category::Power => "W",
            Category::Inertia => "kg*m^2",
            Category::EnergyDensity => "J/kg",
            Category::PowerDensity => "W/kg",
            Category::KinematicViscosity => "m^2/s",
            Category::DataSize => "KB",
            Category::NonDimensional => "-",
            Category::NonDimensionalPercentage => "-",
            Category::Custom => "-",
            Category::Default => "-",
            Category::SpecificEnergy => "J/kg",
            Category::SpecificEnergyPerTemperature => "J/(kg*K)",
            Category::PowerTempArea => "W/(m^2*K)",
        }
    }

    /// Whether the builtin table defines units for this category.
    pub fn has_units(self) -> bool {
        !matches!(
            self,
            Category::Default
                | Category::SpecificEnergy
                | Category::SpecificEnergyPerTemperature
                | Category::PowerTempArea
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    /// Accepts the display name or the variant identifier, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted) || c.ident().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConversionError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_identifiers() {
        assert_eq!("Length".parse::<Category>().unwrap(), Category::Length);
        assert_eq!("mass moment of inertia".parse::<Category>().unwrap(), Category::MassMomentOfInertia);
        assert_eq!("MassMomentOfInertia".parse::<Category>().unwrap(), Category::MassMomentOfInertia);
        assert_eq!(" Data size ".parse::<Category>().unwrap(), Category::DataSize);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "Luminosity".parse::<Category>().unwrap_err();
        assert_eq!(err, ConversionError::UnknownCategory("Luminosity".into()));
    }

    #[test]
    fn all_is_complete_and_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for c in Category::ALL {
            assert!(seen.insert(c), "{c:?} listed twice");
        }
        assert_eq!(seen.len(), Category::ALL.len());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Category::KinematicViscosity.to_string(), "Kinematic Viscosity");
        assert_eq!(Category::Pressure.reference_unit(), "Pa");
    }
}
