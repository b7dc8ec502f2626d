use approx::assert_relative_eq;
use unitconv::{Category::*, UnitConverter};

// ═══════════════════════════════════════════════════════════════════
//  Derived scales equal the composition of their constituents
// ═══════════════════════════════════════════════════════════════════

fn scale(category: unitconv::Category, unit: &str) -> f64 {
    UnitConverter::global()
        .transform(category, unit)
        .unwrap_or_else(|| panic!("{category}: {unit} missing"))
        .scale_or_one()
}

macro_rules! assert_composed {
    ($lhs:expr, $rhs:expr) => {
        assert_relative_eq!($lhs, $rhs, max_relative = 1e-14)
    };
}

#[test]
fn velocity_is_length_per_time() {
    assert_composed!(scale(Velocity, "km/h"), scale(Length, "km") / scale(Time, "h"));
    assert_composed!(scale(Velocity, "mph"), scale(Length, "mi") / scale(Time, "h"));
    assert_composed!(scale(Velocity, "kn"), scale(Length, "nmi") / scale(Time, "h"));
    assert_composed!(scale(Velocity, "ft/s"), scale(Length, "ft") / scale(Time, "s"));
}

#[test]
fn area_and_volume_are_powers_of_length() {
    for l in ["km", "m", "dm", "cm", "mm", "ft", "inch"] {
        let s = scale(Length, l);
        assert_composed!(scale(Area, &format!("{l}^2")), s * s);
        assert_composed!(scale(Volume, &format!("{l}^3")), s * s * s);
    }
    assert_composed!(scale(Volume, "gal"), scale(Volume, "inch^3") / 231.0);
}

#[test]
fn volume_flow_is_volume_per_time() {
    assert_composed!(scale(VolumeFlow, "l/min"), scale(Volume, "l") / scale(Time, "min"));
    assert_composed!(scale(VolumeFlow, "ft^3/h"), scale(Volume, "ft^3") / scale(Time, "h"));
}

#[test]
fn massflow_is_mass_per_time() {
    assert_composed!(scale(Massflow, "kg/h"), scale(Mass, "kg") / scale(Time, "h"));
    assert_composed!(scale(Massflow, "oz/min"), scale(Mass, "oz") / scale(Time, "min"));
    assert_composed!(scale(Massflow, "(tn. sh.)/s"), scale(Mass, "tn. sh.") / scale(Time, "s"));
}

#[test]
fn density_is_mass_per_volume() {
    assert_composed!(scale(Density, "g/cm^3"), scale(Mass, "g") / scale(Volume, "cm^3"));
    assert_composed!(scale(Density, "lbm/ft^3"), scale(Mass, "lbm") / scale(Volume, "ft^3"));
    assert_composed!(scale(Density, "kg/l"), scale(Mass, "kg") / scale(Volume, "l"));
}

#[test]
fn pressure_and_torque_come_from_force() {
    assert_composed!(scale(Force, "lbf"), scale(Mass, "lbm") / 9.806_65);
    assert_composed!(scale(Pressure, "psi"), scale(Force, "lbf") / scale(Area, "inch^2"));
    assert_composed!(scale(Torque, "lbf*ft"), scale(Force, "lbf") * scale(Length, "ft"));
    assert_composed!(scale(Torque, "kp*m"), scale(Force, "kp"));
}

#[test]
fn power_is_energy_per_time() {
    assert_composed!(scale(Power, "BTU/h"), scale(Energy, "BTU") / scale(Time, "h"));
    assert_composed!(
        scale(Power, "ft*lbf/min"),
        scale(Length, "ft") * scale(Force, "lbf") / scale(Time, "min")
    );
    assert_composed!(scale(Energy, "ft*lbf"), scale(Length, "ft") * scale(Force, "lbf"));
}

#[test]
fn energy_and_power_density_are_per_mass() {
    assert_composed!(scale(EnergyDensity, "kJ/kg"), scale(Energy, "kJ") / scale(Mass, "kg"));
    assert_composed!(
        scale(EnergyDensity, "kWh/kg"),
        scale(Power, "kW") * scale(Time, "h") / scale(Mass, "kg")
    );
    assert_composed!(scale(EnergyDensity, "MWh/kg"), scale(EnergyDensity, "Wh/kg") * 1.0e-6);
    assert_composed!(scale(PowerDensity, "kW/kg"), scale(Power, "kW") / scale(Mass, "kg"));
    assert_composed!(
        scale(PowerDensity, "MJ/(s*kg)"),
        scale(Energy, "MJ") / scale(Time, "s") / scale(Mass, "kg")
    );
}

#[test]
fn inertia_is_mass_times_area() {
    assert_composed!(scale(Inertia, "lbm*ft^2"), scale(Mass, "lbm") * scale(Area, "ft^2"));
    assert_composed!(scale(Inertia, "(tn. sh.)*in^2"), scale(Mass, "tn. sh.") * scale(Area, "inch^2"));
    assert_composed!(scale(MassMomentOfInertia, "lb*ft^2"), scale(Mass, "lbm") * scale(Area, "ft^2"));
}

#[test]
fn custom_combines_massflow_and_angle() {
    assert_composed!(scale(Custom, "1/deg"), 1.0 / scale(Angle, "deg"));
    assert_composed!(
        scale(Custom, "g/(min*deg)"),
        scale(Massflow, "g/min") * scale(Custom, "1/deg")
    );
    assert_composed!(scale(Custom, "MJ/t"), scale(Energy, "MJ") / scale(Mass, "t"));
}

#[test]
fn literal_entries_agree_with_composition() {
    // Literal metric entries must match what the composition would give.
    assert_composed!(scale(Pressure, "bar"), 1.0e-5);
    assert_composed!(scale(Frequency, "1/min"), 1.0 / scale(Time, "min"));
    assert_relative_eq!(scale(Frequency, "rpm"), scale(Frequency, "1/min"), max_relative = 1e-12);
    assert_relative_eq!(scale(Density, "mg/l"), 1000.0, max_relative = 1e-12);
}
