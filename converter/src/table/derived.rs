//! Categories whose scales are composed from categories built earlier.
//!
//! Each function documents the dimensional relationship it encodes; a few
//! conventional units without a clean composition stay literal.

use super::CategoryBuilder;
use crate::category::Category::{self, *};
use crate::error::TableError;
use crate::formula::Formula;

/// Time units used as denominators of rate categories.
const RATE_TIMES: [&str; 3] = ["s", "min", "h"];

/// Metric masses paired with the Custom per-angle / per-mass units.
const METRIC_MASSES: [&str; 5] = ["mg", "g", "dag", "kg", "t"];

/// Render a mass symbol as a numerator, parenthesizing compound names.
fn numerator(unit: &str) -> String {
    if unit.contains(' ') { format!("({unit})") } else { unit.to_string() }
}

pub(super) fn area(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    for l in ["km", "m", "dm", "cm", "mm", "ft", "inch"] {
        c.derive(&format!("{l}^2"), &Formula::squared(Length, l))?;
    }
    Ok(())
}

pub(super) fn volume(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    for l in ["km", "m", "dm", "cm", "mm", "ft", "inch"] {
        c.derive(&format!("{l}^3"), &Formula::cubed(Length, l))?;
    }
    c.scales(&[("l", 1000.0), ("ml", 1.0e6)])?;
    // US liquid gallon is defined as 231 cubic inches.
    c.derive("gal", &Formula::of(Volume, "inch^3").per_const(231.0))?;
    c.derive("floz", &Formula::of(Volume, "gal").times_const(128.0))?;
    Ok(())
}

pub(super) fn volume_flow(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    let volumes = [
        "km^3", "m^3", "dm^3", "l", "ml", "cm^3", "mm^3", "gal", "floz", "ft^3", "inch^3",
    ];
    for v in volumes {
        for t in RATE_TIMES {
            c.derive(&format!("{v}/{t}"), &Formula::of(Volume, v).per(Time, t))?;
        }
    }
    Ok(())
}

pub(super) fn velocity(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    for l in ["mm", "cm", "dm", "m", "km"] {
        for t in RATE_TIMES {
            c.derive(&format!("{l}/{t}"), &Formula::of(Length, l).per(Time, t))?;
        }
    }
    c.derive("mph", &Formula::of(Length, "mi").per(Time, "h"))?;
    c.derive("kn", &Formula::of(Length, "nmi").per(Time, "h"))?;
    c.derive("in/s", &Formula::of(Length, "inch").per(Time, "s"))?;
    c.derive("ft/s", &Formula::of(Length, "ft").per(Time, "s"))?;
    Ok(())
}

pub(super) fn mass_moment_of_inertia(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[
        ("g*mm^2", 1.0e9),
        ("g*cm^2", 1.0e7),
        ("kg*mm^2", 1.0e6),
        ("kg*cm^2", 1.0e4),
        ("kg*m^2", 1.0),
        ("slug*ft^2", 0.737_562_142),
    ])?;
    c.derive("lb*ft^2", &Formula::of(Mass, "lbm").times(Area, "ft^2"))?;
    Ok(())
}

pub(super) fn massflow(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    let masses = ["mg", "g", "dag", "kg", "dt", "t", "oz", "lbm", "tn. sh."];
    for t in RATE_TIMES {
        for m in masses {
            let unit = format!("{}/{t}", numerator(m));
            c.derive(&unit, &Formula::of(Mass, m).per(Time, t))?;
        }
    }
    Ok(())
}

pub(super) fn density(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    let pairs: [(&str, &str, &str); 19] = [
        ("mg/m^3", "mg", "m^3"),
        ("g/m^3", "g", "m^3"),
        ("kg/m^3", "kg", "m^3"),
        ("t/m^3", "t", "m^3"),
        ("mg/dm^3", "mg", "dm^3"),
        ("mg/l", "mg", "l"),
        ("g/dm^3", "g", "dm^3"),
        ("g/l", "g", "l"),
        ("kg/dm^3", "kg", "dm^3"),
        ("kg/l", "kg", "l"),
        ("t/dm^3", "t", "dm^3"),
        ("t/l", "t", "l"),
        ("mg/cm^3", "mg", "cm^3"),
        ("g/cm^3", "g", "cm^3"),
        ("kg/cm^3", "kg", "cm^3"),
        ("t/cm^3", "t", "cm^3"),
        ("lbm/in^3", "lbm", "inch^3"),
        ("lbm/ft^3", "lbm", "ft^3"),
        ("lbm/gal", "lbm", "gal"),
    ];
    for (unit, m, v) in pairs {
        c.derive(unit, &Formula::of(Mass, m).per(Volume, v))?;
    }
    Ok(())
}

/// Standard gravity in m/s², used by the gravitational force units.
const G_N: f64 = 9.806_65;

pub(super) fn force(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[
        ("mN", 1000.0),
        ("N", 1.0),
        ("kN", 0.001),
        ("MN", 1.0e-6),
        ("kp", 1.0 / G_N),
        ("Mp", 0.001 / G_N),
        ("dyn", 1.0e5),
    ])?;
    c.derive("lbf", &Formula::of(Mass, "lbm").per_const(G_N))?;
    c.derive("pdl", &Formula::of(Mass, "lbm").per_const(0.3048))?;
    Ok(())
}

pub(super) fn frequency(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.derive("1/s", &Formula::constant(1.0).per(Time, "s"))?;
    c.derive("Hz", &Formula::constant(1.0).per(Time, "s"))?;
    c.derive("1/min", &Formula::constant(1.0).per(Time, "min"))?;
    c.derive("1/h", &Formula::constant(1.0).per(Time, "h"))?;
    c.scale("rpm", 60.0)?;
    Ok(())
}

pub(super) fn torque(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[("N*m", 1.0), ("kN*m", 0.001), ("kgf*m", 1.0 / G_N)])?;
    c.derive("kp*m", &Formula::of(Force, "kp"))?;
    c.derive("lbf*in", &Formula::of(Force, "lbf").times(Length, "inch"))?;
    c.derive("lbf*ft", &Formula::of(Force, "lbf").times(Length, "ft"))?;
    Ok(())
}

pub(super) fn pressure(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[
        ("Pa", 1.0),
        ("N/m^2", 1.0),
        ("kPa", 0.001),
        ("MPa", 1.0e-6),
        ("mbar", 0.01),
        ("bar", 1.0e-5),
        ("at", 0.0001 / G_N),
        ("atm", 1.0 / 101_325.0),
        ("Torr", 760.0 / 101_325.0),
        ("mmHg", 1.0 / 133.322_387_415),
    ])?;
    c.derive("psi", &Formula::of(Force, "lbf").per(Area, "inch^2"))?;
    Ok(())
}

pub(super) fn energy(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[
        ("J", 1.0),
        ("kJ", 0.001),
        ("MJ", 1.0e-6),
        ("W*h", 1.0 / 3600.0),
        ("kW*h", 0.001 / 3600.0),
        ("cal", 1.0 / 4.184),
        // ISO definition of the British thermal unit.
        ("BTU", 1.0 / 1055.056),
    ])?;
    c.derive("kcal", &Formula::of(Energy, "cal").times_const(0.001))?;
    c.derive("ft*lbf", &Formula::of(Length, "ft").times(Force, "lbf"))?;
    Ok(())
}

pub(super) fn power(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[
        ("W", 1.0),
        ("kW", 0.001),
        ("MW", 1.0e-6),
        ("GW", 1.0e-9),
        ("PS", 1.0 / 75.0 / G_N),
        ("hp", 1.0 / 550.0 / 0.453_592_37 / G_N / 0.3048),
    ])?;
    for t in RATE_TIMES {
        c.derive(&format!("BTU/{t}"), &Formula::of(Energy, "BTU").per(Time, t))?;
    }
    for t in RATE_TIMES {
        let formula = Formula::of(Length, "ft").times(Force, "lbf").per(Time, t);
        c.derive(&format!("ft*lbf/{t}"), &formula)?;
    }
    Ok(())
}

pub(super) fn inertia(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[
        ("g*mm^2", 1.0e9),
        ("g*cm^2", 1.0e7),
        ("g*m^2", 1000.0),
        ("kg*mm^2", 1.0e6),
        ("kg*cm^2", 1.0e4),
        ("kg*m^2", 1.0),
    ])?;
    for m in ["lbm", "tn. sh."] {
        for (suffix, area) in [("in^2", "inch^2"), ("ft^2", "ft^2")] {
            let unit = format!("{}*{suffix}", numerator(m));
            c.derive(&unit, &Formula::of(Mass, m).times(Area, area))?;
        }
    }
    Ok(())
}

pub(super) fn energy_density(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    for e in ["J", "kJ", "MJ"] {
        c.derive(&format!("{e}/kg"), &Formula::of(Energy, e).per(Mass, "kg"))?;
    }
    for (unit, p, t) in [
        ("Ws/kg", "W", "s"),
        ("Wh/kg", "W", "h"),
        ("kWh/kg", "kW", "h"),
        ("kWs/kg", "kW", "s"),
        ("MWs/kg", "MW", "s"),
    ] {
        c.derive(unit, &Formula::of(Power, p).times(Time, t).per(Mass, "kg"))?;
    }
    c.derive("MWh/kg", &Formula::of(EnergyDensity, "Wh/kg").times_const(1.0e-6))?;
    Ok(())
}

pub(super) fn power_density(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    for p in ["W", "kW", "MW"] {
        c.derive(&format!("{p}/kg"), &Formula::of(Power, p).per(Mass, "kg"))?;
    }
    for e in ["kJ", "MJ"] {
        let formula = Formula::of(Energy, e).per(Time, "s").per(Mass, "kg");
        c.derive(&format!("{e}/(s*kg)"), &formula)?;
    }
    Ok(())
}

pub(super) fn kinematic_viscosity(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.derive("mm^2/s", &Formula::of(Area, "mm^2").per(Time, "s"))?;
    c.derive("m^2/s", &Formula::of(Area, "m^2").per(Time, "s"))?;
    Ok(())
}

/// Grab bag of convenience units: reciprocal angles, mass flow per
/// angle and energy per mass. Coefficients follow the composition, the
/// grouping carries no dimensional meaning.
pub(super) fn custom(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    let angles = ["rad", "deg", "min", "sec"];
    for a in angles {
        c.derive(&format!("1/{a}"), &Formula::constant(1.0).per(Angle, a))?;
    }

    for a in angles {
        for t in RATE_TIMES {
            for m in METRIC_MASSES {
                let formula = Formula::of(Massflow, format!("{m}/{t}")).times(Category::Custom, format!("1/{a}"));
                c.derive(&format!("{m}/({t}*{a})"), &formula)?;
            }
        }
    }

    for m in METRIC_MASSES {
        c.derive(&format!("J/{m}"), &Formula::constant(1.0).per(Mass, m))?;
    }
    for e in ["kJ", "MJ"] {
        for m in METRIC_MASSES {
            c.derive(&format!("{e}/{m}"), &Formula::of(Energy, e).per(Mass, m))?;
        }
    }
    Ok(())
}
