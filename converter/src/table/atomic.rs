//! Categories whose scales are literal constants.
//!
//! Scales are "units per reference unit": `km = 0.001` because one metre is
//! 0.001 km.

use std::f64::consts::PI;

use super::CategoryBuilder;
use crate::category::Category;
use crate::error::TableError;
use crate::formula::Formula;

pub(super) fn length(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[
        ("km", 0.001),
        ("hm", 0.01),
        ("dam", 0.1),
        ("m", 1.0),
        ("dm", 10.0),
        ("cm", 100.0),
        ("mm", 1000.0),
        ("µm", 1.0e6),
        ("nm", 1.0e9),
        ("mi", 1.0 / 1609.344),
        ("nmi", 1.0 / 1852.0),
        ("ft", 1.0 / 0.3048),
        ("inch", 1.0 / 0.0254),
    ])?;
    Ok(())
}

pub(super) fn time(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[
        ("µs", 1.0e6),
        ("ms", 1000.0),
        ("s", 1.0),
        ("min", 1.0 / 60.0),
        ("h", 1.0 / 3600.0),
        ("d", 1.0 / 86400.0),
    ])?;
    Ok(())
}

pub(super) fn mass(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[
        ("µg", 1.0e9),
        ("mg", 1.0e6),
        ("g", 1000.0),
        ("dag", 100.0),
        ("kg", 1.0),
        ("dt", 0.01),
        ("t", 0.001),
        ("lbm", 1.0 / 0.453_592_37),
    ])?;
    // US customary units hang off the avoirdupois pound.
    c.derive("oz", &Formula::of(Category::Mass, "lbm").times_const(16.0))?;
    c.derive("tn. sh.", &Formula::of(Category::Mass, "lbm").times_const(0.0005))?;
    Ok(())
}

pub(super) fn temperature(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[("K", 1.0), ("°Ra", 1.8), ("°F", 1.8)])?;
    c.offset("°C", -273.15)?.offset("°F", -459.67)?;
    Ok(())
}

pub(super) fn angle(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    let deg = 180.0 / PI;
    c.scales(&[("rad", 1.0), ("deg", deg), ("min", deg * 60.0), ("sec", deg * 3600.0)])?;
    Ok(())
}

pub(super) fn vgv_gradients(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[("1/deg", 1.0), ("%/deg", 100.0)])?;
    Ok(())
}

pub(super) fn vgv_gradients_pow2(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[("1/deg^2", 1.0), ("%/deg^2", 100.0)])?;
    Ok(())
}

pub(super) fn data_size(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[("Bytes", 1.0e3), ("KB", 1.0), ("MB", 1.0e-3), ("GB", 1.0e-6)])?;
    Ok(())
}

pub(super) fn non_dimensional_percentage(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[("-", 1.0), ("%", 100.0)])?;
    Ok(())
}

pub(super) fn non_dimensional(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scale("-", 1.0)?;
    Ok(())
}
