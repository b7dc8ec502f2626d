use unitconv::{Category, Direction, UnitConverter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG is not consulted; the fmt subscriber prints warnings and up.
    tracing_subscriber::fmt().with_max_level(tracing::Level::WARN).init();

    let conv = UnitConverter::global();

    // ── Scale-only unit ─────────────────────────────────────────────
    let m = conv.to_reference(Category::Length, "km", 1.4)?;
    println!("1.4 km      = {m} m");

    // ── Affine unit ─────────────────────────────────────────────────
    let k = conv.to_reference(Category::Temperature, "°C", -59.15)?;
    println!("-59.15 °C   = {k:.2} K");
    let f = conv.from_reference(Category::Temperature, "°F", k)?;
    println!("{k:.2} K    = {f:.2} °F");

    // ── Derived unit ────────────────────────────────────────────────
    let pa = conv.to_reference(Category::Pressure, "bar", 14.0)?;
    println!("14 bar      = {pa} Pa");

    // ── Unknown unit: logged, value passed through ─────────────────
    let (v, ok) = conv.convert_or_passthrough(Category::Length, "bogus", 5.0, Direction::ToReference);
    println!("5 bogus     = {v} (ok = {ok})");

    Ok(())
}
