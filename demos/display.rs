use unitconv::{Category, DisplayConverter, DisplayUnits};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    // UNITCONV_PRESET / UNITCONV_UNIT_* are read from the environment or .env
    let units = DisplayUnits::from_env()?;
    let conv = DisplayConverter::new(units);

    // Stored values are in reference units.
    let stored = [
        (Category::Temperature, 288.15),
        (Category::Pressure, 101_325.0),
        (Category::Velocity, 250.0),
        (Category::Massflow, 12.5),
        (Category::Power, 2.0e6),
    ];

    for (category, value) in stored {
        let shown = conv.to_display(category, value);
        let back = conv.from_display(category, shown);
        println!(
            "{:<12} {:>14.4} {:<8} (stored {back} {})",
            category.name(),
            shown,
            conv.label(category),
            category.reference_unit()
        );
    }
    Ok(())
}
