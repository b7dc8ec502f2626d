use approx::assert_relative_eq;
use unitconv::{
    Category, CategoryBuilder, Direction, DisplayConverter, DisplayUnits, Preset, Stage,
    TableBuilder, TableError, UnitConverter, UnitTable, UnitconvError,
};

// ═══════════════════════════════════════════════════════════════════
//  Serialized forms
// ═══════════════════════════════════════════════════════════════════

#[test]
fn category_serializes_as_its_identifier() {
    let json = serde_json::to_string(&Category::MassMomentOfInertia).unwrap();
    assert_eq!(json, r#""MassMomentOfInertia""#);
    let back: Category = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Category::MassMomentOfInertia);
}

#[test]
fn preset_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Preset::Engineering).unwrap(), r#""engineering""#);
    let back: Preset = serde_json::from_str(r#""imperial""#).unwrap();
    assert_eq!(back, Preset::Imperial);
}

#[test]
fn display_units_survive_json() {
    let units = DisplayUnits::engineering().with(Category::Pressure, "psi");
    let json = serde_json::to_string(&units).unwrap();
    assert!(json.contains(r#""Pressure":"psi""#), "{json}");
    let back: DisplayUnits = serde_json::from_str(&json).unwrap();
    assert_eq!(back, units);
}

#[test]
fn builtin_table_survives_json() {
    let table = UnitConverter::global().table();
    let json = serde_json::to_string(table).unwrap();
    let back: UnitTable = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, table);
}

// ═══════════════════════════════════════════════════════════════════
//  Loaded tables are checked like built ones
// ═══════════════════════════════════════════════════════════════════

#[test]
fn zero_scale_is_rejected_on_load() {
    let json = r#"{"categories":{"Length":{"km":{"scale":0.0,"offset":null}}}}"#;
    let err = serde_json::from_str::<UnitTable>(json).unwrap_err();
    assert!(err.to_string().contains("km"), "{err}");
}

#[test]
fn loaded_table_converts() {
    let json = r#"{"categories":{"Temperature":{"K":{"scale":1.0,"offset":null},"°C":{"scale":null,"offset":-273.15}}}}"#;
    let conv = UnitConverter::from_table(serde_json::from_str(json).unwrap());
    let (k, ok) = conv.convert_or_passthrough(Category::Temperature, "°C", -59.15, Direction::ToReference);
    assert!(ok);
    assert_relative_eq!(k, 214.0, max_relative = 1e-12);
}

// ═══════════════════════════════════════════════════════════════════
//  Display units checked against an injected engine
// ═══════════════════════════════════════════════════════════════════

fn hectopascal(c: &mut CategoryBuilder<'_>) -> Result<(), TableError> {
    c.scales(&[("Pa", 1.0), ("hPa", 0.01)])?;
    Ok(())
}

fn small_engine() -> UnitConverter {
    let table = TableBuilder::new()
        .run(&[Stage::atomic(Category::Pressure, hectopascal)])
        .unwrap();
    UnitConverter::from_table(table)
}

#[test]
fn overrides_are_checked_against_the_given_engine() {
    let engine = small_engine();
    let vars = [("UNITCONV_UNIT_PRESSURE", "hPa")];

    let units = DisplayUnits::from_vars_in(vars, &engine).unwrap();
    assert_eq!(units.unit(Category::Pressure), Some("hPa"));
    assert!(matches!(
        DisplayUnits::from_vars(vars),
        Err(UnitconvError::InvalidVariable { .. })
    ));

    let conv = DisplayConverter::with_engine(units, &engine);
    assert_relative_eq!(conv.to_display(Category::Pressure, 101_325.0), 1013.25, max_relative = 1e-12);
}

#[test]
fn builtin_units_missing_from_the_given_engine_are_rejected() {
    let engine = small_engine();
    let err = DisplayUnits::from_vars_in([("UNITCONV_UNIT_PRESSURE", "bar")], &engine).unwrap_err();
    assert!(err.to_string().contains("bar"), "{err}");
}
