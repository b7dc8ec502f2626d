use std::fmt::Write as _;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use unitconv::{Category, ConversionError, Direction, UnitConverter};

// ═══════════════════════════════════════════════════════════════════
//  Capturing layer
// ═══════════════════════════════════════════════════════════════════

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<(Level, String)>>>);

struct Fields(String);

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let _ = write!(self.0, "{}={:?} ", field.name(), value);
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields(String::new());
        event.record(&mut fields);
        self.0.lock().unwrap().push((*event.metadata().level(), fields.0));
    }
}

/// Run `f` with a capturing subscriber; returns its result and the
/// warnings it emitted.
fn warnings_of<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let captured = Captured::default();
    let subscriber = Registry::default().with(captured.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    let warnings = captured
        .0
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::WARN)
        .map(|(_, text)| text.clone())
        .collect();
    (result, warnings)
}

// ═══════════════════════════════════════════════════════════════════
//  Unknown units fail soft
// ═══════════════════════════════════════════════════════════════════

#[test]
fn unknown_unit_passes_value_through_with_one_warning() {
    let conv = UnitConverter::global();
    let (result, warnings) = warnings_of(|| {
        conv.convert_or_passthrough(Category::Length, "bogus", 5.0, Direction::ToReference)
    });

    assert_eq!(result, (5.0, false));
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains("bogus"), "{}", warnings[0]);
    assert!(warnings[0].contains("Length"), "{}", warnings[0]);
}

#[test]
fn unknown_unit_in_from_reference_is_an_error() {
    let conv = UnitConverter::global();
    let (result, warnings) = warnings_of(|| conv.from_reference(Category::Pressure, "furlong", 2.5));

    assert_eq!(
        result.unwrap_err(),
        ConversionError::UnknownUnit { category: Category::Pressure, unit: "furlong".into() }
    );
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("Pressure"));
}

#[test]
fn unit_of_another_category_is_unknown() {
    let conv = UnitConverter::global();
    let (result, warnings) =
        warnings_of(|| conv.convert_or_passthrough(Category::Mass, "km", 7.0, Direction::FromReference));
    assert_eq!(result, (7.0, false));
    assert_eq!(warnings.len(), 1);
}

#[test]
fn known_units_are_silent() {
    let conv = UnitConverter::global();
    let (result, warnings) = warnings_of(|| conv.to_reference(Category::Temperature, "°C", 20.0));
    assert!(result.is_ok());
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn non_finite_values_propagate() {
    let conv = UnitConverter::global();
    assert!(conv.to_reference(Category::Length, "km", f64::NAN).unwrap().is_nan());
    assert_eq!(
        conv.from_reference(Category::Temperature, "°F", f64::NEG_INFINITY).unwrap(),
        f64::NEG_INFINITY
    );
}

// ═══════════════════════════════════════════════════════════════════
//  Unit listing
// ═══════════════════════════════════════════════════════════════════

#[test]
fn units_of_has_no_duplicates() {
    let conv = UnitConverter::global();
    for category in Category::ALL {
        let units = conv.units_of(category);
        let mut sorted = units.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), units.len(), "{category}: {units:?}");
    }
}

#[test]
fn untabulated_categories_list_nothing() {
    let conv = UnitConverter::global();
    for category in Category::ALL.into_iter().filter(|c| !c.has_units()) {
        assert!(conv.units_of(category).is_empty(), "{category}");
    }
    assert!(conv.units_of_name("Luminosity").is_empty());
    assert_eq!(conv.units_of_name("temperature"), conv.units_of(Category::Temperature));
}

#[test]
fn units_of_covers_scale_and_offset_entries() {
    let conv = UnitConverter::global();
    let temps = conv.units_of(Category::Temperature);
    for unit in ["K", "°C", "°F", "°Ra"] {
        assert!(temps.contains(&unit), "{unit} missing from {temps:?}");
    }
    assert_eq!(temps.len(), 4);
    assert_eq!(conv.units_of(Category::Velocity).len(), 19);
    assert_eq!(conv.units_of(Category::Massflow).len(), 27);
}
