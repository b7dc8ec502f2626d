use unitconv::{Category, UnitConverter};

fn main() {
    let conv = UnitConverter::global();

    for category in conv.categories() {
        let units = conv.units_of(category);
        println!(
            "{:<26} [{}] {} units: {}",
            category.name(),
            category.reference_unit(),
            units.len(),
            units.join(", ")
        );
    }
}
