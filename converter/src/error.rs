use thiserror::Error;

use crate::category::Category;

/// Failure of a conversion or a lookup at query time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The `(category, unit)` pair has no table entry.
    /// [`UnitConverter::convert_or_passthrough`](crate::UnitConverter::convert_or_passthrough)
    /// hands the input value back instead.
    #[error("no such unit ({unit}) in category ({category})")]
    UnknownUnit { category: Category, unit: String },

    /// A string did not name any category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Inconsistency detected while building a unit table.
///
/// The builtin table never produces one of these; a hit means the
/// construction pipeline itself is wrong. Deserialized tables are checked
/// for the scale and offset variants as well.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// A formula reads a unit that the referenced category does not define.
    #[error("unit {unit} referenced from {from} does not exist in {category}")]
    MissingUnit {
        from: Category,
        category: Category,
        unit: String,
    },

    /// A formula reads a category whose stage has not run yet.
    #[error("{from} references {category}, which has not been built yet")]
    NotYetBuilt { from: Category, category: Category },

    /// An atomic stage reads a category other than its own.
    #[error("atomic category {from} may not reference {category}")]
    ForeignReference { from: Category, category: Category },

    /// Atomic stages must all precede the derived ones.
    #[error("atomic category {0} is staged after a derived category")]
    StageOrder(Category),

    /// The same category appears in two stages.
    #[error("category {0} is staged twice")]
    DuplicateCategory(Category),

    /// A scale or offset is assigned twice for one symbol.
    #[error("{what} of unit {unit} in {category} is set twice")]
    DuplicateUnit {
        category: Category,
        unit: String,
        what: &'static str,
    },

    /// Scale is zero, infinite or NaN; the unit could not be converted back.
    #[error("scale of unit {unit} in {category} is {scale}")]
    DegenerateScale {
        category: Category,
        unit: String,
        scale: f64,
    },

    /// Offset is infinite or NaN.
    #[error("offset of unit {unit} in {category} is {offset}")]
    NonFiniteOffset {
        category: Category,
        unit: String,
        offset: f64,
    },
}

pub type Result<T> = std::result::Result<T, ConversionError>;
