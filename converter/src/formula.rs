//! Construction-time recipes for derived unit scales.
//!
//! A [`Formula`] is evaluated left to right while the unit table is built,
//! e.g. `km/h = Length["km"] / Time["h"]`. Only the resulting number is
//! stored in the table.

use crate::category::Category;
use crate::error::TableError;

#[derive(Debug, Clone, PartialEq)]
enum Step {
    Times(Category, String),
    Per(Category, String),
    TimesConst(f64),
    PerConst(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    steps: Vec<Step>,
}

impl Formula {
    /// Start from the scale of an existing unit.
    pub fn of(category: Category, unit: impl Into<String>) -> Self {
        Self { steps: vec![Step::Times(category, unit.into())] }
    }

    /// Start from a literal value.
    pub fn constant(value: f64) -> Self {
        Self { steps: vec![Step::TimesConst(value)] }
    }

    pub fn times(mut self, category: Category, unit: impl Into<String>) -> Self {
        self.steps.push(Step::Times(category, unit.into()));
        self
    }

    pub fn per(mut self, category: Category, unit: impl Into<String>) -> Self {
        self.steps.push(Step::Per(category, unit.into()));
        self
    }

    pub fn times_const(mut self, value: f64) -> Self {
        self.steps.push(Step::TimesConst(value));
        self
    }

    pub fn per_const(mut self, value: f64) -> Self {
        self.steps.push(Step::PerConst(value));
        self
    }

    /// `unit · unit`
    pub fn squared(category: Category, unit: &str) -> Self {
        Self::of(category, unit).times(category, unit)
    }

    /// `unit · unit · unit`
    pub fn cubed(category: Category, unit: &str) -> Self {
        Self::squared(category, unit).times(category, unit)
    }

    /// Every `(category, unit)` the formula reads.
    pub fn references(&self) -> impl Iterator<Item = (Category, &str)> {
        self.steps.iter().filter_map(|s| match s {
            Step::Times(c, u) | Step::Per(c, u) => Some((*c, u.as_str())),
            Step::TimesConst(_) | Step::PerConst(_) => None,
        })
    }

    /// Evaluate with `lookup` resolving unit scales.
    pub fn eval<F>(&self, mut lookup: F) -> Result<f64, TableError>
    where
        F: FnMut(Category, &str) -> Result<f64, TableError>,
    {
        let mut steps = self.steps.iter();
        let mut acc = match steps.next() {
            Some(Step::Times(c, u)) => lookup(*c, u)?,
            Some(Step::Per(c, u)) => 1.0 / lookup(*c, u)?,
            Some(Step::TimesConst(v)) => *v,
            Some(Step::PerConst(v)) => 1.0 / v,
            None => 1.0,
        };
        for step in steps {
            match step {
                Step::Times(c, u) => acc *= lookup(*c, u)?,
                Step::Per(c, u) => acc /= lookup(*c, u)?,
                Step::TimesConst(v) => acc *= v,
                Step::PerConst(v) => acc /= v,
            }
        }
        Ok(acc)
    }
}
