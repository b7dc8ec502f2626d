use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Relation of one unit to its category's reference unit:
/// `unit = reference · scale + offset`.
///
/// A missing `scale` behaves as 1, a missing `offset` as 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AffineTransform {
    pub scale: Option<f64>,
    pub offset: Option<f64>,
}

impl AffineTransform {
    pub fn scaled(scale: f64) -> Self {
        Self { scale: Some(scale), offset: None }
    }

    pub fn shifted(offset: f64) -> Self {
        Self { scale: None, offset: Some(offset) }
    }

    pub fn scale_or_one(&self) -> f64 {
        self.scale.unwrap_or(1.0)
    }

    pub fn offset_or_zero(&self) -> f64 {
        self.offset.unwrap_or(0.0)
    }

    pub fn is_identity(&self) -> bool {
        self.scale_or_one() == 1.0 && self.offset_or_zero() == 0.0
    }

    /// Unit value → reference value: `(v − offset) / scale`.
    pub fn to_reference<T: Float>(&self, value: T) -> T {
        let mut v = value;
        if let Some(offset) = self.offset {
            v = v - cast::<T>(offset);
        }
        if let Some(scale) = self.scale {
            v = v / cast::<T>(scale);
        }
        v
    }

    /// Reference value → unit value: `v · scale + offset`.
    pub fn from_reference<T: Float>(&self, value: T) -> T {
        let mut v = value;
        if let Some(scale) = self.scale {
            v = v * cast::<T>(scale);
        }
        if let Some(offset) = self.offset {
            v = v + cast::<T>(offset);
        }
        v
    }
}

/// Narrow a table constant to the caller's scalar type.
///
/// Float-to-float casts never fail for the primitive types; NaN covers any
/// exotic `Float` that refuses the value.
fn cast<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}
