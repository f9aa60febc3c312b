//! # Piece
//!
//! One physical parcel sent to the carrier. Every unit of quantity in the
//! cart ships as its own piece.

use crate::domain::entities::cart_line::CartLine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Side length used when a product has no usable dimension, in cm.
pub const DEFAULT_SIDE_CM: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Weight used when a product has no usable weight, in kg.
pub const DEFAULT_WEIGHT_KG: Decimal = Decimal::ONE;

/// Weight and dimensions of a single parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    weight_kg: Decimal,
    length_cm: Decimal,
    width_cm: Decimal,
    height_cm: Decimal,
}

impl Piece {
    /// Creates a piece from explicit measurements.
    #[must_use]
    pub fn new(
        weight_kg: Decimal,
        length_cm: Decimal,
        width_cm: Decimal,
        height_cm: Decimal,
    ) -> Self {
        Self {
            weight_kg,
            length_cm,
            width_cm,
            height_cm,
        }
    }

    /// Builds the parcel for one unit of `line`, defaulting missing or
    /// non-positive measurements to a 20 cm cube weighing 1 kg.
    #[must_use]
    pub fn for_line(line: &CartLine) -> Self {
        let dims = line.dimensions.unwrap_or_default();
        Self {
            weight_kg: positive_or(line.weight_kg, DEFAULT_WEIGHT_KG),
            length_cm: positive_or(dims.length, DEFAULT_SIDE_CM),
            width_cm: positive_or(dims.width, DEFAULT_SIDE_CM),
            height_cm: positive_or(dims.height, DEFAULT_SIDE_CM),
        }
    }

    /// Weight in kg.
    #[inline]
    #[must_use]
    pub fn weight_kg(&self) -> Decimal {
        self.weight_kg
    }

    /// Length in cm.
    #[inline]
    #[must_use]
    pub fn length_cm(&self) -> Decimal {
        self.length_cm
    }

    /// Width in cm.
    #[inline]
    #[must_use]
    pub fn width_cm(&self) -> Decimal {
        self.width_cm
    }

    /// Height in cm.
    #[inline]
    #[must_use]
    pub fn height_cm(&self) -> Decimal {
        self.height_cm
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT_KG, DEFAULT_SIDE_CM, DEFAULT_SIDE_CM, DEFAULT_SIDE_CM)
    }
}

fn positive_or(value: Option<Decimal>, default: Decimal) -> Decimal {
    value.filter(|v| *v > Decimal::ZERO).unwrap_or(default)
}
