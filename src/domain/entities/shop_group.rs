//! # Shop Group
//!
//! All parcels one seller shop ships for a cart, with the value declared
//! to the carrier for them.
//!
//! # Invariants
//!
//! - `items_count()` always equals `pieces().len()`
//! - the declared value only grows while lines are added

use crate::domain::entities::piece::Piece;
use crate::domain::value_objects::{ArithmeticResult, LocalityCode, Money, ShopId};
use serde::{Deserialize, Serialize};

/// Parcels and declared value for one seller shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopGroup {
    shop_id: ShopId,
    shop_name: String,
    origin: LocalityCode,
    declared_value: Money,
    pieces: Vec<Piece>,
}

impl ShopGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new(shop_id: ShopId, shop_name: impl Into<String>, origin: LocalityCode) -> Self {
        Self {
            shop_id,
            shop_name: shop_name.into(),
            origin,
            declared_value: Money::ZERO,
            pieces: Vec::new(),
        }
    }

    /// Adds `quantity` units worth `unit_value` each, shipped as
    /// identical `piece`s.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error if the declared value overflows; the
    /// group is left unchanged in that case.
    pub fn add_units(
        &mut self,
        unit_value: Money,
        quantity: u32,
        piece: Piece,
    ) -> ArithmeticResult<()> {
        let line_value = unit_value.checked_mul_quantity(quantity)?;
        self.declared_value = self.declared_value.checked_add(line_value)?;
        self.pieces.extend(std::iter::repeat_n(piece, quantity as usize));
        Ok(())
    }

    /// Raises the declared value to `floor` when it is lower.
    pub fn apply_value_floor(&mut self, floor: Money) {
        self.declared_value = self.declared_value.at_least(floor);
    }

    /// Seller shop id.
    #[inline]
    #[must_use]
    pub fn shop_id(&self) -> &ShopId {
        &self.shop_id
    }

    /// Seller shop display name.
    #[inline]
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }

    /// Locality the parcels ship from.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> &LocalityCode {
        &self.origin
    }

    /// Value declared to the carrier.
    #[inline]
    #[must_use]
    pub fn declared_value(&self) -> Money {
        self.declared_value
    }

    /// Number of parcels.
    #[inline]
    #[must_use]
    pub fn items_count(&self) -> usize {
        self.pieces.len()
    }

    /// Parcels to ship.
    #[inline]
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
}
