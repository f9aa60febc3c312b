//! # Cart Line
//!
//! Read-only projection of one cart item joined with its product and seller
//! shop.
//!
//! Every field that comes from product or shop data is optional; the
//! marketplace does not require sellers to fill in weights, dimensions or
//! locations, and the grouping step substitutes defaults for what is
//! missing.

use crate::domain::value_objects::{Money, ProductId, ShopId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Physical dimensions of a product in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length in cm.
    pub length: Option<Decimal>,
    /// Width in cm.
    pub width: Option<Decimal>,
    /// Height in cm.
    pub height: Option<Decimal>,
}

impl Dimensions {
    /// Creates fully specified dimensions.
    #[must_use]
    pub fn new(length: Decimal, width: Decimal, height: Decimal) -> Self {
        Self {
            length: Some(length),
            width: Some(width),
            height: Some(height),
        }
    }

    /// Reads dimensions from the product's JSON column.
    ///
    /// Accepts numbers and numeric strings under `length`, `width` and
    /// `height`. Anything else (missing keys, `null`, garbage) leaves that
    /// side unset. Returns `None` when `value` is not an object.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let side = |key: &str| object.get(key).and_then(decimal_from_json);
        Some(Self {
            length: side("length"),
            width: side("width"),
            height: side("height"),
        })
    }
}

fn decimal_from_json(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// One cart item with its product and seller shop data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product in the cart.
    pub product_id: ProductId,
    /// Product display name.
    pub product_name: Option<String>,
    /// Seller shop that ships the product.
    pub shop_id: ShopId,
    /// Seller shop display name.
    pub shop_name: Option<String>,
    /// Units of the product in the cart.
    pub quantity: u32,
    /// Price per unit captured on the cart item, in minor units.
    pub unit_price_minor: Option<i64>,
    /// Currency of `unit_price_minor`.
    pub currency: Option<String>,
    /// Current list price of the product, in whole units.
    pub list_price: Option<Decimal>,
    /// Product weight in kg.
    pub weight_kg: Option<Decimal>,
    /// Product dimensions.
    pub dimensions: Option<Dimensions>,
    /// Shop department (state).
    pub department: Option<String>,
    /// Shop municipality (city).
    pub municipality: Option<String>,
}

impl CartLine {
    /// Creates a line with only the required fields set.
    #[must_use]
    pub fn new(product_id: ProductId, shop_id: ShopId, quantity: u32) -> Self {
        Self {
            product_id,
            product_name: None,
            shop_id,
            shop_name: None,
            quantity,
            unit_price_minor: None,
            currency: None,
            list_price: None,
            weight_kg: None,
            dimensions: None,
            department: None,
            municipality: None,
        }
    }

    /// Sets the product name.
    #[must_use]
    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// Sets the shop name.
    #[must_use]
    pub fn with_shop_name(mut self, name: impl Into<String>) -> Self {
        self.shop_name = Some(name.into());
        self
    }

    /// Sets the captured unit price in minor units.
    #[must_use]
    pub fn with_unit_price_minor(mut self, minor: i64, currency: impl Into<String>) -> Self {
        self.unit_price_minor = Some(minor);
        self.currency = Some(currency.into());
        self
    }

    /// Sets the product list price.
    #[must_use]
    pub fn with_list_price(mut self, price: Decimal) -> Self {
        self.list_price = Some(price);
        self
    }

    /// Sets the product weight.
    #[must_use]
    pub fn with_weight(mut self, weight_kg: Decimal) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Sets the product dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Sets the shop location.
    #[must_use]
    pub fn with_location(
        mut self,
        department: impl Into<String>,
        municipality: impl Into<String>,
    ) -> Self {
        self.department = Some(department.into());
        self.municipality = Some(municipality.into());
        self
    }

    /// Returns the value declared to the carrier for one unit.
    ///
    /// Prefers the captured minor-unit price, then the list price, then
    /// `fallback`. Zero or negative prices count as absent.
    #[must_use]
    pub fn declared_unit_value(&self, fallback: Money) -> Money {
        if let Some(minor) = self.unit_price_minor.filter(|m| *m > 0) {
            if let Ok(value) = Money::from_minor_units(minor) {
                return value;
            }
        }
        self.list_price
            .filter(|p| *p > Decimal::ZERO)
            .and_then(|p| Money::new(p).ok())
            .unwrap_or(fallback)
    }

    /// Returns the shop name, falling back to the shop id.
    #[must_use]
    pub fn display_shop_name(&self) -> String {
        self.shop_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map_or_else(|| self.shop_id.to_string(), str::to_string)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line() -> CartLine {
        CartLine::new(ProductId::new("p-1"), ShopId::new("shop-a"), 1)
    }

    #[test]
    fn unit_value_prefers_minor_price() {
        let l = line()
            .with_unit_price_minor(10_000, "COP")
            .with_list_price(Decimal::from(999));
        assert_eq!(l.declared_unit_value(Money::from_units(50_000)), Money::from_units(100));
    }

    #[test]
    fn unit_value_falls_back_to_list_price() {
        let l = line()
            .with_unit_price_minor(0, "COP")
            .with_list_price(Decimal::from(42_000));
        assert_eq!(
            l.declared_unit_value(Money::from_units(50_000)),
            Money::from_units(42_000)
        );
    }

    #[test]
    fn unit_value_falls_back_to_default() {
        let l = line().with_list_price(Decimal::ZERO);
        assert_eq!(
            l.declared_unit_value(Money::from_units(50_000)),
            Money::from_units(50_000)
        );
    }

    #[test]
    fn dimensions_from_json_accepts_numbers_and_strings() {
        let dims = Dimensions::from_json(&json!({"length": 30, "width": "12.5", "height": null}))
            .unwrap();
        assert_eq!(dims.length, Some(Decimal::from(30)));
        assert_eq!(dims.width, Some(Decimal::new(125, 1)));
        assert_eq!(dims.height, None);
    }

    #[test]
    fn dimensions_from_json_rejects_non_object() {
        assert!(Dimensions::from_json(&json!("20x20x20")).is_none());
        assert!(Dimensions::from_json(&Value::Null).is_none());
    }

    #[test]
    fn shop_name_falls_back_to_id() {
        assert_eq!(line().display_shop_name(), "shop-a");
        assert_eq!(line().with_shop_name("Telares").display_shop_name(), "Telares");
    }
}
