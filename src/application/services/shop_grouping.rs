//! # Shop Grouping
//!
//! Partitions cart lines into one [`ShopGroup`] per seller shop.
//!
//! Each unit of quantity becomes one parcel. The declared value of a group
//! is the sum of its lines' unit values times quantities, raised to the
//! policy minimum once every line has been folded in.

use crate::application::services::origin_resolver::OriginResolver;
use crate::domain::entities::{CartLine, Piece, ShopGroup};
use crate::domain::value_objects::{ArithmeticResult, Money, ShopId};
use std::collections::HashMap;

/// Minimum value declared to the carrier for any shipment.
pub const DEFAULT_MIN_DECLARED_VALUE: u64 = 30_000;

/// Unit value assumed when a line carries no usable price.
pub const DEFAULT_UNIT_VALUE: u64 = 50_000;

/// Valuation rules applied while grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingPolicy {
    /// Floor for each group's declared value.
    pub min_declared_value: Money,
    /// Unit value for lines without a price.
    pub default_unit_value: Money,
}

impl Default for GroupingPolicy {
    fn default() -> Self {
        Self {
            min_declared_value: Money::from_units(DEFAULT_MIN_DECLARED_VALUE),
            default_unit_value: Money::from_units(DEFAULT_UNIT_VALUE),
        }
    }
}

impl GroupingPolicy {
    /// Sets the declared value floor.
    #[must_use]
    pub fn with_min_declared_value(mut self, value: Money) -> Self {
        self.min_declared_value = value;
        self
    }

    /// Sets the unit value used for unpriced lines.
    #[must_use]
    pub fn with_default_unit_value(mut self, value: Money) -> Self {
        self.default_unit_value = value;
        self
    }
}

/// Groups cart lines by seller shop.
///
/// Groups come back in the order their shop first appears in `lines`. The
/// origin and display name of a group come from its first line.
///
/// # Errors
///
/// Returns an arithmetic error if a declared value overflows.
///
/// # Examples
///
/// ```
/// use shipping_quote::application::services::{
///     FixedOriginResolver, GroupingPolicy, group_by_shop,
/// };
/// use shipping_quote::domain::entities::CartLine;
/// use shipping_quote::domain::value_objects::{ProductId, ShopId};
///
/// let lines = vec![
///     CartLine::new(ProductId::new("p1"), ShopId::new("a"), 1)
///         .with_unit_price_minor(10_000, "COP"),
///     CartLine::new(ProductId::new("p2"), ShopId::new("a"), 2)
///         .with_unit_price_minor(20_000, "COP"),
/// ];
/// let resolver = FixedOriginResolver::default();
/// let groups = group_by_shop(&lines, &resolver, &GroupingPolicy::default()).unwrap();
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].items_count(), 3);
/// assert_eq!(groups[0].declared_value().to_string(), "30000");
/// ```
pub fn group_by_shop(
    lines: &[CartLine],
    origin_resolver: &dyn OriginResolver,
    policy: &GroupingPolicy,
) -> ArithmeticResult<Vec<ShopGroup>> {
    let mut groups: Vec<ShopGroup> = Vec::new();
    let mut index: HashMap<&ShopId, usize> = HashMap::new();

    for line in lines {
        let slot = *index.entry(&line.shop_id).or_insert_with(|| {
            groups.push(ShopGroup::new(
                line.shop_id.clone(),
                line.display_shop_name(),
                origin_resolver.resolve(line),
            ));
            groups.len() - 1
        });

        if line.quantity == 0 {
            continue;
        }

        let unit_value = line.declared_unit_value(policy.default_unit_value);
        if let Some(group) = groups.get_mut(slot) {
            group.add_units(unit_value, line.quantity, Piece::for_line(line))?;
        }
    }

    for group in &mut groups {
        group.apply_value_floor(policy.min_declared_value);
    }

    Ok(groups)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::services::origin_resolver::FixedOriginResolver;
    use crate::domain::entities::Dimensions;
    use crate::domain::value_objects::{LocalityCode, ProductId};
    use rust_decimal::Decimal;

    fn line(shop: &str, qty: u32, minor: i64) -> CartLine {
        CartLine::new(ProductId::new(format!("{}-{}", shop, qty)), ShopId::new(shop), qty)
            .with_unit_price_minor(minor, "COP")
    }

    fn group(lines: &[CartLine]) -> Vec<ShopGroup> {
        group_by_shop(lines, &FixedOriginResolver::default(), &GroupingPolicy::default())
            .unwrap()
    }

    #[test]
    fn small_cart_is_floored_once() {
        let groups = group(&[line("A", 1, 10_000), line("A", 2, 20_000)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items_count(), 3);
        assert_eq!(groups[0].declared_value(), Money::from_units(30_000));
    }

    #[test]
    fn values_above_floor_are_kept_exactly() {
        let groups = group(&[line("A", 2, 2_500_000), line("A", 1, 1_234_550)]);
        assert_eq!(
            groups[0].declared_value().get(),
            Decimal::new(62_345_50, 2)
        );
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let groups = group(&[
            line("B", 1, 100),
            line("A", 1, 100),
            line("B", 1, 100),
            line("C", 1, 100),
        ]);
        let ids: Vec<_> = groups.iter().map(|g| g.shop_id().as_str()).collect();
        assert_eq!(ids, ["B", "A", "C"]);
        assert_eq!(groups[0].items_count(), 2);
    }

    #[test]
    fn unpriced_line_uses_default_unit_value() {
        let unpriced = CartLine::new(ProductId::new("p"), ShopId::new("A"), 2);
        let groups = group(&[unpriced]);
        assert_eq!(groups[0].declared_value(), Money::from_units(100_000));
    }

    #[test]
    fn list_price_used_when_minor_missing() {
        let priced = CartLine::new(ProductId::new("p"), ShopId::new("A"), 1)
            .with_list_price(Decimal::from(75_000));
        assert_eq!(group(&[priced])[0].declared_value(), Money::from_units(75_000));
    }

    #[test]
    fn zero_quantity_contributes_nothing() {
        let groups = group(&[line("A", 0, 9_999_999)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items_count(), 0);
        assert_eq!(groups[0].declared_value(), Money::from_units(30_000));
    }

    #[test]
    fn pieces_carry_product_measurements() {
        let measured = line("A", 2, 100)
            .with_weight(Decimal::new(25, 1))
            .with_dimensions(Dimensions::new(
                Decimal::from(40),
                Decimal::from(30),
                Decimal::from(10),
            ));
        let groups = group(&[measured]);
        let pieces = groups[0].pieces();
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].weight_kg(), Decimal::new(25, 1));
        assert_eq!(pieces[1].length_cm(), Decimal::from(40));
    }

    #[test]
    fn missing_shop_name_falls_back_to_id() {
        let named = line("A", 1, 100).with_shop_name("Cerámica del Carmen");
        let groups = group(&[line("B", 1, 100), named]);
        assert_eq!(groups[0].shop_name(), "B");
        assert_eq!(groups[1].shop_name(), "Cerámica del Carmen");
    }

    #[test]
    fn origin_comes_from_resolver() {
        let resolver = FixedOriginResolver::new(LocalityCode::new("76001").unwrap());
        let groups =
            group_by_shop(&[line("A", 1, 100)], &resolver, &GroupingPolicy::default()).unwrap();
        assert_eq!(groups[0].origin().as_str(), "76001");
    }

    #[test]
    fn custom_policy_applies() {
        let policy = GroupingPolicy::default()
            .with_min_declared_value(Money::from_units(1_000))
            .with_default_unit_value(Money::from_units(7));
        let unpriced = CartLine::new(ProductId::new("p"), ShopId::new("A"), 3);
        let groups = group_by_shop(&[unpriced], &FixedOriginResolver::default(), &policy).unwrap();
        assert_eq!(groups[0].declared_value(), Money::from_units(1_000));
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group(&[]).is_empty());
    }
}
