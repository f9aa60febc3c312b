//! Property tests of shop grouping invariants.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use proptest::prelude::*;
use shipping_quote::application::services::{FixedOriginResolver, GroupingPolicy, group_by_shop};
use shipping_quote::domain::entities::{CartLine, ShopGroup};
use shipping_quote::domain::value_objects::{Money, ProductId, ShopId};
use std::collections::{HashMap, HashSet};

fn arb_line() -> impl Strategy<Value = CartLine> {
    (0usize..6, 0u32..8, prop::option::of(0i64..50_000_000)).prop_map(|(shop, quantity, minor)| {
        let line = CartLine::new(
            ProductId::new(format!("p-{}", shop)),
            ShopId::new(format!("shop-{}", shop)),
            quantity,
        );
        match minor {
            Some(minor) => line.with_unit_price_minor(minor, "COP"),
            None => line,
        }
    })
}

fn group_all(lines: &[CartLine]) -> Vec<ShopGroup> {
    group_by_shop(lines, &FixedOriginResolver::default(), &GroupingPolicy::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn one_group_per_distinct_shop(lines in prop::collection::vec(arb_line(), 0..40)) {
        let groups = group_all(&lines);
        let distinct: HashSet<_> = lines.iter().map(|l| l.shop_id.clone()).collect();
        prop_assert_eq!(groups.len(), distinct.len());
    }

    #[test]
    fn declared_value_never_below_floor(lines in prop::collection::vec(arb_line(), 1..40)) {
        let policy = GroupingPolicy::default();
        let groups = group_by_shop(&lines, &FixedOriginResolver::default(), &policy).unwrap();
        for group in &groups {
            prop_assert!(group.declared_value() >= policy.min_declared_value);
            prop_assert!(group.declared_value() >= Money::from_units(30_000));
        }
    }

    #[test]
    fn pieces_match_summed_quantities(lines in prop::collection::vec(arb_line(), 1..40)) {
        let groups = group_all(&lines);
        let mut expected: HashMap<ShopId, usize> = HashMap::new();
        for line in &lines {
            *expected.entry(line.shop_id.clone()).or_default() += line.quantity as usize;
        }
        for group in &groups {
            prop_assert_eq!(group.items_count(), expected[group.shop_id()]);
            prop_assert_eq!(group.pieces().len(), group.items_count());
        }
    }

    #[test]
    fn groups_follow_first_appearance(lines in prop::collection::vec(arb_line(), 1..40)) {
        let groups = group_all(&lines);
        let mut seen = Vec::new();
        for line in &lines {
            if !seen.contains(&line.shop_id) {
                seen.push(line.shop_id.clone());
            }
        }
        let order: Vec<_> = groups.iter().map(|g| g.shop_id().clone()).collect();
        prop_assert_eq!(order, seen);
    }
}
