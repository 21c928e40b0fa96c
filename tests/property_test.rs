//! 性質測試

use std::collections::BTreeMap;

use bakeplan_calc::{IngredientScaler, ScalingContext, SheetCalculator};
use bakeplan_calc::{DoughDemand, DoughProduction, StyleDemand};
use bakeplan_core::{normalize_yield_to_kg, BaseDough, LaminationStyle, ProductDemand};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn single_style_demand(ordered: u32, per_sheet: u32) -> DoughDemand {
    let style = LaminationStyle::new(
        "S".to_string(),
        "款式".to_string(),
        "D".to_string(),
        per_sheet,
    );
    let mut by_style = BTreeMap::new();
    by_style.insert(
        "S".to_string(),
        StyleDemand {
            style,
            products: vec![ProductDemand {
                name: "產品".to_string(),
                quantity: ordered,
            }],
        },
    );
    DoughDemand {
        dough: BaseDough::new("D".to_string(), "麵糰".to_string(), 1),
        by_style,
        direct: Vec::new(),
    }
}

proptest! {
    #[test]
    fn prop_sheets_ceiling(ordered in 1u32..10_000, per_sheet in 1u32..500) {
        let production = SheetCalculator::compute(&single_style_demand(ordered, per_sheet));
        let sheets = production.by_style[0].sheets_needed;

        // 進位除法：產能涵蓋訂購量，且少一張即不足
        prop_assert_eq!(sheets, ordered.div_ceil(per_sheet));
        prop_assert!(sheets * per_sheet >= ordered);
        prop_assert!((sheets - 1) * per_sheet < ordered);
    }

    #[test]
    fn prop_batches_ceiling(ordered in 1u32..10_000, per_batch in 1u32..500, batch_kg in 1u32..100) {
        let dough = BaseDough::new("D".to_string(), "麵糰".to_string(), 1)
            .with_units_per_batch(per_batch)
            .with_batch_size_kg(Decimal::from(batch_kg));
        let demand = DoughDemand {
            dough,
            by_style: BTreeMap::new(),
            direct: vec![ProductDemand { name: "產品".to_string(), quantity: ordered }],
        };

        let production = SheetCalculator::compute(&demand);
        let batches = production.batches_needed.unwrap();

        prop_assert_eq!(batches, ordered.div_ceil(per_batch));
        prop_assert!(batches * per_batch >= ordered);
        prop_assert_eq!(production.direct_kg, Decimal::from(batches) * Decimal::from(batch_kg));
    }

    #[test]
    fn prop_reported_kg_never_below_demand(lamination_g in 0u32..1_000_000, direct_kg in 0u32..1_000) {
        let production = DoughProduction {
            by_style: Vec::new(),
            lamination_dough_g: Decimal::from(lamination_g),
            total_sheets: 1,
            direct_units: 0,
            batches_needed: None,
            direct_kg: Decimal::from(direct_kg),
        };
        let ctx = ScalingContext {
            production: &production,
            recipe: None,
            ingredients: &[],
        };

        let scaled = IngredientScaler::scale(&ctx);

        // 回報總重永不低於計算需求重
        prop_assert!(scaled.total_kg >= production.total_dough_kg());
    }

    #[test]
    fn prop_unit_round_trip(mantissa in 1u64..10_000_000) {
        // x kg → 克 → kg 往返不變
        let x = Decimal::new(mantissa as i64, 3);
        let kg = normalize_yield_to_kg(x, "kg").unwrap();
        let back = normalize_yield_to_kg(kg * Decimal::from(1000), "g").unwrap();
        prop_assert_eq!(back, kg);
    }
}
