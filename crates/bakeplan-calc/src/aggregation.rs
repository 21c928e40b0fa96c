//! 訂單彙總

use std::collections::{BTreeMap, HashSet};

use bakeplan_core::ConfirmedLine;
use uuid::Uuid;

/// 訂單彙總結果
#[derive(Debug, Clone, Default)]
pub struct OrderAggregation {
    /// 產品ID → 訂購總件數（僅保留正數）
    pub totals: BTreeMap<String, u32>,

    /// 已確認/已鎖定訂單數
    pub confirmed_orders: u32,
}

impl OrderAggregation {
    /// 檢查是否無任何需求
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// 訂單彙總計算器
pub struct OrderAggregator;

impl OrderAggregator {
    /// 依產品彙總訂購件數，並統計不重複訂單數
    pub fn aggregate(lines: &[ConfirmedLine]) -> OrderAggregation {
        let mut totals: BTreeMap<String, u32> = BTreeMap::new();
        let mut order_ids: HashSet<Uuid> = HashSet::new();

        for line in lines {
            order_ids.insert(line.order_id);
            *totals.entry(line.product_id.clone()).or_insert(0) += line.quantity;
        }

        // 彙總為零的產品不進入後續計算
        totals.retain(|_, qty| *qty > 0);

        OrderAggregation {
            totals,
            confirmed_orders: order_ids.len() as u32,
        }
    }
}
