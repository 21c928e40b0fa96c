//! 訂單模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 訂單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// 待確認
    Pending,
    /// 已確認
    Confirmed,
    /// 已鎖定（截單後不可修改）
    Locked,
    /// 已出貨
    Dispatched,
    /// 已取消
    Cancelled,
}

impl OrderStatus {
    /// 檢查是否納入生產需求計算
    pub fn is_production_relevant(&self) -> bool {
        matches!(self, OrderStatus::Confirmed | OrderStatus::Locked)
    }
}

/// 客戶訂單
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// 訂單ID
    pub id: Uuid,

    /// 交貨日期
    pub delivery_date: NaiveDate,

    /// 訂單狀態
    pub status: OrderStatus,

    /// 客戶ID
    pub customer_id: String,

    /// 生產據點ID
    pub site_id: String,
}

impl Order {
    /// 創建新的訂單
    pub fn new(
        delivery_date: NaiveDate,
        status: OrderStatus,
        customer_id: String,
        site_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            delivery_date,
            status,
            customer_id,
            site_id,
        }
    }

    /// 建構器模式：指定訂單ID（匯入既有資料時使用）
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// 檢查是否納入生產需求計算
    pub fn is_production_relevant(&self) -> bool {
        self.status.is_production_relevant()
    }
}

/// 訂單明細
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// 明細ID
    pub id: Uuid,

    /// 所屬訂單ID
    pub order_id: Uuid,

    /// 產品ID
    pub product_id: String,

    /// 訂購數量（件）
    pub quantity: u32,
}

impl OrderLine {
    /// 創建新的訂單明細
    pub fn new(order_id: Uuid, product_id: String, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            product_id,
            quantity,
        }
    }
}
