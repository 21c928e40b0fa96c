//! 資料讀取契約
//!
//! 核心只透過唯讀查詢存取訂單、目錄與配方資料；
//! 任一讀取失敗即中止整次計算，不產出部分結果。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{BaseDough, Product, Recipe, RecipeIngredient, Site};

/// 存放區讀取錯誤
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("查詢失敗: {0}")]
    Query(String),

    #[error("連線失敗: {0}")]
    Connection(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// 已確認訂單明細投影（訂單與明細join後的最小欄位集）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmedLine {
    /// 所屬訂單ID
    pub order_id: Uuid,

    /// 產品ID
    pub product_id: String,

    /// 訂購件數
    pub quantity: u32,
}

impl ConfirmedLine {
    pub fn new(order_id: Uuid, product_id: String, quantity: u32) -> Self {
        Self {
            order_id,
            product_id,
            quantity,
        }
    }
}

/// 訂單存放區
pub trait OrderStore: Sync {
    /// 列出指定據點、指定交貨日，狀態為已確認/已鎖定的訂單明細
    fn confirmed_lines(
        &self,
        site_id: &str,
        delivery_date: NaiveDate,
    ) -> StoreResult<Vec<ConfirmedLine>>;
}

/// 目錄存放區
pub trait CatalogStore: Sync {
    /// 查詢據點
    fn find_site(&self, site_id: &str) -> StoreResult<Option<Site>>;

    /// 列出據點啟用中的基礎麵糰（含其開酥款式）
    fn base_doughs(&self, site_id: &str) -> StoreResult<Vec<BaseDough>>;

    /// 列出據點的產品
    fn products(&self, site_id: &str) -> StoreResult<Vec<Product>>;
}

/// 配方存放區
pub trait RecipeStore: Sync {
    /// 查詢配方
    fn find_recipe(&self, recipe_id: &str) -> StoreResult<Option<Recipe>>;

    /// 列出配方食材
    fn ingredients(&self, recipe_id: &str) -> StoreResult<Vec<RecipeIngredient>>;
}
