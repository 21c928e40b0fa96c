//! 生產計劃結果模型
//!
//! 計算結果不落庫：每次請求重新計算，相同輸入必得相同輸出。

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 訂單彙總
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// 已確認/已鎖定訂單數
    pub confirmed_orders: u32,

    /// 待確認訂單數（固定回報 0，沿用既有行為）
    pub pending_orders: u32,
}

impl OrderSummary {
    /// 創建訂單彙總
    pub fn new(confirmed_orders: u32) -> Self {
        Self {
            confirmed_orders,
            pending_orders: 0,
        }
    }
}

/// 產品需求明細
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDemand {
    /// 產品顯示名稱
    pub name: String,

    /// 訂購件數
    pub quantity: u32,
}

/// 縮放後的食材用量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// 食材名稱
    pub name: String,

    /// 縮放後用量
    pub quantity: Decimal,

    /// 用量單位
    pub unit: String,
}

/// 單一開酥款式的酥皮結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSheetResult {
    /// 款式ID
    pub style_id: String,

    /// 款式名稱
    pub style_name: String,

    /// 所屬麵糰ID
    pub base_dough_id: String,

    /// 所屬麵糰名稱
    pub base_dough_name: String,

    /// 每張酥皮可切件數
    pub products_per_sheet: u32,

    /// 開酥提前天數
    pub laminate_lead_days: Option<u32>,

    /// 款式配方ID
    pub recipe_id: Option<String>,

    /// 款式配方名稱
    pub recipe_name: Option<String>,

    /// 訂購件數合計
    pub total_products: u32,

    /// 所需酥皮張數（無條件進位）
    pub sheets_needed: u32,

    /// 款式配方食材（依張數縮放）
    pub ingredients: Vec<IngredientLine>,

    /// 款式下各產品需求
    pub products: Vec<ProductDemand>,
}

/// 單一麵糰的攪拌結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoughMixResult {
    /// 麵糰ID
    pub dough_id: String,

    /// 麵糰名稱
    pub dough_name: String,

    /// 攪拌提前天數
    pub mix_lead_days: u32,

    /// 配方ID
    pub recipe_id: Option<String>,

    /// 配方名稱
    pub recipe_name: Option<String>,

    /// 應備麵糰總量（公斤，只進不捨）
    pub total_kg: Decimal,

    /// 所需批數（無批次設定時為 None）
    pub total_batches: Option<u32>,

    /// 單批重量（公斤）
    pub batch_size_kg: Option<Decimal>,

    /// 單批產出件數
    pub units_per_batch: Option<u32>,

    /// 縮放後食材清單
    pub ingredients: Vec<IngredientLine>,

    /// 各開酥款式結果
    pub lamination_styles: Vec<StyleSheetResult>,

    /// 直接成型產品需求
    pub direct_products: Vec<ProductDemand>,
}

impl DoughMixResult {
    /// 此麵糰所需酥皮張數合計
    pub fn total_sheets(&self) -> u32 {
        self.lamination_styles.iter().map(|s| s.sheets_needed).sum()
    }
}

/// 單一款式的酥皮彙總
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSheetSummary {
    /// 款式名稱
    pub style_name: String,

    /// 所屬麵糰名稱
    pub dough_name: String,

    /// 酥皮張數
    pub sheets: u32,

    /// 訂購件數合計
    pub products: u32,

    /// 每張酥皮可切件數
    pub products_per_sheet: u32,

    /// 開酥提前天數
    pub laminate_lead_days: Option<u32>,
}

/// 酥皮彙總
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSummary {
    /// 酥皮張數合計
    pub total_sheets: u32,

    /// 各款式明細
    pub by_style: Vec<StyleSheetSummary>,
}

/// 警告嚴重度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    Info,
    Warning,
}

/// 計劃警告
///
/// 記錄被容忍的資料缺漏（懸空引用、不支援的單位等），
/// 不影響任何數值結果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanWarning {
    /// 相關主體ID（產品/麵糰/配方）
    pub subject_id: String,

    /// 警告內容
    pub message: String,

    /// 嚴重度
    pub severity: WarningSeverity,
}

impl PlanWarning {
    pub fn new(subject_id: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            subject_id,
            message,
            severity,
        }
    }

    pub fn info(subject_id: String, message: String) -> Self {
        Self::new(subject_id, message, WarningSeverity::Info)
    }

    pub fn warning(subject_id: String, message: String) -> Self {
        Self::new(subject_id, message, WarningSeverity::Warning)
    }
}

/// 生產計劃（計算結果）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// 交貨日期
    pub delivery_date: NaiveDate,

    /// 攪拌日（全計劃共用）
    pub mix_day: NaiveDate,

    /// 訂單彙總
    pub order_summary: OrderSummary,

    /// 各麵糰攪拌結果（依麵糰名稱排序）
    pub dough_mixes: Vec<DoughMixResult>,

    /// 酥皮彙總（全計劃無酥皮需求時為 None）
    pub sheet_summary: Option<SheetSummary>,

    /// 計劃警告
    pub warnings: Vec<PlanWarning>,
}

impl ProductionPlan {
    /// 檢查是否為空計劃（無任何麵糰需求）
    pub fn is_empty(&self) -> bool {
        self.dough_mixes.is_empty()
    }
}
