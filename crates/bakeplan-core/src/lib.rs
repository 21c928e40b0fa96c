//! # Bakeplan Core
//!
//! 核心資料模型與類型定義

pub mod catalog;
pub mod order;
pub mod plan;
pub mod recipe;
pub mod store;
pub mod units;

// Re-export 主要類型
pub use catalog::{BaseDough, LaminationStyle, Product, Site};
pub use order::{Order, OrderLine, OrderStatus};
pub use plan::{
    DoughMixResult, IngredientLine, OrderSummary, PlanWarning, ProductDemand, ProductionPlan,
    SheetSummary, StyleSheetResult, StyleSheetSummary, WarningSeverity,
};
pub use recipe::{Recipe, RecipeIngredient};
pub use store::{CatalogStore, ConfirmedLine, OrderStore, RecipeStore, StoreError, StoreResult};
pub use units::{normalize_to_g, normalize_yield_to_kg, UnitError};

/// 生產計劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("請求參數缺失: {0}")]
    InvalidRequest(String),

    #[error("找不到生產據點: {0}")]
    SiteNotFound(String),

    #[error("資料存放區讀取失敗: {0}")]
    StoreFailure(#[from] store::StoreError),
}

pub type Result<T> = std::result::Result<T, PlanError>;
