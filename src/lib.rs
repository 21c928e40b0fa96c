//! # Bakeplan
//!
//! 烘焙生產需求計算系統：依據點與交貨日，將已確認訂單
//! 換算為各麵糰攪拌量、酥皮張數、縮放後食材清單與攪拌日。

// Re-export 主要類型
pub use bakeplan_calc::{IngredientScaler, OrderAggregator, PlanRequest, ProductionPlanner};
pub use bakeplan_core::{
    BaseDough, LaminationStyle, Order, OrderLine, OrderStatus, PlanError, Product, ProductionPlan,
    Recipe, RecipeIngredient, Site,
};
pub use bakeplan_store::MemoryStore;
