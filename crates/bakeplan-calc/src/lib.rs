//! # Bakeplan Calculation Engine
//!
//! 核心生產需求計算引擎

pub mod aggregation;
pub mod planner;
pub mod resolve;
pub mod scaling;
pub mod schedule;
pub mod sheets;

// Re-export 主要類型
pub use aggregation::{OrderAggregation, OrderAggregator};
pub use planner::{PlanRequest, ProductionPlanner};
pub use resolve::{BomResolver, CatalogIndex, DoughDemand, PathResolution, StyleDemand};
pub use scaling::{IngredientScaler, ScaledMix, ScalingContext, ScalingStrategy};
pub use schedule::MixDayCalculator;
pub use sheets::{DoughProduction, SheetCalculator, StyleSheets};
