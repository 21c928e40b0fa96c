//! 配方模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::units::{self, UnitError};

/// 配方
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// 配方ID
    pub id: String,

    /// 配方名稱
    pub name: String,

    /// 標準產量
    pub yield_quantity: Decimal,

    /// 產量單位（質量或容量單位字串）
    pub yield_unit: String,
}

impl Recipe {
    /// 創建新的配方
    pub fn new(id: String, name: String, yield_quantity: Decimal, yield_unit: String) -> Self {
        Self {
            id,
            name,
            yield_quantity,
            yield_unit,
        }
    }

    /// 標準產量換算為公斤
    pub fn yield_kg(&self) -> Result<Decimal, UnitError> {
        units::normalize_yield_to_kg(self.yield_quantity, &self.yield_unit)
    }
}

/// 配方食材
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// 所屬配方ID
    pub recipe_id: String,

    /// 食材名稱
    pub name: String,

    /// 基準用量
    pub quantity: Decimal,

    /// 用量單位
    pub unit: String,
}

impl RecipeIngredient {
    /// 創建新的配方食材
    pub fn new(recipe_id: String, name: String, quantity: Decimal, unit: String) -> Self {
        Self {
            recipe_id,
            name,
            quantity,
            unit,
        }
    }
}
