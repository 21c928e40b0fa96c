//! 食材縮放
//!
//! 三段式縮放策略，依嚴格優先序逐一嘗試：
//! 1. 配方縮放：以麵糰總重對配方標準產量縮放
//! 2. 僅重量：無可用配方，只回報應備總重
//! 3. 張數回退：未設定每張麵糰重時，以張數+批數作為倍率
//!
//! 皆不適用時回報明確的零結果。應備總重只進不捨：
//! 食材備料不足是不可接受的失敗模式。

use rust_decimal::{Decimal, RoundingStrategy};

use bakeplan_core::{normalize_to_g, IngredientLine, Recipe, RecipeIngredient};

use crate::sheets::DoughProduction;

/// 縮放輸入
#[derive(Debug)]
pub struct ScalingContext<'a> {
    /// 麵糰產能需求
    pub production: &'a DoughProduction,

    /// 麵糰配方
    pub recipe: Option<&'a Recipe>,

    /// 配方食材
    pub ingredients: &'a [RecipeIngredient],
}

impl ScalingContext<'_> {
    /// 麵糰總需求重（公斤）
    pub fn total_dough_kg(&self) -> Decimal {
        self.production.total_dough_kg()
    }

    /// 配方標準產量（公斤）；無配方、單位不明或產量非正時為 None
    pub fn yield_kg(&self) -> Option<Decimal> {
        let recipe = self.recipe?;
        recipe.yield_kg().ok().filter(|kg| *kg > Decimal::ZERO)
    }
}

/// 縮放結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledMix {
    /// 應備麵糰總量（公斤）
    pub total_kg: Decimal,

    /// 縮放後食材清單
    pub ingredients: Vec<IngredientLine>,
}

impl ScaledMix {
    /// 明確的零結果
    pub fn zero() -> Self {
        Self {
            total_kg: Decimal::ZERO,
            ingredients: Vec::new(),
        }
    }
}

/// 縮放策略
pub trait ScalingStrategy {
    /// 策略名稱（記錄用）
    fn name(&self) -> &'static str;

    /// 嘗試縮放；條件不符時回傳 None，交由下一個策略
    fn try_scale(&self, ctx: &ScalingContext) -> Option<ScaledMix>;
}

/// 依倍率縮放食材清單，用量四捨五入至小數兩位
fn scale_lines(ingredients: &[RecipeIngredient], factor: Decimal) -> Vec<IngredientLine> {
    ingredients
        .iter()
        .map(|ing| IngredientLine {
            name: ing.name.clone(),
            quantity: (ing.quantity * factor)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            unit: ing.unit.clone(),
        })
        .collect()
}

/// 配方縮放：倍率 = 麵糰總重 / 配方標準產量
pub struct RecipeScaling;

impl ScalingStrategy for RecipeScaling {
    fn name(&self) -> &'static str {
        "recipe_scaling"
    }

    fn try_scale(&self, ctx: &ScalingContext) -> Option<ScaledMix> {
        let total_kg = ctx.total_dough_kg();
        if total_kg <= Decimal::ZERO {
            return None;
        }
        let yield_kg = ctx.yield_kg()?;

        let factor = total_kg / yield_kg;
        Some(ScaledMix {
            total_kg: total_kg.ceil(),
            ingredients: scale_lines(ctx.ingredients, factor),
        })
    }
}

/// 僅重量：有總重但無可用配方
pub struct WeightOnly;

impl ScalingStrategy for WeightOnly {
    fn name(&self) -> &'static str {
        "weight_only"
    }

    fn try_scale(&self, ctx: &ScalingContext) -> Option<ScaledMix> {
        let total_kg = ctx.total_dough_kg();
        if total_kg <= Decimal::ZERO {
            return None;
        }

        Some(ScaledMix {
            total_kg: total_kg.ceil(),
            ingredients: Vec::new(),
        })
    }
}

/// 張數回退：未設定每張麵糰重時，以張數+批數作為倍率
pub struct SheetCountFallback;

impl ScalingStrategy for SheetCountFallback {
    fn name(&self) -> &'static str {
        "sheet_count_fallback"
    }

    fn try_scale(&self, ctx: &ScalingContext) -> Option<ScaledMix> {
        if ctx.total_dough_kg() > Decimal::ZERO || ctx.recipe.is_none() {
            return None;
        }
        let factor = ctx.production.sheet_batch_factor();
        if factor == 0 {
            return None;
        }

        let ingredients = scale_lines(ctx.ingredients, Decimal::from(factor));
        let total_kg = if ingredients.is_empty() {
            // 配方無食材：以張數 × 標準產量估算
            let yield_kg = ctx.yield_kg().unwrap_or(Decimal::ZERO);
            Decimal::from(ctx.production.total_sheets) * yield_kg
        } else {
            // 縮放後食材質量合計（不明單位不計入）
            let grams: Decimal = ingredients
                .iter()
                .filter_map(|line| normalize_to_g(line.quantity, &line.unit).ok())
                .sum();
            (grams / Decimal::from(1000))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        };

        Some(ScaledMix {
            total_kg,
            ingredients,
        })
    }
}

/// 食材縮放計算器
pub struct IngredientScaler;

impl IngredientScaler {
    /// 策略鏈（依優先序）
    fn strategies() -> [&'static dyn ScalingStrategy; 3] {
        [&RecipeScaling, &WeightOnly, &SheetCountFallback]
    }

    /// 依序套用縮放策略，皆不適用時回報明確的零結果
    pub fn scale(ctx: &ScalingContext) -> ScaledMix {
        for strategy in Self::strategies() {
            if let Some(scaled) = strategy.try_scale(ctx) {
                tracing::debug!("採用縮放策略: {}", strategy.name());
                return scaled;
            }
        }

        ScaledMix::zero()
    }

    /// 款式配方依張數縮放
    pub fn scale_by_count(ingredients: &[RecipeIngredient], count: u32) -> Vec<IngredientLine> {
        scale_lines(ingredients, Decimal::from(count))
    }
}
