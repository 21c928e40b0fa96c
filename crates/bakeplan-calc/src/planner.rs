//! 生產計劃主引擎
//!
//! 單次請求的無狀態計算：一個據點加一個交貨日進，
//! 一份生產計劃出，不寫入任何存放區。

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use bakeplan_core::{
    CatalogStore, DoughMixResult, OrderStore, OrderSummary, PlanError, PlanWarning,
    ProductionPlan, RecipeStore, Result, SheetSummary, StyleSheetResult, StyleSheetSummary,
};

use crate::aggregation::OrderAggregator;
use crate::resolve::{BomResolver, CatalogIndex, DoughDemand};
use crate::scaling::{IngredientScaler, ScalingContext};
use crate::schedule::MixDayCalculator;
use crate::sheets::SheetCalculator;

/// 計劃請求
///
/// 據點與交貨日皆為必要參數；任一缺漏即拒絕，
/// 不觸及任何存放區。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// 生產據點ID
    pub site_id: Option<String>,

    /// 交貨日期
    pub delivery_date: Option<NaiveDate>,
}

impl PlanRequest {
    /// 創建完整的計劃請求
    pub fn new(site_id: impl Into<String>, delivery_date: NaiveDate) -> Self {
        Self {
            site_id: Some(site_id.into()),
            delivery_date: Some(delivery_date),
        }
    }

    /// 驗證必要參數
    fn validate(&self) -> Result<(&str, NaiveDate)> {
        let site_id = self
            .site_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| PlanError::InvalidRequest("site_id".to_string()))?;
        let delivery_date = self
            .delivery_date
            .ok_or_else(|| PlanError::InvalidRequest("delivery_date".to_string()))?;

        Ok((site_id, delivery_date))
    }
}

/// 生產計劃引擎
pub struct ProductionPlanner<'a> {
    orders: &'a dyn OrderStore,
    catalog: &'a dyn CatalogStore,
    recipes: &'a dyn RecipeStore,
}

impl<'a> ProductionPlanner<'a> {
    /// 創建新的計劃引擎
    pub fn new(
        orders: &'a dyn OrderStore,
        catalog: &'a dyn CatalogStore,
        recipes: &'a dyn RecipeStore,
    ) -> Self {
        Self {
            orders,
            catalog,
            recipes,
        }
    }

    /// 主計算入口
    pub fn plan(&self, request: &PlanRequest) -> Result<ProductionPlan> {
        let (site_id, delivery_date) = request.validate()?;

        // 據點必須存在
        let site = self
            .catalog
            .find_site(site_id)?
            .ok_or_else(|| PlanError::SiteNotFound(site_id.to_string()))?;

        tracing::info!("開始生產需求計算：據點 {}，交貨日 {}", site.name, delivery_date);
        let start_time = std::time::Instant::now();

        // Step 1: 訂單彙總
        tracing::debug!("Step 1: 訂單彙總");
        let lines = self.orders.confirmed_lines(site_id, delivery_date)?;
        let aggregation = OrderAggregator::aggregate(&lines);
        tracing::debug!(
            "有效產品 {} 項，訂單 {} 筆",
            aggregation.totals.len(),
            aggregation.confirmed_orders
        );

        // Step 2: 目錄讀取
        tracing::debug!("Step 2: 目錄讀取");
        let doughs = self.catalog.base_doughs(site_id)?;
        let products = self.catalog.products(site_id)?;
        let index = CatalogIndex::new(doughs);

        // Step 3: 產品分類與麵糰歸併
        tracing::debug!("Step 3: 產品分類與麵糰歸併");
        let (buckets, mut warnings) = BomResolver::resolve(&aggregation, &products, &index);
        tracing::debug!("需求麵糰 {} 項", buckets.len());

        // Step 4: 各麵糰攪拌計算（麵糰間互不相依，平行執行）
        tracing::debug!("Step 4: 各麵糰攪拌計算");
        let demands: Vec<&DoughDemand> = buckets.values().collect();
        let results: Vec<(DoughMixResult, Vec<PlanWarning>)> = demands
            .par_iter()
            .map(|demand| self.compute_dough_mix(demand))
            .collect::<Result<_>>()?;

        let mut dough_mixes = Vec::with_capacity(results.len());
        for (mix, mix_warnings) in results {
            dough_mixes.push(mix);
            warnings.extend(mix_warnings);
        }
        // 依麵糰名稱排序，輸出與儲存順序無關
        dough_mixes.sort_by(|a, b| {
            (a.dough_name.as_str(), a.dough_id.as_str())
                .cmp(&(b.dough_name.as_str(), b.dough_id.as_str()))
        });

        // Step 5: 攪拌日排程
        tracing::debug!("Step 5: 攪拌日排程");
        let mix_day =
            MixDayCalculator::mix_day(delivery_date, dough_mixes.iter().map(|m| m.mix_lead_days));

        // Step 6: 報表組裝
        tracing::debug!("Step 6: 報表組裝");
        let sheet_summary = Self::build_sheet_summary(&dough_mixes);

        let plan = ProductionPlan {
            delivery_date,
            mix_day,
            order_summary: OrderSummary::new(aggregation.confirmed_orders),
            dough_mixes,
            sheet_summary,
            warnings,
        };

        tracing::info!(
            "生產需求計算完成：麵糰 {} 項，耗時 {:?}",
            plan.dough_mixes.len(),
            start_time.elapsed()
        );

        Ok(plan)
    }

    /// 單一麵糰的攪拌結果
    fn compute_dough_mix(
        &self,
        demand: &DoughDemand,
    ) -> Result<(DoughMixResult, Vec<PlanWarning>)> {
        let dough = &demand.dough;
        let production = SheetCalculator::compute(demand);
        let mut warnings = Vec::new();

        // 麵糰配方與食材
        let recipe = match &dough.recipe_id {
            Some(recipe_id) => {
                let found = self.recipes.find_recipe(recipe_id)?;
                if found.is_none() {
                    warnings.push(PlanWarning::warning(
                        dough.id.clone(),
                        format!("配方 {recipe_id} 不存在"),
                    ));
                }
                found
            }
            None => None,
        };
        let ingredients = match &recipe {
            Some(recipe) => self.recipes.ingredients(&recipe.id)?,
            None => Vec::new(),
        };

        if let Some(recipe) = &recipe {
            if recipe.yield_kg().is_err() {
                warnings.push(PlanWarning::warning(
                    recipe.id.clone(),
                    format!("配方產量單位不明: {}", recipe.yield_unit),
                ));
            }
        }

        let scaled = IngredientScaler::scale(&ScalingContext {
            production: &production,
            recipe: recipe.as_ref(),
            ingredients: &ingredients,
        });

        // 各款式結果
        let mut lamination_styles = Vec::with_capacity(production.by_style.len());
        for sheets in &production.by_style {
            let style_demand = &demand.by_style[&sheets.style_id];
            let style = &style_demand.style;

            let (style_recipe, style_ingredients) = match &style.recipe_id {
                Some(recipe_id) => {
                    let found = self.recipes.find_recipe(recipe_id)?;
                    let ingredients = match &found {
                        Some(recipe) => self.recipes.ingredients(&recipe.id)?,
                        None => Vec::new(),
                    };
                    (found, ingredients)
                }
                None => (None, Vec::new()),
            };

            lamination_styles.push(StyleSheetResult {
                style_id: style.id.clone(),
                style_name: style.name.clone(),
                base_dough_id: dough.id.clone(),
                base_dough_name: dough.name.clone(),
                products_per_sheet: style.products_per_sheet,
                laminate_lead_days: style.laminate_lead_days,
                recipe_id: style_recipe.as_ref().map(|r| r.id.clone()),
                recipe_name: style_recipe.as_ref().map(|r| r.name.clone()),
                total_products: sheets.total_products,
                sheets_needed: sheets.sheets_needed,
                ingredients: IngredientScaler::scale_by_count(
                    &style_ingredients,
                    sheets.sheets_needed,
                ),
                products: style_demand.products.clone(),
            });
        }

        let mix = DoughMixResult {
            dough_id: dough.id.clone(),
            dough_name: dough.name.clone(),
            mix_lead_days: dough.mix_lead_days,
            recipe_id: recipe.as_ref().map(|r| r.id.clone()),
            recipe_name: recipe.as_ref().map(|r| r.name.clone()),
            total_kg: scaled.total_kg,
            total_batches: production.batches_needed,
            batch_size_kg: dough.batch_size_kg,
            units_per_batch: dough.units_per_batch,
            ingredients: scaled.ingredients,
            lamination_styles,
            direct_products: demand.direct.clone(),
        };

        Ok((mix, warnings))
    }

    /// 酥皮彙總；全計劃無酥皮需求時為 None
    fn build_sheet_summary(dough_mixes: &[DoughMixResult]) -> Option<SheetSummary> {
        let by_style: Vec<StyleSheetSummary> = dough_mixes
            .iter()
            .flat_map(|mix| mix.lamination_styles.iter())
            .map(|style| StyleSheetSummary {
                style_name: style.style_name.clone(),
                dough_name: style.base_dough_name.clone(),
                sheets: style.sheets_needed,
                products: style.total_products,
                products_per_sheet: style.products_per_sheet,
                laminate_lead_days: style.laminate_lead_days,
            })
            .collect();

        let total_sheets: u32 = by_style.iter().map(|s| s.sheets).sum();
        if total_sheets == 0 {
            return None;
        }

        Some(SheetSummary {
            total_sheets,
            by_style,
        })
    }
}
