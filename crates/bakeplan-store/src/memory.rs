//! 記憶體內存放區實作

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use uuid::Uuid;

use bakeplan_core::{
    BaseDough, CatalogStore, ConfirmedLine, Order, OrderLine, OrderStore, Product, Recipe,
    RecipeIngredient, RecipeStore, Site, StoreResult,
};

/// 記憶體內存放區
///
/// 以據點分隔目錄資料；訂單查詢依據點、交貨日與狀態過濾後
/// 與明細join。所有查詢皆為不可失敗的純讀取。
#[derive(Debug, Default)]
pub struct MemoryStore {
    sites: BTreeMap<String, Site>,
    orders: HashMap<Uuid, Order>,
    order_lines: Vec<OrderLine>,
    doughs: BTreeMap<String, Vec<BaseDough>>,
    products: BTreeMap<String, Vec<Product>>,
    recipes: HashMap<String, Recipe>,
    ingredients: HashMap<String, Vec<RecipeIngredient>>,
}

impl MemoryStore {
    /// 創建空的存放區
    pub fn new() -> Self {
        Self::default()
    }

    /// 登錄據點
    pub fn add_site(&mut self, site: Site) {
        self.sites.insert(site.id.clone(), site);
    }

    /// 登錄訂單
    pub fn add_order(&mut self, order: Order) {
        self.orders.insert(order.id, order);
    }

    /// 登錄訂單明細
    pub fn add_order_line(&mut self, line: OrderLine) {
        self.order_lines.push(line);
    }

    /// 登錄基礎麵糰（含其開酥款式）
    pub fn add_base_dough(&mut self, site_id: &str, dough: BaseDough) {
        self.doughs
            .entry(site_id.to_string())
            .or_default()
            .push(dough);
    }

    /// 登錄產品
    pub fn add_product(&mut self, site_id: &str, product: Product) {
        self.products
            .entry(site_id.to_string())
            .or_default()
            .push(product);
    }

    /// 登錄配方
    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.insert(recipe.id.clone(), recipe);
    }

    /// 登錄配方食材
    pub fn add_ingredient(&mut self, ingredient: RecipeIngredient) {
        self.ingredients
            .entry(ingredient.recipe_id.clone())
            .or_default()
            .push(ingredient);
    }
}

impl OrderStore for MemoryStore {
    fn confirmed_lines(
        &self,
        site_id: &str,
        delivery_date: NaiveDate,
    ) -> StoreResult<Vec<ConfirmedLine>> {
        let lines = self
            .order_lines
            .iter()
            .filter(|line| {
                self.orders.get(&line.order_id).is_some_and(|order| {
                    order.site_id == site_id
                        && order.delivery_date == delivery_date
                        && order.is_production_relevant()
                })
            })
            .map(|line| ConfirmedLine::new(line.order_id, line.product_id.clone(), line.quantity))
            .collect();

        Ok(lines)
    }
}

impl CatalogStore for MemoryStore {
    fn find_site(&self, site_id: &str) -> StoreResult<Option<Site>> {
        Ok(self.sites.get(site_id).cloned())
    }

    fn base_doughs(&self, site_id: &str) -> StoreResult<Vec<BaseDough>> {
        Ok(self
            .doughs
            .get(site_id)
            .map(|doughs| doughs.iter().filter(|d| d.active).cloned().collect())
            .unwrap_or_default())
    }

    fn products(&self, site_id: &str) -> StoreResult<Vec<Product>> {
        Ok(self.products.get(site_id).cloned().unwrap_or_default())
    }
}

impl RecipeStore for MemoryStore {
    fn find_recipe(&self, recipe_id: &str) -> StoreResult<Option<Recipe>> {
        Ok(self.recipes.get(recipe_id).cloned())
    }

    fn ingredients(&self, recipe_id: &str) -> StoreResult<Vec<RecipeIngredient>> {
        Ok(self.ingredients.get(recipe_id).cloned().unwrap_or_default())
    }
}
