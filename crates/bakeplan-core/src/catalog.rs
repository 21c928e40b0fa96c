//! 產品目錄模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 生產據點
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// 據點ID
    pub id: String,

    /// 據點名稱
    pub name: String,
}

impl Site {
    /// 創建新的據點
    pub fn new(id: String, name: String) -> Self {
        Self { id, name }
    }
}

/// 產品
///
/// 每個產品至多歸屬一條生產路徑：開酥款式或基礎麵糰。
/// 兩者皆未設定的產品不參與生產需求計算。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: String,

    /// 顯示名稱
    pub name: String,

    /// 直接成型路徑：基礎麵糰ID
    pub base_dough_id: Option<String>,

    /// 開酥路徑：開酥款式ID
    pub lamination_style_id: Option<String>,
}

impl Product {
    /// 創建新的產品（尚未指定生產路徑）
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            base_dough_id: None,
            lamination_style_id: None,
        }
    }

    /// 建構器模式：設置直接成型路徑
    pub fn with_base_dough(mut self, base_dough_id: String) -> Self {
        self.base_dough_id = Some(base_dough_id);
        self
    }

    /// 建構器模式：設置開酥路徑
    pub fn with_lamination_style(mut self, lamination_style_id: String) -> Self {
        self.lamination_style_id = Some(lamination_style_id);
        self
    }

    /// 檢查是否具有生產路徑
    pub fn has_production_path(&self) -> bool {
        self.base_dough_id.is_some() || self.lamination_style_id.is_some()
    }
}

/// 基礎麵糰
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseDough {
    /// 麵糰ID
    pub id: String,

    /// 麵糰名稱
    pub name: String,

    /// 配方ID
    pub recipe_id: Option<String>,

    /// 攪拌提前天數（交貨日前幾天必須開始攪拌）
    pub mix_lead_days: u32,

    /// 單批麵糰重量（公斤）
    pub batch_size_kg: Option<Decimal>,

    /// 單批可產出件數
    pub units_per_batch: Option<u32>,

    /// 是否啟用
    pub active: bool,

    /// 此麵糰下的開酥款式
    pub styles: Vec<LaminationStyle>,
}

impl BaseDough {
    /// 創建新的基礎麵糰
    pub fn new(id: String, name: String, mix_lead_days: u32) -> Self {
        Self {
            id,
            name,
            recipe_id: None,
            mix_lead_days,
            batch_size_kg: None,
            units_per_batch: None,
            active: true,
            styles: Vec::new(),
        }
    }

    /// 建構器模式：設置配方
    pub fn with_recipe(mut self, recipe_id: String) -> Self {
        self.recipe_id = Some(recipe_id);
        self
    }

    /// 建構器模式：設置單批重量
    pub fn with_batch_size_kg(mut self, batch_size_kg: Decimal) -> Self {
        self.batch_size_kg = Some(batch_size_kg);
        self
    }

    /// 建構器模式：設置單批產出件數
    pub fn with_units_per_batch(mut self, units_per_batch: u32) -> Self {
        self.units_per_batch = Some(units_per_batch);
        self
    }

    /// 建構器模式：設置啟用狀態
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// 建構器模式：添加開酥款式
    pub fn with_style(mut self, style: LaminationStyle) -> Self {
        self.styles.push(style);
        self
    }
}

/// 開酥款式
///
/// 一個款式恰好隸屬於一個基礎麵糰；開酥產品的有效麵糰
/// 一律取自其款式的所屬麵糰。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaminationStyle {
    /// 款式ID
    pub id: String,

    /// 款式名稱
    pub name: String,

    /// 所屬基礎麵糰ID
    pub base_dough_id: String,

    /// 配方ID
    pub recipe_id: Option<String>,

    /// 每張酥皮可切產品件數
    pub products_per_sheet: u32,

    /// 每張酥皮耗用麵糰重（克）
    pub dough_per_sheet_g: Option<Decimal>,

    /// 開酥作業提前天數
    pub laminate_lead_days: Option<u32>,
}

impl LaminationStyle {
    /// 創建新的開酥款式
    pub fn new(id: String, name: String, base_dough_id: String, products_per_sheet: u32) -> Self {
        Self {
            id,
            name,
            base_dough_id,
            recipe_id: None,
            products_per_sheet,
            dough_per_sheet_g: None,
            laminate_lead_days: None,
        }
    }

    /// 建構器模式：設置配方
    pub fn with_recipe(mut self, recipe_id: String) -> Self {
        self.recipe_id = Some(recipe_id);
        self
    }

    /// 建構器模式：設置每張酥皮耗用麵糰重（克）
    pub fn with_dough_per_sheet_g(mut self, grams: Decimal) -> Self {
        self.dough_per_sheet_g = Some(grams);
        self
    }

    /// 建構器模式：設置開酥提前天數
    pub fn with_laminate_lead_days(mut self, days: u32) -> Self {
        self.laminate_lead_days = Some(days);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_production_path() {
        let plain = Product::new("PROD-001".to_string(), "吐司".to_string());
        assert!(!plain.has_production_path());

        let direct = Product::new("PROD-002".to_string(), "法棍".to_string())
            .with_base_dough("DOUGH-BAGUETTE".to_string());
        assert!(direct.has_production_path());
        assert!(direct.lamination_style_id.is_none());

        let laminated = Product::new("PROD-003".to_string(), "可頌".to_string())
            .with_lamination_style("STYLE-CROISSANT".to_string());
        assert!(laminated.has_production_path());
        assert!(laminated.base_dough_id.is_none());
    }

    #[test]
    fn test_dough_builder() {
        let dough = BaseDough::new("DOUGH-001".to_string(), "可頌麵糰".to_string(), 2)
            .with_recipe("RCP-001".to_string())
            .with_batch_size_kg(Decimal::from(10))
            .with_units_per_batch(50)
            .with_style(LaminationStyle::new(
                "STYLE-001".to_string(),
                "原味可頌".to_string(),
                "DOUGH-001".to_string(),
                12,
            ));

        assert_eq!(dough.mix_lead_days, 2);
        assert_eq!(dough.recipe_id, Some("RCP-001".to_string()));
        assert_eq!(dough.units_per_batch, Some(50));
        assert!(dough.active);
        assert_eq!(dough.styles.len(), 1);
        assert_eq!(dough.styles[0].base_dough_id, dough.id);
    }

    #[test]
    fn test_style_builder() {
        let style = LaminationStyle::new(
            "STYLE-001".to_string(),
            "杏仁可頌".to_string(),
            "DOUGH-001".to_string(),
            8,
        )
        .with_recipe("RCP-010".to_string())
        .with_dough_per_sheet_g(Decimal::from(2400))
        .with_laminate_lead_days(1);

        assert_eq!(style.products_per_sheet, 8);
        assert_eq!(style.dough_per_sheet_g, Some(Decimal::from(2400)));
        assert_eq!(style.laminate_lead_days, Some(1));
    }
}
