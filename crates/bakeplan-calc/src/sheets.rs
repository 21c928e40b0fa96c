//! 酥皮與批次計算
//!
//! 張數與批數一律無條件進位：不足一張酥皮仍需整張，
//! 不足一批仍需整批。

use rust_decimal::Decimal;

use crate::resolve::DoughDemand;

/// 單一款式的酥皮需求
#[derive(Debug, Clone)]
pub struct StyleSheets {
    /// 款式ID
    pub style_id: String,

    /// 訂購件數合計
    pub total_products: u32,

    /// 所需酥皮張數
    pub sheets_needed: u32,

    /// 此款式耗用麵糰重（克），未設定每張麵糰重時為 None
    pub dough_g: Option<Decimal>,
}

/// 單一麵糰的產能需求
#[derive(Debug, Clone)]
pub struct DoughProduction {
    /// 各款式酥皮需求（依款式ID順序）
    pub by_style: Vec<StyleSheets>,

    /// 開酥麵糰需求合計（克）
    pub lamination_dough_g: Decimal,

    /// 酥皮張數合計
    pub total_sheets: u32,

    /// 直接成型件數合計
    pub direct_units: u32,

    /// 所需批數（無批次設定時為 None）
    pub batches_needed: Option<u32>,

    /// 直接成型麵糰需求（公斤）
    pub direct_kg: Decimal,
}

impl DoughProduction {
    /// 麵糰總需求重（公斤）= 開酥克數/1000 + 直接成型公斤數
    pub fn total_dough_kg(&self) -> Decimal {
        self.lamination_dough_g / Decimal::from(1000) + self.direct_kg
    }

    /// 張數與批數合計（批數未設定視為 0）
    pub fn sheet_batch_factor(&self) -> u32 {
        self.total_sheets + self.batches_needed.unwrap_or(0)
    }
}

/// 酥皮與批次計算器
pub struct SheetCalculator;

impl SheetCalculator {
    /// 計算單一麵糰的酥皮張數、批數與麵糰重量需求
    pub fn compute(demand: &DoughDemand) -> DoughProduction {
        let mut by_style = Vec::with_capacity(demand.by_style.len());
        let mut lamination_dough_g = Decimal::ZERO;
        let mut total_sheets = 0u32;

        for (style_id, style_demand) in &demand.by_style {
            let total_products: u32 = style_demand.products.iter().map(|p| p.quantity).sum();
            // 目錄異常的 0 視為 1，避免除以零
            let per_sheet = style_demand.style.products_per_sheet.max(1);
            let sheets_needed = total_products.div_ceil(per_sheet);

            let dough_g = style_demand
                .style
                .dough_per_sheet_g
                .map(|g| Decimal::from(sheets_needed) * g);
            if let Some(g) = dough_g {
                lamination_dough_g += g;
            }

            total_sheets += sheets_needed;
            by_style.push(StyleSheets {
                style_id: style_id.clone(),
                total_products,
                sheets_needed,
                dough_g,
            });
        }

        let direct_units: u32 = demand.direct.iter().map(|p| p.quantity).sum();
        let (batches_needed, direct_kg) = match (
            demand.dough.units_per_batch,
            demand.dough.batch_size_kg,
        ) {
            (Some(units_per_batch), Some(batch_size_kg)) if direct_units > 0 => {
                let batches = direct_units.div_ceil(units_per_batch.max(1));
                (Some(batches), Decimal::from(batches) * batch_size_kg)
            }
            _ => (None, Decimal::ZERO),
        };

        DoughProduction {
            by_style,
            lamination_dough_g,
            total_sheets,
            direct_units,
            batches_needed,
            direct_kg,
        }
    }
}
