//! 產品分類與麵糰歸併
//!
//! 將每個有需求的產品歸入其有效麵糰：開酥產品經款式歸入
//! 款式所屬麵糰，直接成型產品歸入自身指定麵糰。
//! 無法解析的引用視為目錄缺漏，排除於計算之外而非報錯。

use std::collections::{BTreeMap, HashMap};

use bakeplan_core::{BaseDough, LaminationStyle, PlanWarning, Product, ProductDemand};

use crate::aggregation::OrderAggregation;

/// 產品生產路徑解析結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResolution {
    /// 開酥路徑：經款式歸屬其所屬麵糰
    Laminated { dough_id: String, style_id: String },

    /// 直接成型路徑
    Direct { dough_id: String },

    /// 引用無法解析或未設定生產路徑，排除於計算之外
    Unresolved,
}

/// 目錄索引
#[derive(Debug)]
pub struct CatalogIndex {
    doughs: BTreeMap<String, BaseDough>,
    /// 款式ID → (所屬麵糰ID, 款式)
    styles: HashMap<String, (String, LaminationStyle)>,
}

impl CatalogIndex {
    /// 由目錄麵糰清單建立索引
    pub fn new(doughs: Vec<BaseDough>) -> Self {
        let mut style_index = HashMap::new();
        for dough in &doughs {
            for style in &dough.styles {
                // 有效麵糰一律取款式的所屬麵糰
                style_index.insert(style.id.clone(), (dough.id.clone(), style.clone()));
            }
        }

        Self {
            doughs: doughs.into_iter().map(|d| (d.id.clone(), d)).collect(),
            styles: style_index,
        }
    }

    /// 查詢麵糰
    pub fn dough(&self, dough_id: &str) -> Option<&BaseDough> {
        self.doughs.get(dough_id)
    }

    /// 查詢款式及其所屬麵糰ID
    pub fn style(&self, style_id: &str) -> Option<&(String, LaminationStyle)> {
        self.styles.get(style_id)
    }

    /// 產品分類：款式引用優先於麵糰引用
    pub fn classify(&self, product: &Product) -> PathResolution {
        if let Some(style_id) = &product.lamination_style_id {
            return match self.styles.get(style_id) {
                Some((dough_id, _)) => PathResolution::Laminated {
                    dough_id: dough_id.clone(),
                    style_id: style_id.clone(),
                },
                None => PathResolution::Unresolved,
            };
        }

        if let Some(dough_id) = &product.base_dough_id {
            return if self.doughs.contains_key(dough_id) {
                PathResolution::Direct {
                    dough_id: dough_id.clone(),
                }
            } else {
                PathResolution::Unresolved
            };
        }

        PathResolution::Unresolved
    }
}

/// 單一款式的需求
#[derive(Debug, Clone)]
pub struct StyleDemand {
    /// 款式
    pub style: LaminationStyle,

    /// 款式下各產品需求（依產品ID順序）
    pub products: Vec<ProductDemand>,
}

/// 單一麵糰的需求彙總
#[derive(Debug, Clone)]
pub struct DoughDemand {
    /// 麵糰
    pub dough: BaseDough,

    /// 款式ID → 款式需求
    pub by_style: BTreeMap<String, StyleDemand>,

    /// 直接成型產品需求（依產品ID順序）
    pub direct: Vec<ProductDemand>,
}

impl DoughDemand {
    fn new(dough: BaseDough) -> Self {
        Self {
            dough,
            by_style: BTreeMap::new(),
            direct: Vec::new(),
        }
    }
}

/// 麵糰歸併計算器
pub struct BomResolver;

impl BomResolver {
    /// 建立 麵糰ID → 需求彙總 的對照
    ///
    /// 僅有實際需求的麵糰會產生條目；彙總順序依產品ID，
    /// 結果與輸入順序無關。
    pub fn resolve(
        aggregation: &OrderAggregation,
        products: &[Product],
        index: &CatalogIndex,
    ) -> (BTreeMap<String, DoughDemand>, Vec<PlanWarning>) {
        let product_index: HashMap<&str, &Product> =
            products.iter().map(|p| (p.id.as_str(), p)).collect();

        let mut buckets: BTreeMap<String, DoughDemand> = BTreeMap::new();
        let mut warnings: Vec<PlanWarning> = Vec::new();

        for (product_id, &quantity) in &aggregation.totals {
            let Some(product) = product_index.get(product_id.as_str()) else {
                warnings.push(PlanWarning::warning(
                    product_id.clone(),
                    "訂購的產品不在目錄中，已排除".to_string(),
                ));
                continue;
            };

            let demand = ProductDemand {
                name: product.name.clone(),
                quantity,
            };

            match index.classify(product) {
                PathResolution::Laminated { dough_id, style_id } => {
                    let (_, style) = index
                        .style(&style_id)
                        .expect("款式索引與分類結果不一致");
                    let dough = index
                        .dough(&dough_id)
                        .expect("款式所屬麵糰必在索引中");

                    buckets
                        .entry(dough_id)
                        .or_insert_with(|| DoughDemand::new(dough.clone()))
                        .by_style
                        .entry(style_id)
                        .or_insert_with(|| StyleDemand {
                            style: style.clone(),
                            products: Vec::new(),
                        })
                        .products
                        .push(demand);
                }
                PathResolution::Direct { dough_id } => {
                    let dough = index.dough(&dough_id).expect("分類結果必在索引中");

                    buckets
                        .entry(dough_id)
                        .or_insert_with(|| DoughDemand::new(dough.clone()))
                        .direct
                        .push(demand);
                }
                PathResolution::Unresolved => {
                    if product.has_production_path() {
                        warnings.push(PlanWarning::warning(
                            product_id.clone(),
                            "引用的款式或麵糰不存在，已排除".to_string(),
                        ));
                    } else {
                        warnings.push(PlanWarning::info(
                            product_id.clone(),
                            "未設定生產路徑，不參與計算".to_string(),
                        ));
                    }
                }
            }
        }

        (buckets, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn croissant_dough() -> BaseDough {
        BaseDough::new("DOUGH-CROISSANT".to_string(), "可頌麵糰".to_string(), 2)
            .with_style(
                LaminationStyle::new(
                    "STYLE-PLAIN".to_string(),
                    "原味可頌".to_string(),
                    "DOUGH-CROISSANT".to_string(),
                    12,
                )
                .with_dough_per_sheet_g(Decimal::from(2400)),
            )
    }

    fn baguette_dough() -> BaseDough {
        BaseDough::new("DOUGH-BAGUETTE".to_string(), "法棍麵糰".to_string(), 1)
    }

    fn index() -> CatalogIndex {
        CatalogIndex::new(vec![croissant_dough(), baguette_dough()])
    }

    fn aggregation(entries: &[(&str, u32)]) -> OrderAggregation {
        OrderAggregation {
            totals: entries
                .iter()
                .map(|(id, qty)| (id.to_string(), *qty))
                .collect(),
            confirmed_orders: 1,
        }
    }

    #[test]
    fn test_classify_laminated_over_direct() {
        let idx = index();

        let laminated = Product::new("P1".to_string(), "可頌".to_string())
            .with_lamination_style("STYLE-PLAIN".to_string());
        assert_eq!(
            idx.classify(&laminated),
            PathResolution::Laminated {
                dough_id: "DOUGH-CROISSANT".to_string(),
                style_id: "STYLE-PLAIN".to_string(),
            }
        );

        let direct = Product::new("P2".to_string(), "法棍".to_string())
            .with_base_dough("DOUGH-BAGUETTE".to_string());
        assert_eq!(
            idx.classify(&direct),
            PathResolution::Direct {
                dough_id: "DOUGH-BAGUETTE".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_dangling_reference() {
        let idx = index();

        let dangling_style = Product::new("P1".to_string(), "謎之酥".to_string())
            .with_lamination_style("STYLE-GONE".to_string());
        assert_eq!(idx.classify(&dangling_style), PathResolution::Unresolved);

        let dangling_dough = Product::new("P2".to_string(), "謎之包".to_string())
            .with_base_dough("DOUGH-GONE".to_string());
        assert_eq!(idx.classify(&dangling_dough), PathResolution::Unresolved);

        let pathless = Product::new("P3".to_string(), "飲料".to_string());
        assert_eq!(idx.classify(&pathless), PathResolution::Unresolved);
    }

    #[test]
    fn test_resolve_buckets_by_effective_dough() {
        let idx = index();
        let products = vec![
            Product::new("P-CRO".to_string(), "可頌".to_string())
                .with_lamination_style("STYLE-PLAIN".to_string()),
            Product::new("P-BAG".to_string(), "法棍".to_string())
                .with_base_dough("DOUGH-BAGUETTE".to_string()),
        ];
        let agg = aggregation(&[("P-CRO", 30), ("P-BAG", 8)]);

        let (buckets, warnings) = BomResolver::resolve(&agg, &products, &idx);

        assert!(warnings.is_empty());
        assert_eq!(buckets.len(), 2);

        let croissant = &buckets["DOUGH-CROISSANT"];
        assert_eq!(croissant.by_style["STYLE-PLAIN"].products[0].quantity, 30);
        assert!(croissant.direct.is_empty());

        let baguette = &buckets["DOUGH-BAGUETTE"];
        assert!(baguette.by_style.is_empty());
        assert_eq!(baguette.direct[0].quantity, 8);
    }

    #[test]
    fn test_resolve_excludes_unresolved_without_error() {
        let idx = index();
        let products = vec![
            Product::new("P-GONE".to_string(), "下架品".to_string())
                .with_lamination_style("STYLE-GONE".to_string()),
            Product::new("P-NONE".to_string(), "飲料".to_string()),
        ];
        let agg = aggregation(&[("P-GONE", 5), ("P-NONE", 2), ("P-MISSING", 9)]);

        let (buckets, warnings) = BomResolver::resolve(&agg, &products, &idx);

        // 一筆壞目錄資料不會中止整個計劃
        assert!(buckets.is_empty());
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn test_zero_demand_dough_has_no_bucket() {
        let idx = index();
        let products = vec![Product::new("P-BAG".to_string(), "法棍".to_string())
            .with_base_dough("DOUGH-BAGUETTE".to_string())];
        let agg = aggregation(&[("P-BAG", 8)]);

        let (buckets, _) = BomResolver::resolve(&agg, &products, &idx);

        // 無需求的可頌麵糰不產生條目
        assert!(!buckets.contains_key("DOUGH-CROISSANT"));
        assert_eq!(buckets.len(), 1);
    }
}
