//! 單位換算
//!
//! 配方產量與食材用量以公斤為共同基準進行縮放。
//! 容量單位（l/ml）視為密度 1，與同級質量單位等值換算；
//! 此為沿用既有產線行為的已知簡化。

use rust_decimal::Decimal;

/// 單位換算錯誤
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    #[error("不支援的單位: {0}")]
    UnsupportedUnit(String),
}

/// 千進位換算係數
fn thousand() -> Decimal {
    Decimal::from(1000)
}

/// 將產量換算為公斤
///
/// 不認得的單位一律回報錯誤，不做任何猜測。
pub fn normalize_yield_to_kg(quantity: Decimal, unit: &str) -> Result<Decimal, UnitError> {
    match unit.trim().to_lowercase().as_str() {
        "kg" => Ok(quantity),
        "g" => Ok(quantity / thousand()),
        // 容量單位：密度視為 1
        "l" | "litre" | "litres" => Ok(quantity),
        "ml" => Ok(quantity / thousand()),
        other => Err(UnitError::UnsupportedUnit(other.to_string())),
    }
}

/// 將用量換算為克
pub fn normalize_to_g(quantity: Decimal, unit: &str) -> Result<Decimal, UnitError> {
    normalize_yield_to_kg(quantity, unit).map(|kg| kg * thousand())
}
