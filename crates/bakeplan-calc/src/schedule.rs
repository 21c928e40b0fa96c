//! 攪拌日排程
//!
//! 整份計劃共用單一攪拌日：取計劃內所有麵糰的最長攪拌
//! 提前天數，自交貨日往回推算（日曆日）。

use chrono::{Duration, NaiveDate};

/// 攪拌日計算器
pub struct MixDayCalculator;

impl MixDayCalculator {
    /// 計算攪拌日；無任何麵糰時提前天數視為 0
    pub fn mix_day(delivery_date: NaiveDate, lead_days: impl IntoIterator<Item = u32>) -> NaiveDate {
        let max_lead = lead_days.into_iter().max().unwrap_or(0);
        delivery_date
            .checked_sub_signed(Duration::days(i64::from(max_lead)))
            .expect("日期溢出")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_day_takes_max_lead() {
        // 提前 2 天的麵糰決定全計劃攪拌日
        let delivery = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mix_day = MixDayCalculator::mix_day(delivery, [2, 1, 0]);
        assert_eq!(mix_day, NaiveDate::from_ymd_opt(2024, 6, 8).unwrap());
    }

    #[test]
    fn test_mix_day_without_doughs() {
        let delivery = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(MixDayCalculator::mix_day(delivery, []), delivery);
    }

    #[test]
    fn test_mix_day_crosses_month_boundary() {
        let delivery = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let mix_day = MixDayCalculator::mix_day(delivery, [3]);
        assert_eq!(mix_day, NaiveDate::from_ymd_opt(2024, 6, 28).unwrap());
    }
}
