// ==========================================
// 欧盟家电市场分析 - 产量趋势与隐含单价
// ==========================================
// 流程:
// 1. 按 (报告国, 年份, 产品) 透视产值/产量两列 (重复行求和)
// 2. 丢弃未映射品类及缺任一指标的行
// 3. 跨报告国按 (年份, 品类) 求和 (整体市场视角)
// 4. 产量为 0 的行无法计算单价,直接丢弃
// 5. 按品类分组,以首年为基准计算产值/产量/单价指数
// ==========================================

use crate::domain::market::TrendRow;
use crate::domain::production::ProductionRecord;
use crate::domain::types::{Category, IndicatorKind};
use crate::engine::category_mapper::map_production_code;
use crate::engine::indexing::{index_series, partition_by_year, TREND_GUARD};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
struct IndicatorPair {
    value: Option<f64>,
    quantity: Option<f64>,
}

impl IndicatorPair {
    fn add(&mut self, indicator: IndicatorKind, amount: f64) {
        let slot = match indicator {
            IndicatorKind::Value => &mut self.value,
            IndicatorKind::Quantity => &mut self.quantity,
        };
        *slot = Some(slot.unwrap_or(0.0) + amount);
    }
}

/// 产量趋势主流程
///
/// # 返回
/// - 按 (品类, 年份) 排序的趋势行
pub fn build_trend_rows(records: &[ProductionRecord]) -> Vec<TrendRow> {
    // 1. 透视
    let mut pivot: BTreeMap<(&str, i32, &str), IndicatorPair> = BTreeMap::new();
    for record in records {
        pivot
            .entry((record.region.as_str(), record.year, record.product_code.as_str()))
            .or_default()
            .add(record.indicator, record.amount);
    }

    // 2-3. 映射、过滤、跨国汇总
    let mut market: BTreeMap<(i32, Category), (f64, f64)> = BTreeMap::new();
    for ((_, year, product_code), pair) in pivot {
        let Some(category) = map_production_code(product_code) else {
            continue;
        };
        let (Some(value), Some(quantity)) = (pair.value, pair.quantity) else {
            continue;
        };
        let entry = market.entry((year, category)).or_insert((0.0, 0.0));
        entry.0 += value;
        entry.1 += quantity;
    }

    // 4. 单价
    let mut rows = Vec::with_capacity(market.len());
    for ((year, category), (value, quantity)) in market {
        let unit_price = value / quantity;
        if quantity == 0.0 || !unit_price.is_finite() {
            tracing::warn!(year, category = %category, value, "产量为 0,无法计算单价,该行已丢弃");
            continue;
        }
        rows.push(TrendRow {
            year,
            category,
            production_value: value,
            production_quantity: quantity,
            unit_price,
            value_index: 0.0,
            quantity_index: 0.0,
            price_index: 0.0,
        });
    }

    // 5. 指数
    let mut indexed = Vec::with_capacity(rows.len());
    for (_, mut group) in partition_by_year(rows, |r| r.category, |r| r.year) {
        let values: Vec<f64> = group.iter().map(|r| r.production_value).collect();
        let quantities: Vec<f64> = group.iter().map(|r| r.production_quantity).collect();
        let prices: Vec<f64> = group.iter().map(|r| r.unit_price).collect();

        let value_idx = index_series(&values, TREND_GUARD);
        let quantity_idx = index_series(&quantities, TREND_GUARD);
        let price_idx = index_series(&prices, TREND_GUARD);

        for (i, row) in group.iter_mut().enumerate() {
            row.value_index = value_idx[i];
            row.quantity_index = quantity_idx[i];
            row.price_index = price_idx[i];
        }
        indexed.extend(group);
    }

    tracing::info!(rows = indexed.len(), "产量趋势计算完成");
    indexed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(
        region: &str,
        year: i32,
        code: &str,
        indicator: IndicatorKind,
        amount: f64,
    ) -> ProductionRecord {
        ProductionRecord::new(region, year, code, indicator, amount)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_unit_price_index() {
        let records = vec![
            rec("DE", 2014, "27511110", IndicatorKind::Value, 1000.0),
            rec("DE", 2014, "27511110", IndicatorKind::Quantity, 100.0),
            rec("DE", 2015, "27511110", IndicatorKind::Value, 1100.0),
            rec("DE", 2015, "27511110", IndicatorKind::Quantity, 100.0),
        ];
        let rows = build_trend_rows(&records);
        assert_eq!(rows.len(), 2);
        assert!(close(rows[0].unit_price, 10.0));
        assert!(close(rows[1].unit_price, 11.0));
        assert!(close(rows[0].price_index, 100.0));
        assert!(close(rows[1].price_index, 110.0));
        assert!(close(rows[1].value_index, 110.0));
        assert!(close(rows[1].quantity_index, 100.0));
    }

    #[test]
    fn test_sums_across_regions() {
        let records = vec![
            rec("DE", 2014, "27512400", IndicatorKind::Value, 100.0),
            rec("DE", 2014, "27512400", IndicatorKind::Quantity, 10.0),
            rec("FR", 2014, "27512900", IndicatorKind::Value, 300.0),
            rec("FR", 2014, "27512900", IndicatorKind::Quantity, 10.0),
        ];
        let rows = build_trend_rows(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, Category::Ovens);
        assert_eq!(rows[0].production_value, 400.0);
        assert_eq!(rows[0].production_quantity, 20.0);
        assert!(close(rows[0].unit_price, 20.0));
    }

    #[test]
    fn test_rows_missing_an_indicator_are_dropped() {
        let records = vec![
            rec("DE", 2014, "27511110", IndicatorKind::Value, 100.0),
            rec("FR", 2014, "27511110", IndicatorKind::Value, 50.0),
            rec("FR", 2014, "27511110", IndicatorKind::Quantity, 5.0),
        ];
        let rows = build_trend_rows(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].production_value, 50.0);
    }

    #[test]
    fn test_zero_quantity_year_dropped_and_baseline_moves() {
        let records = vec![
            rec("DE", 2014, "27511200", IndicatorKind::Value, 10.0),
            rec("DE", 2014, "27511200", IndicatorKind::Quantity, 0.0),
            rec("DE", 2015, "27511200", IndicatorKind::Value, 200.0),
            rec("DE", 2015, "27511200", IndicatorKind::Quantity, 4.0),
            rec("DE", 2016, "27511200", IndicatorKind::Value, 300.0),
            rec("DE", 2016, "27511200", IndicatorKind::Quantity, 4.0),
        ];
        let rows = build_trend_rows(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2015);
        assert!(close(rows[0].value_index, 100.0));
        assert!(close(rows[1].value_index, 150.0));
        assert!(rows.iter().all(|r| r.unit_price.is_finite() && r.price_index.is_finite()));
    }

    #[test]
    fn test_zero_value_baseline_is_flat() {
        let records = vec![
            rec("DE", 2014, "27511330", IndicatorKind::Value, 0.0),
            rec("DE", 2014, "27511330", IndicatorKind::Quantity, 5.0),
            rec("DE", 2015, "27511330", IndicatorKind::Value, 50.0),
            rec("DE", 2015, "27511330", IndicatorKind::Quantity, 5.0),
        ];
        let rows = build_trend_rows(&records);
        assert!(rows.iter().all(|r| close(r.value_index, 100.0)));
        assert!(rows.iter().all(|r| close(r.price_index, 100.0)));
        assert!(close(rows[1].quantity_index, 100.0));
    }
}
