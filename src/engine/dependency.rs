// ==========================================
// 欧盟家电市场分析 - 进口依存度计算
// ==========================================
// 流程:
// 1. 生产侧: 品类映射后按 (报告国, 年份, 品类) 汇总产值
// 2. 贸易侧: 按 (报告国, 年份, 品类) 透视为 流向×范围 四列,缺失填 0
// 3. 两侧全外连接,缺失数值填 0
// 4. dependency = 进口 / (产值 + 进口) × 100,分母为 0 时取 0
// 5. 按 (报告国, 品类) 分组,以首年依存度为基准计算指数
// ==========================================

use crate::domain::market::DependencyRow;
use crate::domain::production::ProductionRecord;
use crate::domain::trade::CategoryTradeFlow;
use crate::domain::types::{Category, FlowDirection, IndicatorKind, TradeScope};
use crate::engine::category_mapper::map_production_code;
use crate::engine::indexing::{index_series, partition_by_year, DEPENDENCY_GUARD};
use std::collections::BTreeMap;

/// (报告国, 年份, 品类)
pub type MarketKey = (String, i32, Category);

// ==========================================
// TradePivot - 贸易透视行
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TradePivot {
    pub import_intra: f64,
    pub import_extra: f64,
    pub export_intra: f64,
    pub export_extra: f64,
}

impl TradePivot {
    fn add(&mut self, flow: FlowDirection, scope: TradeScope, amount: f64) {
        let slot = match (flow, scope) {
            (FlowDirection::Import, TradeScope::IntraUnion) => &mut self.import_intra,
            (FlowDirection::Import, TradeScope::ExtraUnion) => &mut self.import_extra,
            (FlowDirection::Export, TradeScope::IntraUnion) => &mut self.export_intra,
            (FlowDirection::Export, TradeScope::ExtraUnion) => &mut self.export_extra,
        };
        *slot += amount;
    }

    pub fn total_imports(&self) -> f64 {
        self.import_intra + self.import_extra
    }
}

/// 生产侧汇总: 仅产值指标,未映射编码丢弃
pub fn aggregate_production_value(records: &[ProductionRecord]) -> BTreeMap<MarketKey, f64> {
    let mut sums: BTreeMap<MarketKey, f64> = BTreeMap::new();
    for record in records.iter().filter(|r| r.indicator == IndicatorKind::Value) {
        let Some(category) = map_production_code(&record.product_code) else {
            continue;
        };
        *sums
            .entry((record.region.clone(), record.year, category))
            .or_insert(0.0) += record.amount;
    }
    sums
}

/// 贸易侧透视
pub fn pivot_trade(flows: &[CategoryTradeFlow]) -> BTreeMap<MarketKey, TradePivot> {
    let mut pivot: BTreeMap<MarketKey, TradePivot> = BTreeMap::new();
    for flow in flows {
        pivot
            .entry((flow.region.clone(), flow.year, flow.category))
            .or_default()
            .add(flow.flow, flow.scope, flow.amount);
    }
    pivot
}

/// 进口依存度 (%)
///
/// 分母为 0 或结果非有限值时返回 0
pub fn dependency_ratio(production_value: f64, total_imports: f64) -> f64 {
    let supply = production_value + total_imports;
    if supply == 0.0 {
        return 0.0;
    }
    let ratio = total_imports / supply * 100.0;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

/// 依存度分析主流程
///
/// # 参数
/// - production: 生产统计记录 (未映射)
/// - trade: 品类化且已完成虚拟区域合并的贸易流
///
/// # 返回
/// - 按 (报告国, 品类, 年份) 排序的依存度行,每个 (报告国, 年份, 品类) 一行
pub fn build_dependency_rows(
    production: &[ProductionRecord],
    trade: &[CategoryTradeFlow],
) -> Vec<DependencyRow> {
    let production_values = aggregate_production_value(production);
    let trade_pivot = pivot_trade(trade);

    // 全外连接
    let mut joined: BTreeMap<MarketKey, (f64, TradePivot)> = BTreeMap::new();
    for (key, value) in production_values {
        joined.entry(key).or_default().0 = value;
    }
    for (key, pivot) in trade_pivot {
        joined.entry(key).or_default().1 = pivot;
    }

    let rows: Vec<DependencyRow> = joined
        .into_iter()
        .map(|((region, year, category), (production_value, pivot))| {
            let total_imports = pivot.total_imports();
            DependencyRow {
                region,
                year,
                category,
                production_value,
                import_intra: pivot.import_intra,
                import_extra: pivot.import_extra,
                export_intra: pivot.export_intra,
                export_extra: pivot.export_extra,
                total_imports,
                dependency: dependency_ratio(production_value, total_imports),
                dependency_index: 0.0,
            }
        })
        .collect();

    let groups = partition_by_year(rows, |r| (r.region.clone(), r.category), |r| r.year);

    let mut indexed = Vec::new();
    for (_, mut group) in groups {
        let dependencies: Vec<f64> = group.iter().map(|r| r.dependency).collect();
        for (row, idx) in group.iter_mut().zip(index_series(&dependencies, DEPENDENCY_GUARD)) {
            row.dependency_index = idx;
        }
        indexed.extend(group);
    }

    tracing::info!(rows = indexed.len(), "依存度计算完成");
    indexed
}
