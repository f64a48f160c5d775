// ==========================================
// 欧盟家电市场分析 - 品类映射
// ==========================================
// 职责: 将生产侧产品编码 / 贸易侧产品组名称映射到共享的四品类
// 约束: 未匹配的编码/名称属于域外数据,直接丢弃,不报错
// ==========================================

use crate::domain::trade::{CategoryTradeFlow, TradeFlowKey, TradeRecord};
use crate::domain::types::Category;
use std::collections::BTreeMap;

// ==========================================
// 生产侧前缀规则
// ==========================================
// 顺序固定: 三个 6 位子类在前,5 位父类 (烤箱) 最后检查
// 修改前缀时须保持该顺序,避免父类遮蔽子类
const PRODUCTION_PREFIX_RULES: [(&str, Category); 4] = [
    ("275111", Category::Refrigerators),
    ("275112", Category::Dishwashers),
    ("275113", Category::WashingMachines),
    ("27512", Category::Ovens),
];

// ==========================================
// 贸易侧产品组标签 (精确匹配)
// ==========================================
const TRADE_GROUP_LABELS: [(&str, Category); 4] = [
    ("Refrigerators", Category::Refrigerators),
    ("Washing machines", Category::WashingMachines),
    ("Dishwashers", Category::Dishwashers),
    ("Ovens", Category::Ovens),
];

/// 生产侧产品编码 → 品类
///
/// 按前缀规则顺序匹配,首个命中即返回
pub fn map_production_code(code: &str) -> Option<Category> {
    let code = code.trim();
    PRODUCTION_PREFIX_RULES
        .iter()
        .find(|(prefix, _)| code.starts_with(prefix))
        .map(|(_, category)| *category)
}

/// 贸易侧产品组名称 → 品类
pub fn map_trade_group_name(name: &str) -> Option<Category> {
    TRADE_GROUP_LABELS
        .iter()
        .find(|(label, _)| *label == name)
        .map(|(_, category)| *category)
}

/// 贸易记录品类化
///
/// # 说明
/// - 未映射的产品组丢弃
/// - 同一 (报告国, 年份, 品类, 流向, 范围) 的多行求和 (不覆盖)
/// - 返回按键排序
pub fn categorize_trade(records: &[TradeRecord]) -> Vec<CategoryTradeFlow> {
    let mut sums: BTreeMap<TradeFlowKey, f64> = BTreeMap::new();
    let mut dropped = 0usize;

    for record in records {
        let Some(category) = map_trade_group_name(&record.product_group) else {
            dropped += 1;
            continue;
        };
        let key = TradeFlowKey {
            region: record.region.clone(),
            year: record.year,
            category,
            flow: record.flow,
            scope: record.scope,
        };
        *sums.entry(key).or_insert(0.0) += record.amount;
    }

    if dropped > 0 {
        tracing::debug!(dropped, "贸易记录: 未映射产品组已丢弃");
    }

    sums
        .into_iter()
        .map(|(key, amount)| CategoryTradeFlow::from_key(key, amount))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{FlowDirection, TradeScope};

    #[test]
    fn test_specific_prefixes_never_fall_through_to_ovens() {
        for code in ["27511110", "27511133", "275111"] {
            assert_eq!(map_production_code(code), Some(Category::Refrigerators));
        }
        for code in ["27511200", "275112"] {
            assert_eq!(map_production_code(code), Some(Category::Dishwashers));
        }
        for code in ["27511330", "27511350", "275113"] {
            assert_eq!(map_production_code(code), Some(Category::WashingMachines));
        }
    }

    #[test]
    fn test_ovens_parent_prefix() {
        assert_eq!(map_production_code("27512400"), Some(Category::Ovens));
        assert_eq!(map_production_code("27512"), Some(Category::Ovens));
    }

    #[test]
    fn test_unmapped_codes_return_none() {
        assert_eq!(map_production_code("27511400"), None);
        assert_eq!(map_production_code("2751"), None);
        assert_eq!(map_production_code("10000000"), None);
        assert_eq!(map_production_code(""), None);
    }

    #[test]
    fn test_trade_group_exact_match() {
        assert_eq!(
            map_trade_group_name("Washing machines"),
            Some(Category::WashingMachines)
        );
        assert_eq!(map_trade_group_name("Refrigerators"), Some(Category::Refrigerators));
        assert_eq!(map_trade_group_name("Washing Machines"), None);
        assert_eq!(map_trade_group_name("Freezers"), None);
    }

    #[test]
    fn test_categorize_trade_sums_duplicates_and_drops_unmapped() {
        let import = |group: &str, amount: f64| {
            TradeRecord::new(
                "DE",
                2014,
                group,
                FlowDirection::Import,
                TradeScope::ExtraUnion,
                amount,
            )
        };
        let records = vec![import("Ovens", 10.0), import("Ovens", 5.0), import("Freezers", 99.0)];
        let flows = categorize_trade(&records);
        assert_eq!(flows.len(), 1);
        assert_eq!(flows[0].category, Category::Ovens);
        assert_eq!(flows[0].amount, 15.0);
    }
}
