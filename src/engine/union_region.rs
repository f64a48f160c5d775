// ==========================================
// 欧盟家电市场分析 - 虚拟联盟区域重构
// ==========================================
// 职责: 对固定成员国列表的贸易流按 (年份, 品类, 流向, 范围) 求和,
//       以保留代码标记为虚拟区域
// 合并: 原始行在前、虚拟行在后,按去重键后写覆盖 (last-value-wins)
// ==========================================

use crate::domain::trade::{CategoryTradeFlow, TradeFlowKey};
use crate::domain::types::{Category, FlowDirection, TradeScope};
use std::collections::{BTreeMap, HashSet};

// ==========================================
// UnionRegionReconstructor - 虚拟区域重构器
// ==========================================
pub struct UnionRegionReconstructor {
    region_code: String,
    member_set: HashSet<String>,
}

impl UnionRegionReconstructor {
    /// 创建重构器
    ///
    /// # 参数
    /// - region_code: 虚拟区域代码 (如 EU27_2020)
    /// - members: 成员国代码 (有序)
    pub fn new(region_code: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            region_code: region_code.into(),
            member_set: members.into_iter().collect(),
        }
    }

    pub fn is_member(&self, region: &str) -> bool {
        self.member_set.contains(region)
    }

    /// 生成虚拟区域行
    ///
    /// 只覆盖成员国中至少一国出现过的 (年份, 品类, 流向, 范围) 组合
    pub fn reconstruct(&self, flows: &[CategoryTradeFlow]) -> Vec<CategoryTradeFlow> {
        let mut sums: BTreeMap<(i32, Category, FlowDirection, TradeScope), f64> = BTreeMap::new();
        for flow in flows.iter().filter(|f| self.is_member(&f.region)) {
            *sums
                .entry((flow.year, flow.category, flow.flow, flow.scope))
                .or_insert(0.0) += flow.amount;
        }

        sums
            .into_iter()
            .map(|((year, category, flow, scope), amount)| CategoryTradeFlow {
                region: self.region_code.clone(),
                year,
                category,
                flow,
                scope,
                amount,
            })
            .collect()
    }

    /// 重构并合并
    ///
    /// 与官方发布的同键聚合值冲突时,虚拟值胜出
    pub fn apply(&self, flows: Vec<CategoryTradeFlow>) -> Vec<CategoryTradeFlow> {
        let synthetic = self.reconstruct(&flows);
        let overridden = flows
            .iter()
            .filter(|f| f.region == self.region_code)
            .count();
        tracing::info!(
            region = %self.region_code,
            synthetic_rows = synthetic.len(),
            overridden_candidates = overridden,
            "虚拟联盟区域重构完成"
        );
        merge_last_wins(flows, synthetic)
    }
}

/// 顺序拼接后按去重键构建映射,后插入者覆盖先插入者
pub fn merge_last_wins(
    first: Vec<CategoryTradeFlow>,
    second: Vec<CategoryTradeFlow>,
) -> Vec<CategoryTradeFlow> {
    let mut merged: BTreeMap<TradeFlowKey, f64> = BTreeMap::new();
    for flow in first.into_iter().chain(second) {
        merged.insert(flow.key(), flow.amount);
    }
    merged
        .into_iter()
        .map(|(key, amount)| CategoryTradeFlow::from_key(key, amount))
        .collect()
}
