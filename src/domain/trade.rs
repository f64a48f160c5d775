// ==========================================
// 欧盟家电市场分析 - 贸易统计领域模型
// ==========================================
// 来源: 贸易统计库 (records + 三张查找表)
// ==========================================

use crate::domain::types::{Category, FlowDirection, TradeScope};
use serde::{Deserialize, Serialize};

// ==========================================
// TradeRecord - 贸易统计记录 (品类映射前)
// ==========================================
// 已在查询中按 (报告国, 年份, 产品组, 流向, 贸易类型) 预汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub region: String,
    pub year: i32,
    pub product_group: String,     // 产品组名称 (源语言标签)
    pub flow: FlowDirection,
    pub scope: TradeScope,
    pub amount: f64,               // 金额 (EUR)
}

impl TradeRecord {
    pub fn new(
        region: impl Into<String>,
        year: i32,
        product_group: impl Into<String>,
        flow: FlowDirection,
        scope: TradeScope,
        amount: f64,
    ) -> Self {
        Self {
            region: region.into(),
            year,
            product_group: product_group.into(),
            flow,
            scope,
            amount,
        }
    }
}

// ==========================================
// TradeFlowKey - 贸易流去重键
// ==========================================
// (报告国, 年份, 品类, 流向, 范围) 唯一
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TradeFlowKey {
    pub region: String,
    pub year: i32,
    pub category: Category,
    pub flow: FlowDirection,
    pub scope: TradeScope,
}

// ==========================================
// CategoryTradeFlow - 品类映射后的贸易流
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTradeFlow {
    pub region: String,
    pub year: i32,
    pub category: Category,
    pub flow: FlowDirection,
    pub scope: TradeScope,
    pub amount: f64,
}

impl CategoryTradeFlow {
    pub fn key(&self) -> TradeFlowKey {
        TradeFlowKey {
            region: self.region.clone(),
            year: self.year,
            category: self.category,
            flow: self.flow,
            scope: self.scope,
        }
    }

    pub fn from_key(key: TradeFlowKey, amount: f64) -> Self {
        Self {
            region: key.region,
            year: key.year,
            category: key.category,
            flow: key.flow,
            scope: key.scope,
            amount,
        }
    }
}
