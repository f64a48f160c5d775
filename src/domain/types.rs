// ==========================================
// 欧盟家电市场分析 - 领域类型定义
// ==========================================
// 品类 / 指标 / 贸易流向 / 贸易范围
// 所有枚举均为封闭集合,未知取值由映射层丢弃
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 品类 (Category)
// ==========================================
// 两套数据源共用的四个家电品类
// 排序: 按展示名称字母序 (与图表下拉菜单顺序一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Dishwashers,
    Ovens,
    Refrigerators,
    WashingMachines,
}

impl Category {
    /// 图表与报告中使用的英文展示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Dishwashers => "Dishwashers",
            Category::Ovens => "Ovens",
            Category::Refrigerators => "Refrigerators",
            Category::WashingMachines => "Washing Machines",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ==========================================
// 产量指标 (Indicator Kind)
// ==========================================
// 数据库编码: PRODVAL / PRODQNT
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorKind {
    Value,    // 产值 (EUR)
    Quantity, // 产量
}

impl IndicatorKind {
    /// 生产统计表中的指标编码
    pub fn db_code(&self) -> &'static str {
        match self {
            IndicatorKind::Value => "PRODVAL",
            IndicatorKind::Quantity => "PRODQNT",
        }
    }

    pub fn from_db_code(code: &str) -> Option<Self> {
        match code {
            "PRODVAL" => Some(IndicatorKind::Value),
            "PRODQNT" => Some(IndicatorKind::Quantity),
            _ => None,
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.db_code())
    }
}

// ==========================================
// 贸易流向 (Flow Direction)
// ==========================================
// 数据库编码: flow_id 1 = 进口, 2 = 出口
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowDirection {
    Import,
    Export,
}

impl FlowDirection {
    pub fn from_flow_id(flow_id: i64) -> Option<Self> {
        match flow_id {
            1 => Some(FlowDirection::Import),
            2 => Some(FlowDirection::Export),
            _ => None,
        }
    }
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowDirection::Import => write!(f, "IMPORT"),
            FlowDirection::Export => write!(f, "EXPORT"),
        }
    }
}

// ==========================================
// 贸易范围 (Trade Scope)
// ==========================================
// 联盟内部 / 联盟外部
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeScope {
    IntraUnion,
    ExtraUnion,
}

impl TradeScope {
    /// 由贸易类型标签推断范围
    ///
    /// 标签包含 "Intra" 即为联盟内部,其余一律视为联盟外部
    pub fn from_trade_type_label(label: &str) -> Self {
        if label.contains("Intra") {
            TradeScope::IntraUnion
        } else {
            TradeScope::ExtraUnion
        }
    }
}

impl fmt::Display for TradeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeScope::IntraUnion => write!(f, "INTRA_UNION"),
            TradeScope::ExtraUnion => write!(f, "EXTRA_UNION"),
        }
    }
}
