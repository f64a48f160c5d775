// ==========================================
// 欧盟家电市场分析 - 领域模型层
// ==========================================
// 职责: 定义源记录、品类、聚合结果等领域实体
// 红线: 不含数据访问逻辑,不含计算逻辑
// ==========================================

pub mod market;
pub mod production;
pub mod trade;
pub mod types;

// 重导出核心类型
pub use market::{DependencyRow, TrendRow};
pub use production::ProductionRecord;
pub use trade::{CategoryTradeFlow, TradeFlowKey, TradeRecord};
pub use types::{Category, FlowDirection, IndicatorKind, TradeScope};
