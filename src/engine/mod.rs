// ==========================================
// 欧盟家电市场分析 - 引擎层
// ==========================================
// 职责: 品类映射 / 虚拟区域重构 / 依存度与趋势计算 / 分组指数
// 红线: 引擎不访问数据库,只处理已物化的记录
// ==========================================

pub mod category_mapper;
pub mod dependency;
pub mod indexing;
pub mod trend;
pub mod union_region;

// 重导出核心引擎
pub use category_mapper::{categorize_trade, map_production_code, map_trade_group_name};
pub use dependency::build_dependency_rows;
pub use indexing::{index_series, partition_by_year, BaselineGuard, DEPENDENCY_GUARD, TREND_GUARD};
pub use trend::build_trend_rows;
pub use union_region::{merge_last_wins, UnionRegionReconstructor};
