// ==========================================
// 欧盟家电市场分析 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供数据访问接口,屏蔽 schema / 连接 / 表名细节
// 约束: 所有查询使用参数化,结果全部物化为扁平记录
// ==========================================

pub mod error;
pub mod production_repo;
pub mod store;
pub mod trade_repo;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use production_repo::ProductionRepository;
pub use trade_repo::TradeRepository;
