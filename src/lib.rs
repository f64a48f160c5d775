// ==========================================
// 欧盟家电市场分析 - 核心库
// ==========================================
// 数据源: 生产统计 (PRODCOM) + 贸易统计 (COMEXT), 均为只读 SQLite
// 产出: 两份独立的交互式 HTML 看板
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 映射与计算
pub mod engine;

// 报告层 - 图表与 HTML
pub mod report;

// 流水线层 - 端到端编排
pub mod pipeline;

// 配置层 - 运行配置
pub mod config;

// 数据库基础设施（只读连接 / schema 检查）
pub mod db;

// 统一错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::AnalysisConfig;
pub use domain::{
    Category, CategoryTradeFlow, DependencyRow, FlowDirection, IndicatorKind, ProductionRecord,
    TradeRecord, TradeScope, TrendRow,
};
pub use error::{AnalysisError, AnalysisResult};
pub use pipeline::{MarketIntegrator, PipelineOutcome, ProdcomTrends, RunReport};
pub use repository::{ProductionRepository, RepositoryError, TradeRepository};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "EU Appliance Market";
