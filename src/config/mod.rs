// ==========================================
// 欧盟家电市场分析 - 配置层
// ==========================================
// 职责: 运行配置 (数据源路径 / 输出 / 默认视图)
// ==========================================

pub mod analysis_config;

// 重导出核心配置
pub use analysis_config::{defaults, AnalysisConfig};
