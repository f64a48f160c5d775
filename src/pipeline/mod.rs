// ==========================================
// 欧盟家电市场分析 - 流水线层
// ==========================================
// 职责: 串联 数据访问 → 品类映射 → 聚合 → 计算 → 图表 → 文件输出
// 约束: 单线程同步批处理,每次运行独立,结果不持久化
// ==========================================

pub mod market_integrator;
pub mod prodcom_trends;

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;
use uuid::Uuid;

pub use market_integrator::MarketIntegrator;
pub use prodcom_trends::ProdcomTrends;

// ==========================================
// RunReport - 单次运行报告
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub pipeline: &'static str,
    pub output_path: PathBuf,
    pub rows: usize,
    pub traces: usize,
    pub groups: usize,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

// ==========================================
// PipelineOutcome - 运行结果
// ==========================================
// NoData 不是错误: 提示用户后正常退出,不写文件
#[derive(Debug, Clone)]
pub enum PipelineOutcome {
    Written(RunReport),
    NoData,
}

impl PipelineOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, PipelineOutcome::Written(_))
    }
}
