// ==========================================
// 欧盟家电市场分析 - 产量趋势流水线 (Pipeline B)
// ==========================================
// 生产统计 (产值 + 产量) → 透视 → 单价 → 三项指数 → prodcom_trends.html
// ==========================================

use crate::config::AnalysisConfig;
use crate::domain::market::TrendRow;
use crate::domain::types::IndicatorKind;
use crate::engine::build_trend_rows;
use crate::error::AnalysisResult;
use crate::pipeline::{PipelineOutcome, RunReport};
use crate::report::{build_trend_figure, render_html_document, write_html_document};
use crate::repository::ProductionRepository;
use chrono::Local;
use uuid::Uuid;

const PIPELINE_NAME: &str = "prodcom_trends";

// ==========================================
// ProdcomTrends - 产量趋势分析
// ==========================================
pub struct ProdcomTrends {
    config: AnalysisConfig,
}

impl ProdcomTrends {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// 读取生产统计并计算趋势表
    pub fn compute(&self, production_repo: &ProductionRepository) -> AnalysisResult<Vec<TrendRow>> {
        let production = production_repo.load_production(
            self.config.min_year,
            &[IndicatorKind::Value, IndicatorKind::Quantity],
        )?;
        Ok(build_trend_rows(&production))
    }

    pub fn run(&self) -> AnalysisResult<PipelineOutcome> {
        let production_repo = ProductionRepository::open(&self.config.prodcom_db_path)?;
        self.run_with(&production_repo)
    }

    pub fn run_with(
        &self,
        production_repo: &ProductionRepository,
    ) -> AnalysisResult<PipelineOutcome> {
        let run_id = Uuid::new_v4();
        let started_at = Local::now();
        let span = tracing::info_span!("pipeline", pipeline = PIPELINE_NAME, %run_id);
        let _guard = span.enter();

        let snapshot = self.config.snapshot_json()?;
        tracing::info!(config = %snapshot, "开始运行");

        let rows = self.compute(production_repo)?;
        let Some(figure) = build_trend_figure(&rows, self.config.default_category.display_name())
        else {
            tracing::warn!("无可计算的趋势数据,不生成文档");
            return Ok(PipelineOutcome::NoData);
        };

        let html = render_html_document(
            &figure,
            "EU Manufacturing Dynamics",
            &self.config.plotly_js_url,
            Local::now(),
        )?;
        let output_path = self.config.trends_output_path();
        write_html_document(&output_path, &html)?;

        let report = RunReport {
            run_id,
            pipeline: PIPELINE_NAME,
            output_path,
            rows: rows.len(),
            traces: figure.data.len(),
            groups: figure.data.len() / 3,
            started_at,
            finished_at: Local::now(),
        };
        tracing::info!(rows = report.rows, traces = report.traces, "运行完成");
        Ok(PipelineOutcome::Written(report))
    }
}
