// ==========================================
// 欧盟家电市场分析 - 依存度看板流水线 (Pipeline A)
// ==========================================
// 生产统计 + 贸易统计 → 品类映射 → 虚拟联盟区域 → 依存度与指数 → index.html
// ==========================================

use crate::config::AnalysisConfig;
use crate::domain::market::DependencyRow;
use crate::domain::types::IndicatorKind;
use crate::engine::{build_dependency_rows, categorize_trade, UnionRegionReconstructor};
use crate::error::AnalysisResult;
use crate::pipeline::{PipelineOutcome, RunReport};
use crate::report::{
    build_dependency_figure, render_html_document, write_html_document, DependencyChartDefaults,
};
use crate::repository::{ProductionRepository, TradeRepository};
use chrono::Local;
use uuid::Uuid;

const PIPELINE_NAME: &str = "market_integrator";

// ==========================================
// MarketIntegrator - 依存度分析
// ==========================================
pub struct MarketIntegrator {
    config: AnalysisConfig,
}

impl MarketIntegrator {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// 读取两个数据源并计算依存度表
    ///
    /// # 返回
    /// - 每个 (报告国, 年份, 品类) 一行,含虚拟联盟区域
    pub fn compute(
        &self,
        production_repo: &ProductionRepository,
        trade_repo: &TradeRepository,
    ) -> AnalysisResult<Vec<DependencyRow>> {
        let production =
            production_repo.load_production(self.config.min_year, &[IndicatorKind::Value])?;
        let trade = trade_repo.load_trade(self.config.min_year)?;

        let flows = categorize_trade(&trade);
        let reconstructor = UnionRegionReconstructor::new(
            self.config.union_region_code.clone(),
            self.config.union_members.clone(),
        );
        let flows = reconstructor.apply(flows);

        Ok(build_dependency_rows(&production, &flows))
    }

    /// 完整运行: 打开数据源 → 计算 → 写出 HTML
    ///
    /// # 返回
    /// - Ok(Written): 文档已写出
    /// - Ok(NoData): 聚合后无数据,未写文件
    /// - Err: 数据源不可达 / schema 不符 / 写文件失败
    pub fn run(&self) -> AnalysisResult<PipelineOutcome> {
        let production_repo = ProductionRepository::open(&self.config.prodcom_db_path)?;
        let trade_repo = TradeRepository::open(&self.config.comext_db_path)?;
        self.run_with(&production_repo, &trade_repo)
    }

    /// 使用已打开的仓储运行
    pub fn run_with(
        &self,
        production_repo: &ProductionRepository,
        trade_repo: &TradeRepository,
    ) -> AnalysisResult<PipelineOutcome> {
        let run_id = Uuid::new_v4();
        let started_at = Local::now();
        let span = tracing::info_span!("pipeline", pipeline = PIPELINE_NAME, %run_id);
        let _guard = span.enter();

        let snapshot = self.config.snapshot_json()?;
        tracing::info!(config = %snapshot, "开始运行");

        let rows = self.compute(production_repo, trade_repo)?;
        if rows.is_empty() {
            tracing::warn!("聚合后无数据,不生成文档");
            return Ok(PipelineOutcome::NoData);
        }

        let defaults = DependencyChartDefaults {
            region: &self.config.default_region,
            category: self.config.default_category.display_name(),
        };
        let Some(figure) = build_dependency_figure(&rows, &defaults) else {
            return Ok(PipelineOutcome::NoData);
        };

        let html = render_html_document(
            &figure,
            "Home Appliance Market Analysis",
            &self.config.plotly_js_url,
            Local::now(),
        )?;
        let output_path = self.config.market_output_path();
        write_html_document(&output_path, &html)?;

        let report = RunReport {
            run_id,
            pipeline: PIPELINE_NAME,
            output_path,
            rows: rows.len(),
            traces: figure.data.len(),
            groups: figure.data.len() / 4,
            started_at,
            finished_at: Local::now(),
        };
        tracing::info!(rows = report.rows, traces = report.traces, "运行完成");
        Ok(PipelineOutcome::Written(report))
    }
}
