// ==========================================
// 欧盟家电市场分析 - 报告层
// ==========================================
// 职责: 图表模型 / 分组轨迹与可见性切换 / 独立 HTML 输出
// ==========================================

pub mod dependency_chart;
pub mod error;
pub mod figure;
pub mod html;
pub mod trend_chart;

pub use dependency_chart::{build_dependency_figure, group_tag, DependencyChartDefaults};
pub use error::{ReportError, ReportResult};
pub use figure::Figure;
pub use html::{render_html_document, write_html_document};
pub use trend_chart::build_trend_figure;
