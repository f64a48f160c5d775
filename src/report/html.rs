// ==========================================
// 欧盟家电市场分析 - 独立 HTML 文档
// ==========================================
// 生成自包含的交互式页面: figure JSON 内嵌,Plotly 脚本外链
// 页面生成后无需任何后端
// ==========================================

use crate::report::error::{ReportError, ReportResult};
use crate::report::figure::Figure;
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

/// 渲染 HTML 文档
///
/// # 参数
/// - figure: 图表
/// - page_title: 页面标题
/// - plotly_js_url: Plotly 脚本地址
/// - generated_at: 生成时间 (写入页脚)
pub fn render_html_document(
    figure: &Figure,
    page_title: &str,
    plotly_js_url: &str,
    generated_at: DateTime<Local>,
) -> ReportResult<String> {
    // 防止 JSON 中的 "</" 提前闭合 script 标签
    let figure_json = figure.to_json()?.replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{plotly}" charset="utf-8"></script>
    <style>{css}</style>
</head>
<body>
    <div id="chart" class="chart"></div>
    <footer>Generated {generated} · {app} v{version}</footer>
    <script>
        const figure = {figure};
        Plotly.newPlot("chart", figure.data, figure.layout, {{responsive: true}});
    </script>
</body>
</html>
"#,
        title = escape_html(page_title),
        plotly = escape_html(plotly_js_url),
        css = inline_css(),
        generated = generated_at.format("%Y-%m-%d %H:%M:%S"),
        app = crate::APP_NAME,
        version = crate::VERSION,
        figure = figure_json,
    ))
}

/// 写出 HTML 文档 (覆盖已有文件)
pub fn write_html_document(path: &Path, html: &str) -> ReportResult<()> {
    fs::write(path, html).map_err(|source| ReportError::WriteError {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = html.len(), "HTML 文档已写出");
    Ok(())
}

fn inline_css() -> &'static str {
    r#"
body {
  margin: 0;
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
  background: #ffffff;
}
.chart { width: 100%; height: 90vh; }
footer { color: #6b7280; font-size: 0.75rem; padding: 0 1rem 1rem; }
"#
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
