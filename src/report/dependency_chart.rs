// ==========================================
// 欧盟家电市场分析 - 依存度看板图表
// ==========================================
// 每个 (品类, 报告国) 分组: 三层堆叠面积 (本地产值 / 区内进口 / 区外进口)
// + 次坐标轴上的依存度指数折线
// 两个下拉选择器互不组合: 品类按钮固定默认报告国,报告国按钮固定默认品类
// ==========================================

use crate::domain::market::DependencyRow;
use crate::report::figure::{
    resolve_default, Annotation, Axis, Button, Figure, Layout, LineStyle, Margin, Shape, Trace,
    UpdateMenu,
};

const COLOR_LOCAL: &str = "#2ecc71";
const COLOR_INTRA: &str = "#3498db";
const COLOR_EXTRA: &str = "#e74c3c";
const STACK_GROUP: &str = "one";

/// 图表默认视图
#[derive(Debug, Clone)]
pub struct DependencyChartDefaults<'a> {
    pub region: &'a str,
    pub category: &'a str,
}

/// 分组标签 "品类|报告国"
pub fn group_tag(category: &str, region: &str) -> String {
    format!("{}|{}", category, region)
}

/// 构建依存度看板
///
/// # 返回
/// - None: 输入为空
pub fn build_dependency_figure(
    rows: &[DependencyRow],
    defaults: &DependencyChartDefaults<'_>,
) -> Option<Figure> {
    let mut regions: Vec<String> = rows.iter().map(|r| r.region.clone()).collect();
    regions.sort();
    regions.dedup();
    let mut categories: Vec<String> = rows
        .iter()
        .map(|r| r.category.display_name().to_string())
        .collect();
    categories.sort();
    categories.dedup();

    let (region_active, default_region) = resolve_default(&regions, defaults.region)?;
    let (category_active, default_category) = resolve_default(&categories, defaults.category)?;

    let mut data = Vec::new();
    for category in &categories {
        for region in &regions {
            let mut group: Vec<&DependencyRow> = rows
                .iter()
                .filter(|r| r.category.display_name() == category && &r.region == region)
                .collect();
            if group.is_empty() {
                continue;
            }
            group.sort_by_key(|r| r.year);

            let is_visible = category == default_category && region == default_region;
            let tag = group_tag(category, region);
            let years: Vec<i32> = group.iter().map(|r| r.year).collect();
            let production: Vec<f64> = group.iter().map(|r| r.production_value).collect();
            let intra: Vec<f64> = group.iter().map(|r| r.import_intra).collect();
            let extra: Vec<f64> = group.iter().map(|r| r.import_extra).collect();
            let index: Vec<f64> = group.iter().map(|r| r.dependency_index).collect();

            data.push(
                Trace::stacked_area(
                    "Local Manufacturing",
                    years.clone(),
                    &production,
                    &tag,
                    STACK_GROUP,
                    COLOR_LOCAL,
                )
                .visible(is_visible),
            );
            data.push(
                Trace::stacked_area(
                    "Intra-EU Import",
                    years.clone(),
                    &intra,
                    &tag,
                    STACK_GROUP,
                    COLOR_INTRA,
                )
                .visible(is_visible),
            );
            data.push(
                Trace::stacked_area(
                    "Extra-EU Import",
                    years.clone(),
                    &extra,
                    &tag,
                    STACK_GROUP,
                    COLOR_EXTRA,
                )
                .visible(is_visible),
            );
            data.push(
                Trace::line("Dependency Index", years, &index, &tag)
                    .with_line(LineStyle::solid("black", 3.0))
                    .on_secondary_axis()
                    .visible(is_visible),
            );
        }
    }

    let mut figure = Figure {
        data,
        layout: Layout::white(format!(
            "{} Market Analysis in {}",
            default_category, default_region
        )),
    };

    let category_buttons: Vec<Button> = categories
        .iter()
        .map(|c| {
            Button::update(
                c.as_str(),
                figure.visibility_for(&group_tag(c, default_region)),
                format!("{} Trend in {}", c, default_region),
            )
        })
        .collect();
    let region_buttons: Vec<Button> = regions
        .iter()
        .map(|r| {
            Button::update(
                r.as_str(),
                figure.visibility_for(&group_tag(default_category, r)),
                format!("{} Trend in {}", default_category, r),
            )
        })
        .collect();

    let layout = &mut figure.layout;
    layout.updatemenus = vec![
        UpdateMenu {
            buttons: category_buttons,
            x: 0.0,
            y: 1.2,
            xanchor: "left",
            active: category_active,
        },
        UpdateMenu {
            buttons: region_buttons,
            x: 0.2,
            y: 1.2,
            xanchor: "left",
            active: region_active,
        },
    ];
    layout.xaxis.dtick = Some(1.0);
    layout.yaxis = Axis::titled("Market Value (EUR)");
    layout.yaxis2 = Some(Axis {
        side: Some("right"),
        overlaying: Some("y"),
        rangemode: Some("tozero"),
        ..Axis::titled("Index (2014=100)")
    });
    layout.shapes = vec![Shape::hline(100.0, "y2", LineStyle::dashed("grey", 1.0, "dash"))];
    layout.annotations = vec![Annotation {
        text: "2014 Baseline".to_string(),
        xref: "paper",
        yref: "y2",
        x: 1.0,
        y: 100.0,
        xanchor: "right",
        yanchor: "bottom",
        showarrow: false,
    }];
    layout.margin = Some(Margin { t: 150 });

    tracing::debug!(
        traces = figure.data.len(),
        regions = regions.len(),
        categories = categories.len(),
        "依存度看板图表已构建"
    );
    Some(figure)
}
