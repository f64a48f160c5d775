// ==========================================
// 欧盟家电市场分析 - 交互图表模型
// ==========================================
// 以 serde 结构描述 Plotly figure (data + layout),
// 序列化后直接交给浏览器端 Plotly.newPlot
// 约束: 非有限数值一律序列化为 null
// ==========================================

use serde::Serialize;
use std::collections::BTreeMap;

/// 非有限值转为 None (序列化为 null)
pub fn finite_or_null(v: f64) -> Option<f64> {
    if v.is_finite() {
        Some(v)
    } else {
        None
    }
}

// ==========================================
// Trace - 单条曲线
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub mode: &'static str,
    pub name: String,
    pub x: Vec<i32>,
    pub y: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stackgroup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    pub line: LineStyle,
    pub visible: bool,
    /// 分组标签,按钮据此计算可见性
    pub meta: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<&'static str>,
}

impl Trace {
    /// 折线
    pub fn line(name: impl Into<String>, x: Vec<i32>, y: &[f64], meta: impl Into<String>) -> Self {
        Self {
            trace_type: "scatter",
            mode: "lines",
            name: name.into(),
            x,
            y: y.iter().copied().map(finite_or_null).collect(),
            stackgroup: None,
            fillcolor: None,
            line: LineStyle::default(),
            visible: false,
            meta: meta.into(),
            yaxis: None,
        }
    }

    /// 堆叠面积
    pub fn stacked_area(
        name: impl Into<String>,
        x: Vec<i32>,
        y: &[f64],
        meta: impl Into<String>,
        stackgroup: &str,
        fillcolor: &str,
    ) -> Self {
        let mut trace = Self::line(name, x, y, meta);
        trace.stackgroup = Some(stackgroup.to_string());
        trace.fillcolor = Some(fillcolor.to_string());
        trace.line = LineStyle {
            width: 0.0,
            ..LineStyle::default()
        };
        trace
    }

    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    pub fn on_secondary_axis(mut self) -> Self {
        self.yaxis = Some("y2");
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: None,
            width: 2.0,
            dash: None,
        }
    }
}

impl LineStyle {
    pub fn solid(color: &str, width: f64) -> Self {
        Self {
            color: Some(color.to_string()),
            width,
            dash: None,
        }
    }

    pub fn dashed(color: &str, width: f64, dash: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            width,
            dash: Some(dash.to_string()),
        }
    }
}

// ==========================================
// Layout - 布局
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<Axis>,
    pub updatemenus: Vec<UpdateMenu>,
    pub shapes: Vec<Shape>,
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

impl Layout {
    /// 白底网格风格
    pub fn white(title: impl Into<String>) -> Self {
        Self {
            title: Title::new(title),
            paper_bgcolor: "white",
            plot_bgcolor: "white",
            xaxis: Axis::default(),
            yaxis: Axis::default(),
            yaxis2: None,
            updatemenus: Vec::new(),
            shapes: Vec::new(),
            annotations: Vec::new(),
            margin: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub gridcolor: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangemode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtick: Option<f64>,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            title: None,
            gridcolor: "#EBF0F8",
            side: None,
            overlaying: None,
            rangemode: None,
            dtick: None,
        }
    }
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Some(Title::new(text)),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
}

// ==========================================
// UpdateMenu - 下拉选择器
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateMenu {
    pub buttons: Vec<Button>,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
    pub active: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub label: String,
    pub method: &'static str,
    /// [trace 更新, layout 更新]
    pub args: (VisibilityUpdate, BTreeMap<String, String>),
}

impl Button {
    /// 切换可见性并更新标题
    pub fn update(label: impl Into<String>, visible: Vec<bool>, title: impl Into<String>) -> Self {
        let mut layout_update = BTreeMap::new();
        layout_update.insert("title.text".to_string(), title.into());
        Self {
            label: label.into(),
            method: "update",
            args: (VisibilityUpdate { visible }, layout_update),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibilityUpdate {
    pub visible: Vec<bool>,
}

// ==========================================
// Shape / Annotation - 基准线
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub shape_type: &'static str,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub line: LineStyle,
}

impl Shape {
    /// 横跨整个绘图区的水平线
    pub fn hline(y: f64, yref: &'static str, line: LineStyle) -> Self {
        Self {
            shape_type: "line",
            xref: "paper",
            yref,
            x0: 0.0,
            x1: 1.0,
            y0: y,
            y1: y,
            line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub showarrow: bool,
}

// ==========================================
// Figure - 完整图表
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// 按标签计算整张图的可见性向量
    pub fn visibility_for(&self, tag: &str) -> Vec<bool> {
        self.data.iter().map(|t| t.meta == tag).collect()
    }

    /// 当前可见的分组标签 (去重)
    pub fn visible_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .data
            .iter()
            .filter(|t| t.visible)
            .map(|t| t.meta.as_str())
            .collect();
        tags.dedup();
        tags
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// 选择默认项: 优先 preferred,不存在时回退到第一个
pub fn resolve_default<'a>(options: &'a [String], preferred: &str) -> Option<(usize, &'a str)> {
    options
        .iter()
        .position(|o| o == preferred)
        .or(if options.is_empty() { None } else { Some(0) })
        .map(|i| (i, options[i].as_str()))
}
