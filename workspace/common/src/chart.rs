//! Chart option builder.
//!
//! Turns a validated [`GraphSpec`] into a Plotly figure (`data`, `layout`,
//! `config`) plus the derived numbers the figure was built from, so callers
//! that cannot draw (the terminal client) still get colours, labels and
//! percentages.

use serde_json::{Value, json};

use crate::config::ChatConfig;
use crate::format::{NumberFormat, percent_label};
use crate::palette::{PaletteChoice, with_alpha};
use crate::payload::{GraphSpec, Series};

pub const NO_VALID_DATA: &str = "No valid data available for chart";

/// Tallest bar sits at 1/1.2 of the axis height.
pub const BAR_HEADROOM: f64 = 1.2;

const TEXT_COLOR: &str = "#000";
const SLICE_BORDER: &str = "#fff";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub palette: PaletteChoice,
    pub number_format: NumberFormat,
    pub headroom: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            palette: PaletteChoice::default(),
            number_format: NumberFormat::default(),
            headroom: BAR_HEADROOM,
        }
    }
}

impl From<&ChatConfig> for ChartStyle {
    fn from(config: &ChatConfig) -> Self {
        Self {
            palette: config.palette,
            number_format: config.number_format,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

/// A drawable chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFigure {
    pub kind: ChartKind,
    pub series: Series,
    /// One colour per point (line charts carry a single entry).
    pub colors: Vec<String>,
    /// Per-point label: formatted value, or the percentage for pie slices.
    pub value_labels: Vec<String>,
    /// Share of the total per slice, one decimal. Empty unless pie.
    pub percentages: Vec<f64>,
    /// Fixed y-axis range, bar charts only.
    pub y_range: Option<(f64, f64)>,
    pub data: Value,
    pub layout: Value,
}

impl ChartFigure {
    pub fn config() -> Value {
        json!({ "responsive": true, "displayModeBar": false })
    }

    /// `{ data, layout, config }` as accepted by `Plotly.newPlot`.
    pub fn to_plotly(&self) -> Value {
        json!({
            "data": self.data,
            "layout": self.layout,
            "config": Self::config(),
        })
    }
}

/// Outcome of rendering a response's chart block.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartRender {
    /// No chart was asked for; render nothing.
    Empty,
    /// Inline message shown instead of a chart.
    Placeholder(String),
    Figure(Box<ChartFigure>),
}

impl ChartRender {
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            ChartRender::Placeholder(text) => Some(text),
            ChartRender::Empty | ChartRender::Figure(_) => None,
        }
    }

    pub fn figure(&self) -> Option<&ChartFigure> {
        match self {
            ChartRender::Figure(figure) => Some(figure),
            ChartRender::Empty | ChartRender::Placeholder(_) => None,
        }
    }
}

pub fn render(graph: &GraphSpec, style: &ChartStyle) -> ChartRender {
    match graph {
        GraphSpec::None => ChartRender::Empty,
        GraphSpec::InvalidData => ChartRender::Placeholder(NO_VALID_DATA.to_string()),
        GraphSpec::Unsupported(graph_type) => {
            ChartRender::Placeholder(format!("Unsupported graph type: {graph_type}"))
        }
        GraphSpec::Line(series) => ChartRender::Figure(Box::new(line_chart(series, style))),
        GraphSpec::Bar(series) => ChartRender::Figure(Box::new(bar_chart(series, style))),
        GraphSpec::Pie(series) => ChartRender::Figure(Box::new(pie_chart(series, style))),
    }
}

/// Share of the total for each value, rounded to one decimal.
/// A zero total gives zero for every slice.
pub fn percentages(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    values
        .iter()
        .map(|value| {
            if total == 0.0 {
                0.0
            } else {
                (value / total * 1000.0).round() / 10.0
            }
        })
        .collect()
}

/// Upper bound of the bar chart's y axis.
pub fn bar_axis_max(series: &Series, headroom: f64) -> f64 {
    let max = series.max();
    if max > 0.0 { max * headroom } else { 1.0 }
}

fn base_layout() -> Value {
    json!({
        "margin": {"t": 10, "r": 10, "l": 60, "b": 50},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "font": {"color": TEXT_COLOR, "size": 12},
    })
}

fn axis(title: &str) -> Value {
    json!({
        "title": {"text": title, "font": {"size": 12, "color": TEXT_COLOR}},
        "tickfont": {"size": 10, "color": TEXT_COLOR},
    })
}

fn formatted(series: &Series, format: NumberFormat) -> Vec<String> {
    series.values.iter().map(|v| format.format(*v)).collect()
}

fn line_chart(series: &Series, style: &ChartStyle) -> ChartFigure {
    let color = style.palette.line();
    let value_labels = formatted(series, style.number_format);

    let data = json!([{
        "x": series.labels,
        "y": series.values,
        "type": "scatter",
        "mode": "lines+markers",
        "name": series.name,
        "fill": "tozeroy",
        "fillcolor": with_alpha(color, 0x33),
        "line": {"color": color, "shape": "spline", "smoothing": 1.0},
        "marker": {"symbol": "circle", "color": color},
        "text": value_labels,
        "hovertemplate": "%{x}: %{text}<extra></extra>",
    }]);

    let mut layout = base_layout();
    layout["showlegend"] = json!(false);
    layout["xaxis"] = axis("Time");
    layout["xaxis"]["showgrid"] = json!(false);
    layout["yaxis"] = axis("Value");
    layout["yaxis"]["rangemode"] = json!("tozero");
    layout["yaxis"]["tickformat"] = json!(style.number_format.tick_format());
    layout["yaxis"]["gridcolor"] = json!("#eee");

    ChartFigure {
        kind: ChartKind::Line,
        series: series.clone(),
        colors: vec![color.to_string()],
        value_labels,
        percentages: Vec::new(),
        y_range: None,
        data,
        layout,
    }
}

fn bar_chart(series: &Series, style: &ChartStyle) -> ChartFigure {
    let colors = style.palette.bar().cycle(series.labels.len());
    let value_labels = formatted(series, style.number_format);
    let y_max = bar_axis_max(series, style.headroom);

    let data = json!([{
        "x": series.labels,
        "y": series.values,
        "type": "bar",
        "name": series.name,
        "marker": {"color": colors, "line": {"color": colors, "width": 1}},
        "text": value_labels,
        "textposition": "outside",
        "textfont": {"color": TEXT_COLOR, "size": 12},
        "cliponaxis": false,
        "hovertemplate": "%{x}: %{text}<extra></extra>",
    }]);

    let mut layout = base_layout();
    layout["showlegend"] = json!(false);
    layout["xaxis"] = axis("Categories");
    layout["yaxis"] = axis("Value");
    layout["yaxis"]["range"] = json!([0.0, y_max]);
    layout["yaxis"]["tickformat"] = json!(style.number_format.tick_format());
    layout["yaxis"]["gridcolor"] = json!("#eee");

    ChartFigure {
        kind: ChartKind::Bar,
        series: series.clone(),
        colors,
        value_labels,
        percentages: Vec::new(),
        y_range: Some((0.0, y_max)),
        data,
        layout,
    }
}

fn pie_chart(series: &Series, style: &ChartStyle) -> ChartFigure {
    let colors = style.palette.pie().cycle(series.labels.len());
    let percentages = percentages(&series.values);
    let value_labels: Vec<String> = percentages.iter().map(|p| percent_label(*p)).collect();
    let raw_values = formatted(series, style.number_format);

    let data = json!([{
        "labels": series.labels,
        "values": series.values,
        "type": "pie",
        "name": series.name,
        "sort": false,
        "marker": {"colors": colors, "line": {"color": SLICE_BORDER, "width": 1}},
        "text": value_labels,
        "textinfo": "text",
        "textposition": "inside",
        "insidetextfont": {"color": SLICE_BORDER, "size": 12},
        "customdata": raw_values,
        "hovertemplate": "%{label}: %{customdata} (%{text})<extra></extra>",
    }]);

    let mut layout = base_layout();
    layout["showlegend"] = json!(true);
    layout["legend"] = json!({"orientation": "h", "x": 0.5, "xanchor": "center", "y": -0.1});

    ChartFigure {
        kind: ChartKind::Pie,
        series: series.clone(),
        colors,
        value_labels,
        percentages,
        y_range: None,
        data,
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::ResponsePayload;

    fn series(values: &[f64]) -> Series {
        let labels = (0..values.len()).map(|i| format!("L{i}")).collect();
        Series::new("Value", labels, values.to_vec())
    }

    #[test]
    fn test_not_needed_renders_nothing() {
        let payload: ResponsePayload = serde_json::from_value(json!({
            "graph_needed": "no",
            "graph_type": "bar_chart",
            "data": {"labels": ["a"], "datasets": [[1]]}
        }))
        .unwrap();
        assert_eq!(render(&payload.graph(), &ChartStyle::default()), ChartRender::Empty);
    }

    #[test]
    fn test_unsupported_message() {
        let rendered = render(
            &GraphSpec::Unsupported("unknown_type".to_string()),
            &ChartStyle::default(),
        );
        assert_eq!(rendered.placeholder(), Some("Unsupported graph type: unknown_type"));
    }

    #[test]
    fn test_invalid_data_message() {
        let rendered = render(&GraphSpec::InvalidData, &ChartStyle::default());
        assert_eq!(rendered.placeholder(), Some(NO_VALID_DATA));
    }

    #[test]
    fn test_pie_percentages() {
        assert_eq!(percentages(&[10.0, 20.0, 30.0, 40.0]), vec![10.0, 20.0, 30.0, 40.0]);
        assert_eq!(percentages(&[1.0, 2.0]), vec![33.3, 66.7]);
        assert_eq!(percentages(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_pie_figure() {
        let rendered = render(
            &GraphSpec::Pie(series(&[10.0, 20.0, 30.0, 40.0])),
            &ChartStyle::default(),
        );
        let figure = rendered.figure().expect("pie figure");
        assert_eq!(figure.kind, ChartKind::Pie);
        assert_eq!(figure.value_labels, vec!["10.0%", "20.0%", "30.0%", "40.0%"]);
        assert_eq!(figure.data[0]["type"], "pie");
        assert_eq!(figure.data[0]["marker"]["line"]["color"], "#fff");
        assert!(figure.layout.get("xaxis").is_none());
    }

    #[test]
    fn test_pie_colors_cycle_in_single_mode() {
        let style = ChartStyle {
            palette: PaletteChoice::Single,
            ..ChartStyle::default()
        };
        let figure = render(&GraphSpec::Pie(series(&[1.0; 11])), &style);
        let colors = &figure.figure().unwrap().colors;
        assert_eq!(colors[10], colors[0]);
        assert_ne!(colors[0], colors[1]);
    }

    #[test]
    fn test_bar_colors_cycle() {
        let figure = render(&GraphSpec::Bar(series(&[5.0; 12])), &ChartStyle::default());
        let figure = figure.figure().unwrap();
        assert_eq!(figure.colors.len(), 12);
        assert_eq!(figure.colors[10], figure.colors[0]);
        assert_eq!(figure.colors[11], figure.colors[1]);
        assert_eq!(figure.data[0]["marker"]["color"][11], figure.colors[1].as_str());
    }

    #[test]
    fn test_bar_headroom_and_labels() {
        let style = ChartStyle {
            number_format: NumberFormat::Grouped,
            ..ChartStyle::default()
        };
        let figure = render(&GraphSpec::Bar(series(&[1500.0, 3000.0])), &style);
        let figure = figure.figure().unwrap();
        let (low, high) = figure.y_range.unwrap();
        assert_eq!(low, 0.0);
        assert!((high - 3600.0).abs() < 1e-9);
        assert_eq!(figure.value_labels, vec!["1,500", "3,000"]);
        assert_eq!(figure.data[0]["textposition"], "outside");
        assert_eq!(figure.layout["showlegend"], false);
    }

    #[test]
    fn test_bar_axis_for_non_positive_values() {
        assert_eq!(bar_axis_max(&series(&[0.0, -2.0]), BAR_HEADROOM), 1.0);
        assert_eq!(bar_axis_max(&series(&[]), BAR_HEADROOM), 1.0);
    }

    #[test]
    fn test_line_figure() {
        let style = ChartStyle {
            number_format: NumberFormat::Fixed,
            ..ChartStyle::default()
        };
        let figure = render(&GraphSpec::Line(series(&[1.0, 2.5])), &style);
        let figure = figure.figure().unwrap();
        assert_eq!(figure.kind, ChartKind::Line);
        assert_eq!(figure.data[0]["fill"], "tozeroy");
        assert_eq!(figure.data[0]["line"]["shape"], "spline");
        assert_eq!(figure.data[0]["fillcolor"], "#FF6B6B33");
        assert_eq!(figure.layout["yaxis"]["rangemode"], "tozero");
        assert_eq!(figure.layout["yaxis"]["tickformat"], ".1f");
        assert_eq!(figure.layout["showlegend"], false);
        assert_eq!(figure.value_labels, vec!["1.0", "2.5"]);
    }

    #[test]
    fn test_to_plotly_shape() {
        let figure = render(&GraphSpec::Line(series(&[1.0])), &ChartStyle::default());
        let plotly = figure.figure().unwrap().to_plotly();
        assert!(plotly["data"].is_array());
        assert_eq!(plotly["config"]["displayModeBar"], false);
    }
}
