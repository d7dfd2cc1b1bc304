//! Plain-text rendering of turns for the terminal.

use finchat_common::chart::{self, ChartFigure, ChartKind, ChartRender, ChartStyle};
use finchat_common::{ChatTurn, ResponsePayload};

const BAR_WIDTH: usize = 30;
const THINKING: &str = "(no answer)";

pub fn render_turn(turn: &ChatTurn, style: &ChartStyle) -> String {
    let answer = match turn.response() {
        Some(payload) => render_payload(payload, style),
        None => THINKING.to_string(),
    };
    format!("You: {}\n\nAssistant: {}", turn.question, answer)
}

/// Answer text, then the table block, then the chart summary.
pub fn render_payload(payload: &ResponsePayload, style: &ChartStyle) -> String {
    let mut out = payload.answer().to_string();

    if let Some(table) = payload.table_pretty() {
        out.push_str("\n\n");
        out.push_str(&table);
    }

    if let Some(summary) = chart_summary(&chart::render(&payload.graph(), style)) {
        out.push_str("\n\n");
        out.push_str(&summary);
    }

    out
}

pub fn chart_summary(rendered: &ChartRender) -> Option<String> {
    match rendered {
        ChartRender::Empty => None,
        ChartRender::Placeholder(text) => Some(text.clone()),
        ChartRender::Figure(figure) => Some(figure_summary(figure)),
    }
}

fn figure_summary(figure: &ChartFigure) -> String {
    let series = &figure.series;
    let label_width = series.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut lines = vec![format!("[{} chart] {}", figure.kind.as_str(), series.name)];

    for (idx, (label, value)) in series.labels.iter().zip(&series.values).enumerate() {
        let value_label = figure.value_labels.get(idx).map(String::as_str).unwrap_or_default();
        let line = match figure.kind {
            ChartKind::Pie => format!("{label:<label_width$}  {value_label:>6}  ({value})"),
            ChartKind::Bar | ChartKind::Line => {
                let bar = "█".repeat(bar_length(*value, series.max()));
                format!("{label:<label_width$}  {bar:<BAR_WIDTH$}  {value_label}")
            }
        };
        lines.push(line);
    }

    lines.join("\n")
}

fn bar_length(value: f64, max: f64) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * BAR_WIDTH as f64).round() as usize
}
