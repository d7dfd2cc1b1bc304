use std::path::Path;

use anyhow::{Context, Result};
use finchat_common::chart::{self, ChartRender, ChartStyle};
use finchat_common::{ChatConfig, ResponsePayload};
use tracing::debug;

use crate::terminal::render_payload;

pub async fn render(config: &ChatConfig, path: &Path, json: bool) -> Result<()> {
    debug!("Rendering payload from {}", path.display());

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let payload: ResponsePayload = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a query response", path.display()))?;

    let style = ChartStyle::from(config);
    if json {
        println!("{}", figure_json(&payload, &style)?);
    } else {
        println!("{}", render_payload(&payload, &style));
    }
    Ok(())
}

/// Plotly figure JSON, or the placeholder text when no figure is drawn.
fn figure_json(payload: &ResponsePayload, style: &ChartStyle) -> Result<String> {
    Ok(match chart::render(&payload.graph(), style) {
        ChartRender::Figure(figure) => serde_json::to_string_pretty(&figure.to_plotly())?,
        ChartRender::Placeholder(text) => text,
        ChartRender::Empty => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_figure_json_for_bar() {
        let payload: ResponsePayload = serde_json::from_value(json!({
            "graph_needed": "yes",
            "graph_type": "bar_chart",
            "data": { "labels": ["a", "b"], "datasets": [[2], [5]] }
        }))
        .unwrap();

        let text = figure_json(&payload, &ChartStyle::default()).unwrap();
        let figure: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(figure["data"][0]["type"], "bar");
        assert_eq!(figure["layout"]["yaxis"]["range"][1], 6.0);
    }

    #[test]
    fn test_figure_json_for_invalid_data() {
        let payload: ResponsePayload = serde_json::from_value(json!({
            "graph_needed": "yes",
            "graph_type": "line_chart",
            "data": { "labels": [] }
        }))
        .unwrap();

        assert_eq!(
            figure_json(&payload, &ChartStyle::default()).unwrap(),
            "No valid data available for chart"
        );
    }

    #[tokio::test]
    async fn test_missing_file() {
        let path = std::env::temp_dir().join("finchat-render-missing.json");
        assert!(render(&ChatConfig::default(), &path, false).await.is_err());
    }
}
