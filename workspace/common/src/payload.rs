//! Wire contract of the query endpoint.
//!
//! The backend returns a loosely shaped JSON object. It is deserialized as-is
//! into [`ResponsePayload`] and then narrowed once into a [`GraphSpec`], so the
//! chart renderer only ever sees a closed set of variants.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

pub const LINE_CHART: &str = "line_chart";
pub const BAR_CHART: &str = "bar_chart";
pub const PIE_CHART: &str = "pie_chart";

const GRAPH_NEEDED: &str = "yes";

/// Request body for `POST {backend_url}query`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryRequest {
    pub query: String,
    /// Always sent empty, the backend gets no multi-turn context.
    pub chat_history: Vec<Value>,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            chat_history: Vec::new(),
        }
    }
}

/// Response body of the query endpoint.
///
/// The chart fields are kept as raw JSON: a malformed chart block must
/// degrade to a placeholder instead of failing the whole answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ResponsePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_needed: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ResponsePayload {
    /// Answer text: `content` when non-empty, else `text_answer`, else empty.
    pub fn answer(&self) -> &str {
        self.content
            .as_deref()
            .filter(|c| !c.is_empty())
            .or(self.text_answer.as_deref())
            .unwrap_or_default()
    }

    /// Table block, if the backend sent a non-null one.
    pub fn table(&self) -> Option<&Value> {
        self.table_data.as_ref().filter(|t| !t.is_null())
    }

    /// Table block pretty-printed with two-space indentation.
    pub fn table_pretty(&self) -> Option<String> {
        self.table()
            .and_then(|t| serde_json::to_string_pretty(t).ok())
    }

    pub fn graph_requested(&self) -> bool {
        self.graph_needed.as_ref().and_then(Value::as_str) == Some(GRAPH_NEEDED)
    }

    /// Chart type name; a non-string type is carried as its JSON text.
    pub fn graph_type_name(&self) -> String {
        match &self.graph_type {
            None => String::new(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Narrow the loose chart fields into a [`GraphSpec`].
    ///
    /// `graph_needed` is checked first, then the data block, then the type
    /// name, so an unknown type with missing data reports missing data.
    pub fn graph(&self) -> GraphSpec {
        if !self.graph_requested() {
            return GraphSpec::None;
        }

        let Some(raw) = self.data.as_ref().and_then(RawSeries::parse) else {
            return GraphSpec::InvalidData;
        };

        match self.graph_type_name().as_str() {
            LINE_CHART => GraphSpec::Line(raw.into_series("Value Over Time")),
            BAR_CHART => GraphSpec::Bar(raw.into_series("Value")),
            PIE_CHART => GraphSpec::Pie(raw.into_series("Value")),
            other => GraphSpec::Unsupported(other.to_string()),
        }
    }
}

/// A single labelled numeric series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            labels,
            values,
        }
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Largest value, or zero for an empty series.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0_f64, f64::max)
    }
}

/// Chart request after validation.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphSpec {
    /// The backend did not ask for a chart.
    None,
    /// A chart was asked for but labels or datasets are missing or malformed.
    InvalidData,
    Line(Series),
    Bar(Series),
    Pie(Series),
    /// Unknown `graph_type`; an absent type is carried as an empty string.
    Unsupported(String),
}

impl GraphSpec {
    pub fn series(&self) -> Option<&Series> {
        match self {
            GraphSpec::Line(series) | GraphSpec::Bar(series) | GraphSpec::Pie(series) => {
                Some(series)
            }
            GraphSpec::None | GraphSpec::InvalidData | GraphSpec::Unsupported(_) => None,
        }
    }
}

struct RawSeries {
    labels: Vec<String>,
    values: Vec<f64>,
    legend: Option<String>,
}

impl RawSeries {
    fn parse(data: &Value) -> Option<Self> {
        let labels = data
            .get("labels")?
            .as_array()?
            .iter()
            .map(|label| match label {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();

        let datasets = data.get("datasets")?.as_array()?;
        let mut values = Vec::with_capacity(datasets.len());
        for (idx, entry) in datasets.iter().enumerate() {
            // Each entry is a one-element array; only the first value is used.
            match entry.as_array().and_then(|a| a.first()).and_then(Value::as_f64) {
                Some(value) => values.push(value),
                None => {
                    warn!(index = idx, entry = %entry, "Dataset entry is not a numeric array");
                    return None;
                }
            }
        }

        let legend = data
            .get("legend")
            .and_then(Value::as_array)
            .and_then(|l| l.first())
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(Self {
            labels,
            values,
            legend,
        })
    }

    fn into_series(self, default_name: &str) -> Series {
        Series {
            name: self.legend.unwrap_or_else(|| default_name.to_string()),
            labels: self.labels,
            values: self.values,
        }
    }
}
