//! Common types shared between the browser frontend and the terminal client.
//! Everything here is platform-neutral: the query contract, the chart option
//! builder and the conversation log compile for both wasm32 and native targets.

pub mod chart;
pub mod config;
pub mod conversation;
pub mod error;
pub mod format;
pub mod layout;
pub mod palette;
pub mod payload;
pub mod suggestions;

pub use chart::{ChartFigure, ChartKind, ChartRender, ChartStyle};
pub use config::ChatConfig;
pub use conversation::{ChatTurn, Conversation, TurnId, TurnState};
pub use error::{ChatError, ErrorResponse, query_error_message};
pub use format::NumberFormat;
pub use palette::{Palette, PaletteChoice};
pub use payload::{GraphSpec, QueryRequest, ResponsePayload, Series};

