use std::io::Write;

use anyhow::Result;
use finchat_common::chart::ChartStyle;
use finchat_common::{ChatConfig, Conversation};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::client::QueryClient;
use crate::terminal::render_payload;

const PROMPT: &str = "> ";
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

pub async fn chat(config: &ChatConfig) -> Result<()> {
    info!("Starting interactive session");
    let client = QueryClient::new(config);
    let stdin = BufReader::new(tokio::io::stdin());
    let log = run_session(&client, &ChartStyle::from(config), stdin, std::io::stdout()).await?;
    info!("Session ended after {} questions", log.len());
    Ok(())
}

/// Read questions line by line until EOF or an exit word, asking each one in
/// turn. Rejected or failed questions are reported and the loop continues.
async fn run_session<R, W>(
    client: &QueryClient,
    style: &ChartStyle,
    input: R,
    mut out: W,
) -> Result<Conversation>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut log = Conversation::new();
    let mut lines = input.lines();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        if EXIT_WORDS.contains(&line.trim()) {
            break;
        }

        let id = match log.submit(&line) {
            Ok(id) => id,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };
        let question = log.get(id).map(|turn| turn.question.clone()).unwrap_or_default();
        debug!(turn = id.index(), "Question submitted");

        match client.ask(&question).await {
            Ok(payload) => {
                writeln!(out, "{}\n", render_payload(&payload, style))?;
                log.resolve(id, payload)?;
            }
            Err(e) => {
                // The turn stays pending; the user can ask again.
                warn!(turn = id.index(), "Query failed: {}", e);
                writeln!(out, "Error: {e}\n")?;
            }
        }
    }

    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    async fn client() -> QueryClient {
        let app = Router::new().route(
            "/query",
            post(|Json(body): Json<Value>| async move {
                let query = body["query"].as_str().unwrap_or_default().to_string();
                if query == "fail" {
                    return (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "error": "backend down" })));
                }
                (StatusCode::OK, Json(json!({ "content": format!("answer to {query}") })))
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        QueryClient::new(&ChatConfig::default().with_backend_url(format!("http://{addr}")))
    }

    async fn session(input: &str) -> (Conversation, String) {
        let client = client().await;
        let mut out = Vec::new();
        let log = run_session(&client, &ChartStyle::default(), input.as_bytes(), &mut out)
            .await
            .unwrap();
        (log, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_answers_in_order_until_exit() {
        let (log, out) = session("  first  \nsecond\nexit\nnever asked\n").await;

        assert_eq!(log.len(), 2);
        assert_eq!(log.turns()[0].question, "first");
        assert_eq!(log.turns()[1].response().unwrap().answer(), "answer to second");
        assert!(out.contains("answer to first"));
        assert!(!out.contains("never asked"));
    }

    #[tokio::test]
    async fn test_blank_line_is_rejected() {
        let (log, out) = session("   \nquit\n").await;

        assert!(log.is_empty());
        assert!(out.contains("Please enter a question"));
    }

    #[tokio::test]
    async fn test_failed_query_keeps_turn_pending() {
        let (log, out) = session("fail\nok").await;

        assert_eq!(log.len(), 2);
        assert!(log.turns()[0].is_pending());
        assert!(!log.turns()[1].is_pending());
        assert!(out.contains("Error: backend down"));
    }
}
