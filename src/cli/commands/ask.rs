use anyhow::{Result, anyhow};
use finchat_common::chart::ChartStyle;
use finchat_common::{ChatConfig, Conversation};
use tracing::{debug, error, info};

use crate::client::QueryClient;
use crate::terminal::render_turn;

pub async fn ask(config: &ChatConfig, question: &str) -> Result<()> {
    debug!("Asking single question");

    let mut log = Conversation::new();
    let id = log.submit(question)?;
    let question = log.get(id).map(|turn| turn.question.clone()).unwrap_or_default();

    let client = QueryClient::new(config);
    let payload = match client.ask(&question).await {
        Ok(payload) => payload,
        Err(e) => {
            error!("Query failed: {}", e);
            return Err(anyhow!(e));
        }
    };
    log.resolve(id, payload)?;

    let turn = log.get(id).ok_or_else(|| anyhow!("turn {} missing", id.index()))?;
    println!("{}", render_turn(turn, &ChartStyle::from(config)));

    info!("Question answered");
    Ok(())
}
