//! Scripted draw command.

use std::time::Duration;

use anyhow::{Context, Result};
use giveaway_core::config::Config;
use giveaway_core::saphira::{DrawRequest, SaphiraClient, SaphiraConfig};
use tracing::info;

pub struct DrawArgs {
    pub lecture_id: String,
    pub presencial_only: bool,
    pub delay_ms: Option<u64>,
}

pub async fn run(config: &Config, args: &DrawArgs) -> Result<()> {
    let key = super::require_authorized()?;
    let Some(request) = DrawRequest::new(&args.lecture_id, args.presencial_only) else {
        anyhow::bail!("Id inválido.");
    };
    let client = SaphiraClient::new(SaphiraConfig::from_config(config, Some(key))?)?;

    let delay = args
        .delay_ms
        .map_or_else(|| config.draw_delay(), Duration::from_millis);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    info!(
        lecture_id = %request.lecture_id,
        mode = request.mode.label(),
        "drawing winner"
    );
    let result = client
        .draw(&request)
        .await
        .with_context(|| format!("draw for lecture {}", request.lecture_id))?;
    println!("{}", result.winner);
    Ok(())
}
