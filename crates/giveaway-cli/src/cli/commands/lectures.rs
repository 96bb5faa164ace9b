//! Lecture listing command.

use anyhow::{Context, Result};
use giveaway_core::config::Config;
use giveaway_core::saphira::{SaphiraClient, SaphiraConfig, sort_lectures_desc};
use tracing::info;

pub async fn run(config: &Config) -> Result<()> {
    let key = super::require_authorized()?;
    let client = SaphiraClient::new(SaphiraConfig::from_config(config, Some(key))?)?;

    let mut lectures = client.get_lectures().await.context("load lectures")?;
    sort_lectures_desc(&mut lectures);
    info!(count = lectures.len(), "listed lectures");

    for lecture in &lectures {
        println!("id: {} | Título: {}", lecture.id, lecture.title);
    }
    Ok(())
}
