//! CLI Status Command
//!
//! Queries a running server's health endpoint.

use anyhow::Result;

pub async fn run(base_url: &str) -> Result<()> {
    let url = format!("{}/api/health", base_url.trim_end_matches('/'));
    match reqwest::get(&url).await {
        Ok(resp) => {
            let body: serde_json::Value = resp.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Err(_) => {
            println!("Inkwiz is not reachable at {base_url}");
        }
    }
    Ok(())
}
