//! Config command - show the effective bridge configuration.

use anyhow::Result;
use clap::Args;
use console::Style;

use super::Context;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Run the config command.
pub fn run(_args: ConfigArgs, ctx: &Context) -> Result<()> {
    let settings = &ctx.settings;

    if ctx.json_output {
        println!(
            "{}",
            serde_json::json!({
                "workspace": ctx.workspace_root,
                "server_url": settings.effective_server_url(),
                "live_url": settings.live_url(),
                "channel_id": settings.channel_id,
                "user_prefix": settings.user_prefix,
                "heartbeat_interval_ms": settings.heartbeat_interval_ms,
            })
        );
        return Ok(());
    }

    let dim = Style::new().dim();
    let workspace = if ctx.workspace_root.is_empty() {
        format!("{}", dim.apply_to("(unset)"))
    } else {
        ctx.workspace_root.clone()
    };

    println!("workspace:          {}", workspace);
    println!("server url:         {}", settings.effective_server_url());
    println!("live url:           {}", settings.live_url());
    println!("channel:            {}", settings.channel_id);
    println!("user prefix:        {}", settings.user_prefix);
    println!("heartbeat interval: {}ms", settings.heartbeat_interval_ms);

    Ok(())
}
