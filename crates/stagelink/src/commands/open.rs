//! Open command - rewrite a live-addressable path and bring a session up.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Args;
use console::Style;
use tokio::time::timeout;

use stagelink::{
    ConnectProgress, KeepAlive, LiveBackend, LiveSessionInfo, SessionEvent, StudioBridge,
    TokioHeartbeat,
};

use super::Context;

/// How long to wait for the session to activate or tear down.
const EVENT_WAIT: Duration = Duration::from_secs(5);

/// Arguments for the open command.
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Live-addressable path to open
    pub path: String,
}

/// Backend stand-in that connects instantly. The real server connection is a
/// host collaborator; this lets the open flow run end to end from the CLI
/// and report the session parameters it would use.
struct LoopbackBackend;

impl LiveBackend for LoopbackBackend {
    fn begin_connect(&self, _info: &LiveSessionInfo) -> stagelink_live::Result<()> {
        Ok(())
    }

    fn poll_connect(&self) -> ConnectProgress {
        ConnectProgress::Connected
    }

    fn keep_alive(&self) -> KeepAlive {
        KeepAlive::Ok
    }

    fn disconnect(&self) {}
}

/// Run the open command.
pub async fn run(args: OpenArgs, ctx: &Context) -> Result<()> {
    let scheduler = Arc::new(TokioHeartbeat::new());
    let backend = Arc::new(LoopbackBackend);
    let bridge = StudioBridge::new(ctx.settings.clone(), scheduler, backend);
    bridge.set_workspace_path(&ctx.workspace_root);

    let mut events = bridge.subscribe();
    let canonical = bridge.open_live_stage(&args.path)?;

    let activated = timeout(EVENT_WAIT, events.recv())
        .await
        .context("timed out waiting for the session to activate")?;
    anyhow::ensure!(
        activated == Some(SessionEvent::Activated),
        "session did not activate: {:?}",
        activated
    );

    let info = bridge
        .controller()
        .session_info()
        .context("session info missing after activation")?;

    if ctx.json_output {
        println!(
            "{}",
            serde_json::json!({
                "path": args.path,
                "canonical": canonical,
                "live_url": info.live_url,
                "channel_id": info.channel_id,
                "user_id": info.user_id,
            })
        );
    } else {
        let green = Style::new().green();
        let dim = Style::new().dim();
        println!("{} {}", green.apply_to("opened"), canonical);
        println!("  {} {}", dim.apply_to("live url:"), info.live_url);
        println!("  {} {}", dim.apply_to("channel: "), info.channel_id);
        println!("  {} {}", dim.apply_to("user:    "), info.user_id);
    }

    // Tear down cleanly so the heartbeat is released before exit.
    bridge.stop_live_mode();
    timeout(EVENT_WAIT, events.recv())
        .await
        .context("timed out waiting for the session to stop")?;

    Ok(())
}
