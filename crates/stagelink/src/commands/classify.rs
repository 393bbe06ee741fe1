//! Classify command - decide whether a path is live-addressable.

use anyhow::Result;
use clap::Args;
use console::Style;
use stagelink_resolver::is_live_path;

use super::Context;

/// Arguments for the classify command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Path as the host application sees it
    pub path: String,
}

/// Run the classify command.
pub fn run(args: ClassifyArgs, ctx: &Context) -> Result<()> {
    let live = is_live_path(&args.path, &ctx.workspace_root);

    if ctx.json_output {
        println!(
            "{}",
            serde_json::json!({
                "path": args.path,
                "workspace": ctx.workspace_root,
                "live": live,
            })
        );
        return Ok(());
    }

    let dim = Style::new().dim();
    if live {
        let green = Style::new().green();
        println!("{}", green.apply_to("live"));
        println!(
            "  {} {}",
            dim.apply_to("redirected into workspace:"),
            ctx.workspace_root
        );
    } else {
        println!("local");
        if ctx.workspace_root.is_empty() {
            println!("  {}", dim.apply_to("no workspace configured"));
        }
    }

    Ok(())
}
