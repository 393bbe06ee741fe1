//! Unresolve command - rewrite a path into its canonical session form.

use anyhow::Result;
use clap::Args;
use console::Style;
use stagelink_resolver::unresolve;

use super::Context;

/// Arguments for the unresolve command.
#[derive(Args, Debug)]
pub struct UnresolveArgs {
    /// Live-addressable path to rewrite
    pub path: String,
}

/// Run the unresolve command.
pub fn run(args: UnresolveArgs, ctx: &Context) -> Result<()> {
    let canonical = unresolve(&args.path, &ctx.workspace_root)?;

    if ctx.json_output {
        println!(
            "{}",
            serde_json::json!({
                "path": args.path,
                "workspace": ctx.workspace_root,
                "canonical": canonical,
            })
        );
        return Ok(());
    }

    println!("{}", canonical);
    if canonical.is_empty() {
        let dim = Style::new().dim();
        println!("  {}", dim.apply_to("(the workspace root itself)"));
    }

    Ok(())
}
