use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pages::{AssetStore, PageRouter};
use shared::protocol::PagePayload;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, env = "ASSET_DIR", default_value = "./assets")]
    asset_dir: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sidebar entries in menu order.
    ListPages,
    /// Print a page's content blocks as JSON.
    Render { page: String },
    /// Verify every image and report the pages reference is present.
    CheckAssets,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("warn").init();

    let cli = Cli::parse();
    let assets = AssetStore::new(&cli.asset_dir);
    let router = PageRouter::new();

    match cli.command {
        Command::ListPages => {
            for page in router.pages() {
                println!("{:<14} {}", page.slug(), page.label());
            }
        }
        Command::Render { page } => {
            let rendered = router
                .dispatch(&page, &assets)
                .with_context(|| format!("failed to render page '{page}'"))?;
            let Some(rendered) = rendered else {
                bail!("unknown page '{page}'");
            };
            let payload = PagePayload::from(rendered);
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Command::CheckAssets => {
            let missing = router.audit_assets(&assets);
            if missing.is_empty() {
                println!("all assets present under {}", assets.root().display());
                return Ok(());
            }
            for asset in &missing {
                eprintln!("missing {} (page: {})", asset.path, asset.page.label());
            }
            bail!(
                "{} asset(s) missing under {}",
                missing.len(),
                assets.root().display()
            );
        }
    }

    Ok(())
}
