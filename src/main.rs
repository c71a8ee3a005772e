use std::path::PathBuf;
use std::thread;

use anyhow::{Context, anyhow};
use clap::Parser;
use html::{DomTree, Node};
use input_core::{RemoteConfig, RemoteForwarder};

mod deck;

use deck::DemoDeck;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Native remote-control window for a presentation running on another thread.
#[derive(Debug, Parser)]
#[command(name = "impress-remote", version)]
struct Args {
    /// TOML file overriding key bindings, tap bands and step classes.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of steps in the demo presentation.
    #[arg(long, default_value_t = 10)]
    steps: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RemoteConfig::load(path).with_context(|| format!("loading {path:?}"))?,
        None => RemoteConfig::default(),
    };

    let (opener, remote) = bus::channel();
    let steps = args.steps;
    let primary = thread::spawn(move || {
        let deck = DemoDeck::new(steps);
        opener.serve(&deck);
    });

    let navigator = bus::acquire(Some(remote)).context("attaching to the presentation")?;

    // The native window renders no page, so there is nothing to click: an
    // empty document is enough to bound the tree.
    let document = DomTree::new(Node::document(Vec::new()));
    platform::run(RemoteForwarder::new(navigator, document, config))?;

    primary
        .join()
        .map_err(|_| anyhow!("presentation thread panicked"))?;
    Ok(())
}
