use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::info;

use chromeify::{
    DropShadow, RenderOpts, Rgba8, ServerConfig, ShadowParams, Theme, load_image, render,
    write_png,
};

#[derive(Parser, Debug)]
#[command(name = "chromeify", version)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Frame one image file and write the result as PNG.
    Decorate(DecorateArgs),
    /// Serve the upload form and the /decorate endpoint over HTTP.
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
struct DecorateArgs {
    /// Input image (PNG, JPEG or GIF).
    input: PathBuf,

    /// Output PNG path.
    output: PathBuf,

    /// Draw a drop shadow behind the frame.
    #[arg(long)]
    dropshadow: bool,

    /// Theme directory with top_left.png, top.png, ... (bundled theme if omitted).
    #[arg(long)]
    theme_dir: Option<PathBuf>,

    /// Pre-fill the canvas with magenta so pixels the theme misses stand out.
    #[arg(long)]
    debug_gaps: bool,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// HTTP service address.
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// Theme directory (bundled theme if omitted).
    #[arg(long)]
    theme_dir: Option<PathBuf>,

    /// Largest accepted upload, in bytes.
    #[arg(long)]
    max_upload_bytes: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    chromeify::logging::init(cli.verbose);
    match cli.cmd {
        Command::Decorate(args) => cmd_decorate(args),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn load_theme(dir: Option<&PathBuf>) -> anyhow::Result<Theme> {
    let theme = match dir {
        Some(dir) => Theme::from_dir(dir)
            .with_context(|| format!("load theme from '{}'", dir.display()))?,
        None => Theme::default_theme().context("load bundled theme")?,
    };
    Ok(theme)
}

fn cmd_decorate(args: DecorateArgs) -> anyhow::Result<()> {
    let theme = load_theme(args.theme_dir.as_ref())?;
    let page = load_image(&args.input)
        .with_context(|| format!("load input '{}'", args.input.display()))?;

    let opts = RenderOpts {
        drop_shadow: if args.dropshadow {
            Some(DropShadow::new(ShadowParams::default())?)
        } else {
            None
        },
        gap_fill: args.debug_gaps.then_some(Rgba8::GAP_MAGENTA),
    };
    let out = render(&theme, &page, &opts)?;

    write_png(&args.output, &out)
        .with_context(|| format!("write png '{}'", args.output.display()))?;

    info!(
        width = out.width(),
        height = out.height(),
        "wrote {}",
        args.output.display()
    );
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_path(path)?,
        None => ServerConfig::default(),
    };
    if let Some(addr) = args.addr {
        config.addr = addr;
    }
    if let Some(dir) = args.theme_dir {
        config.theme_dir = Some(dir);
    }
    if let Some(limit) = args.max_upload_bytes {
        config.max_upload_bytes = limit;
    }
    config.validate()?;

    let runtime = tokio::runtime::Runtime::new().context("start tokio runtime")?;
    runtime.block_on(async {
        let handle = chromeify::server::start(&config).await?;
        eprintln!("listening on: {}", handle.addr());
        tokio::signal::ctrl_c()
            .await
            .context("wait for ctrl-c")?;
        handle.shutdown().await
    })
}
