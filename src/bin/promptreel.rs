use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "promptreel", version)]
struct Cli {
    /// Studio configuration JSON. Defaults apply to any missing field.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a frame-sequence artifact for a prompt.
    Generate(GenerateArgs),
    /// Project an artifact into a frame descriptor and an M3U8 playlist.
    Convert(ConvertArgs),
    /// Render a single generative PNG for a prompt.
    Image(ImageArgs),
    /// Print marketing copy for a prompt as JSON.
    Copy(CopyArgs),
    /// Serve the web form and JSON endpoint.
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Text prompt; stored as the artifact description.
    #[arg(long)]
    prompt: String,

    /// Output artifact path. Defaults to the configured storage layout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Sleep this many milliseconds after each frame.
    #[arg(long)]
    pace_ms: Option<u64>,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input artifact.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output frame descriptor JSON.
    #[arg(long)]
    descriptor: Option<PathBuf>,

    /// Output M3U8 playlist.
    #[arg(long)]
    playlist: Option<PathBuf>,

    /// Also write the PNG frames the playlist refers to.
    #[arg(long)]
    export_frames: bool,
}

#[derive(Parser, Debug)]
struct ImageArgs {
    #[arg(long)]
    prompt: String,
}

#[derive(Parser, Debug)]
struct CopyArgs {
    #[arg(long, value_enum)]
    kind: KindChoice,

    #[arg(long)]
    prompt: String,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Listen address.
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    Youtube,
    Website,
}

impl From<KindChoice> for promptreel::CopyKind {
    fn from(k: KindChoice) -> Self {
        match k {
            KindChoice::Youtube => Self::YouTube,
            KindChoice::Website => Self::Website,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Generate(args) => cmd_generate(config, args),
        Command::Convert(args) => cmd_convert(config, args),
        Command::Image(args) => cmd_image(config, args),
        Command::Copy(args) => cmd_copy(config, args),
        Command::Serve(args) => cmd_serve(config, args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<promptreel::StudioConfig> {
    match path {
        Some(p) => promptreel::StudioConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(promptreel::StudioConfig::default()),
    }
}

fn cmd_generate(config: promptreel::StudioConfig, args: GenerateArgs) -> anyhow::Result<()> {
    let mut studio = promptreel::Studio::new(config)?;
    if let Some(ms) = args.pace_ms {
        studio = studio.with_pacer(Arc::new(promptreel::FixedDelay::from_millis(ms)));
    }

    let out = args
        .out
        .unwrap_or_else(|| studio.config().artifact_path());
    let path = studio.generate_video_at(&args.prompt, &out)?;

    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_convert(config: promptreel::StudioConfig, args: ConvertArgs) -> anyhow::Result<()> {
    let studio = promptreel::Studio::new(config)?;
    let cfg = studio.config();

    let artifact = args.in_path.unwrap_or_else(|| cfg.artifact_path());
    let mut targets = promptreel::ConvertTargets::from_config(cfg);
    if let Some(p) = args.descriptor {
        targets.descriptor = p;
    }
    if let Some(p) = args.playlist {
        targets.playlist = p;
    }

    let projection = studio
        .convert_with(&artifact, &targets, args.export_frames)
        .with_context(|| format!("convert '{}'", artifact.display()))?;

    eprintln!(
        "wrote {} ({} frames)",
        targets.descriptor.display(),
        projection.descriptor.total_frames
    );
    eprintln!(
        "wrote {} ({} entries)",
        targets.playlist.display(),
        projection.playlist.entries.len()
    );
    Ok(())
}

fn cmd_image(config: promptreel::StudioConfig, args: ImageArgs) -> anyhow::Result<()> {
    let studio = promptreel::Studio::new(config)?;
    let path = studio.generate_image(&args.prompt)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_copy(config: promptreel::StudioConfig, args: CopyArgs) -> anyhow::Result<()> {
    let studio = promptreel::Studio::new(config)?;
    let copy = studio.marketing_copy(args.kind.into(), &args.prompt);
    let json = serde_json::to_string_pretty(&copy).context("serialize copy")?;
    println!("{json}");
    Ok(())
}

fn cmd_serve(config: promptreel::StudioConfig, args: ServeArgs) -> anyhow::Result<()> {
    let studio = Arc::new(promptreel::Studio::new(config)?);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start tokio runtime")?;
    runtime.block_on(promptreel::server::serve(studio, args.addr))?;
    Ok(())
}
