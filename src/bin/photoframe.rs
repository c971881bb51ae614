use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "photoframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every template as JSON.
    Themes(ThemesArgs),
    /// Compose photos into a full-size frame.
    Compose(ComposeArgs),
    /// Compose a scaled-down preview of a frame.
    Preview(PreviewArgs),
    /// Write one preview per theme for the given photos.
    Gallery(GalleryArgs),
}

#[derive(Parser, Debug)]
struct ThemesArgs {
    /// Only list templates for this many photos.
    #[arg(long)]
    count: Option<usize>,
}

#[derive(Parser, Debug)]
struct CommonArgs {
    /// Asset directory holding `icons/` and `fonts/`.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Output encoding; defaults to `PHOTOFRAME_FORMAT`, then JPEG.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// JPEG quality (1..=100).
    #[arg(long)]
    quality: Option<u8>,

    /// Input photos, in slot order (1 to 4).
    #[arg(required = true, num_args = 1..=4)]
    photos: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Theme identifier (see `photoframe themes`).
    #[arg(long)]
    theme: String,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Theme identifier (see `photoframe themes`).
    #[arg(long)]
    theme: String,

    /// Longest side of the preview in pixels.
    #[arg(long)]
    max_dim: Option<u32>,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser, Debug)]
struct GalleryArgs {
    /// Directory receiving `<template-id>.<ext>` files.
    #[arg(long)]
    out_dir: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Jpeg,
    Png,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Themes(args) => cmd_themes(args),
        Command::Compose(args) => cmd_compose(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Gallery(args) => cmd_gallery(args),
    }
}

fn cmd_themes(args: ThemesArgs) -> anyhow::Result<()> {
    let registry = photoframe::TemplateRegistry::new();
    let infos: Vec<photoframe::TemplateInfo> = registry
        .iter()
        .filter(|t| args.count.is_none_or(|n| t.photo_count() == n))
        .map(photoframe::Template::info)
        .collect();
    let json = serde_json::to_string_pretty(&infos).context("serialize template list")?;
    println!("{json}");
    Ok(())
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let (composer, photos) = setup(&args.common)?;
    let bytes = composer.compose_by_id(&args.theme, &photos)?;
    write_output(&args.out, &bytes)
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let (composer, photos) = setup(&args.common)?;
    let template = composer
        .registry()
        .resolve(&args.theme, photos.len())
        .ok_or_else(|| photoframe::FrameError::template_not_found(&args.theme, photos.len()))?;
    let max_dim = args
        .max_dim
        .unwrap_or(composer.opts().preview_max_dimension);
    let bytes = composer.compose_preview(&photos, template, max_dim)?;
    write_output(&args.out, &bytes)
}

fn cmd_gallery(args: GalleryArgs) -> anyhow::Result<()> {
    let (composer, photos) = setup(&args.common)?;
    let ext = composer.opts().export_format().extension();
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for preview in composer.preview_gallery(&photos)? {
        let path = args.out_dir.join(format!("{}.{ext}", preview.template_id));
        write_output(&path, &preview.bytes)?;
    }
    Ok(())
}

fn setup(args: &CommonArgs) -> anyhow::Result<(photoframe::Composer, photoframe::PhotoSet)> {
    let mut opts = photoframe::ComposeOpts::from_env();
    if let Some(choice) = args.format {
        opts.format = match choice {
            FormatChoice::Jpeg => photoframe::ExportFormat::default(),
            FormatChoice::Png => photoframe::ExportFormat::Png,
        };
    }
    if let Some(q) = args.quality {
        opts.jpeg_quality = q;
    }

    let assets = match &args.assets {
        Some(root) => photoframe::AssetLibrary::load_dir(root),
        None => photoframe::AssetLibrary::empty(),
    };
    tracing::debug!(icons = assets.icon_count(), font = assets.font().is_some(), "assets loaded");

    let encoded = args
        .photos
        .iter()
        .map(|p| std::fs::read(p).with_context(|| format!("read photo '{}'", p.display())))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let photos = photoframe::PhotoSet::decode(&encoded)?;

    let composer = photoframe::Composer::new(
        Arc::new(photoframe::TemplateRegistry::new()),
        Arc::new(assets),
        opts,
    )?;
    Ok((composer, photos))
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write image '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
