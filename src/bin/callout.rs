use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "callout", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a bubble pointing at an anchor as a PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Bubble configuration JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file for the label. Without it the bubble is drawn empty.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Override the label text.
    #[arg(long)]
    text: Option<String>,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 480)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 160)]
    height: u32,

    /// Anchor x on the canvas.
    #[arg(long)]
    anchor_x: f64,

    /// Anchor y on the canvas; the notch tip lands here.
    #[arg(long)]
    anchor_y: Option<f64>,

    /// Left edge of the visible frame (defaults to the canvas edge).
    #[arg(long)]
    frame_left: Option<f64>,

    /// Right edge of the visible frame (defaults to the canvas edge).
    #[arg(long)]
    frame_right: Option<f64>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => callout::BubbleConfig::from_path(path)?,
        None => callout::BubbleConfig::default(),
    };
    if args.text.is_some() {
        config.text = args.text.clone();
    }

    let mut service = callout::ParleyTextService::new();
    if let Some(font) = &args.font {
        let family = service.register_font_file(font)?;
        if config
            .font_family
            .as_deref()
            .is_none_or(|f| !service.has_family(f))
        {
            config.font_family = Some(family);
        }
    }

    let mut bubble = callout::BubbleRenderer::new(Box::new(service), &config)?;
    let w = bubble.intrinsic_width()?;
    let h = bubble.intrinsic_height();
    // Local origin sits on the anchor; the body hangs above it.
    bubble.set_bounds(callout::Rect::new(-w / 2.0, -h, w / 2.0, 0.0));

    let width = f64::from(args.width);
    let height = f64::from(args.height);
    let anchor_at = callout::Point::new(args.anchor_x, args.anchor_y.unwrap_or(height - 8.0));
    let frame = callout::Rect::new(
        args.frame_left.unwrap_or(0.0),
        0.0,
        args.frame_right.unwrap_or(width),
        height,
    );
    let mut anchor = callout::LayoutAnchor::new(anchor_at, frame);
    bubble.attach(&mut anchor);

    let mut surface = callout::CpuSurface::new(args.width, args.height, None)?;
    {
        use callout::Surface as _;
        surface.translate(anchor_at.to_vec2());
    }
    bubble.render(&mut surface)?;
    bubble.detach(&mut anchor);
    let frame = surface.finish().into_straight();

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
