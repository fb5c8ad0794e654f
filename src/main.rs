use clap::{ArgAction, Parser, Subcommand};
use images_upload_cli::config::{self, CAPTION_FONT_VAR};
use images_upload_cli::font::{SystemFontResolver, load_caption_font};
use images_upload_cli::imaging::{self, ThumbnailParams};
use images_upload_cli::notify::{DesktopNotifier, NoopNotifier, Notifier};
use images_upload_cli::output::{self, ImageSummary};
use images_upload_cli::get_env_val;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "imgup")]
#[command(about = "Prepare images for upload to hosting services")]
#[command(long_about = "\
Prepare images for upload to hosting services

Thumbnails are scaled into a bounding box, get a 16px caption strip with the
original size and format, and are saved as JPEG:

  600x600 (PNG) [2.9 KiB]

Caption font: CAPTION_FONT (path or file name) → config.toml → arial.ttf,
DejaVuSans.ttf, LiberationSans-Regular.ttf, FreeSans.ttf.

Run 'imgup gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory holding config.toml (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show format, dimensions and size of an image
    Info {
        image: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write a captioned JPEG thumbnail
    Thumbnail {
        image: PathBuf,
        /// Output file (default: <stem>-thumb.jpg next to the image)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Bounding box width (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        width: Option<u32>,
        /// Bounding box height (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        height: Option<u32>,
        /// Show a desktop notification when done
        #[arg(long)]
        notify: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Info { image, json } => {
            let bytes = std::fs::read(&image)?;
            let summary = ImageSummary::new(imaging::identify(&bytes)?, bytes.len());
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                output::print_info(&image, &summary);
            }
        }
        Command::Thumbnail {
            image,
            output: out,
            width,
            height,
            notify,
        } => {
            let app_config = load_app_config(cli.config_dir.as_deref())?;

            let mut params = ThumbnailParams::from(&app_config.thumbnail);
            params.max_width = width.unwrap_or(params.max_width);
            params.max_height = height.unwrap_or(params.max_height);

            let font = load_caption_font(
                &SystemFontResolver::new(),
                app_config.thumbnail.caption_font.as_deref(),
                app_config.thumbnail.caption_size,
            )?;

            let bytes = std::fs::read(&image)?;
            let thumbnail = imaging::make_thumbnail(&bytes, &params, &font)?;

            let out = out.unwrap_or_else(|| default_thumbnail_path(&image));
            std::fs::write(&out, &thumbnail.data)?;
            tracing::info!(path = %out.display(), "thumbnail written");
            output::print_thumbnail(&image, &out, &thumbnail.plan, thumbnail.data.len());

            let notifier: Box<dyn Notifier> = if notify {
                Box::new(DesktopNotifier::from_config(&app_config.notify))
            } else {
                Box::new(NoopNotifier)
            };
            notifier.notify(&format!("Thumbnail saved: {}", out.display()));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Fails only when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Config file (if any) plus the `CAPTION_FONT` override.
fn load_app_config(dir: Option<&Path>) -> Result<config::AppConfig, config::ConfigError> {
    let dir = dir.map(Path::to_path_buf).or_else(config::default_config_dir);
    let app_config = match dir {
        Some(dir) => config::load_config(&dir)?,
        None => config::AppConfig::default(),
    };
    Ok(app_config.with_caption_font_override(get_env_val(CAPTION_FONT_VAR).ok()))
}

/// `photos/pic.png` → `photos/pic-thumb.jpg`
fn default_thumbnail_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    image.with_file_name(format!("{stem}-thumb.jpg"))
}
