use clap::{Parser, Subcommand};
use simple_folio::{config, data, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Static site generator for single-artist portfolios")]
#[command(long_about = "\
Static site generator for single-artist portfolios

Artworks are grouped into chapters and shown on one scrolling page with a
lightbox viewer. Every artwork also gets its own page with the lightbox open
on it, so works can be linked directly.

Content structure:

  content/
  ├── config.toml        # Site config (optional)
  ├── artist.json        # Name, profile image, education, statement, contact
  ├── chapters.json      # Chapters in display order
  ├── artworks.json      # Artworks: id, chapter, order, title, image, ...
  └── images/            # Copied verbatim to the output

Artworks whose chapter doesn't exist are left out of the site; 'check'
lists them.

Run 'simple-folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the full site into the output directory
    Build,
    /// Validate content without building
    Check {
        /// Treat artworks with a missing chapter as an error
        #[arg(long)]
        strict: bool,
    },
    /// Print one rendered page to stdout
    Preview {
        /// Open the lightbox on this artwork id
        #[arg(long)]
        artwork: Option<String>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site = data::load(&cli.source)?;
            init_thread_pool(&site.config.processing);

            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(&site, &cli.source, &cli.output)?;
            output::print_warnings(&report.warnings);
            output::print_build_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check { strict } => {
            println!("==> Checking {}", cli.source.display());
            let site = data::load(&cli.source)?;
            init_thread_pool(&site.config.processing);
            output::print_check_output(&site, &cli.source);

            let (_, warnings) = generate::probe_images(&site, &cli.source);
            output::print_warnings(&warnings);
            if strict {
                data::check_strict(&site.catalog)?;
            }
            println!("==> Content is valid");
        }
        Command::Preview { artwork } => {
            let site = data::load(&cli.source)?;
            init_thread_pool(&site.config.processing);
            let preview = generate::preview(&site, &cli.source, artwork.as_deref())?;
            output::print_warnings(&preview.warnings);
            if let Some(id) = &preview.unknown {
                eprintln!("warning: no artwork with id '{id}', showing closed page");
            }
            print!("{}", preview.html);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Capped at the number of available CPU cores.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
