use clap::Parser;
use log::LevelFilter;
use simple_md::{config, generate, output, scan, title};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-md")]
#[command(about = "Turn a folder of Markdown notes into a static HTML site")]
#[command(long_about = "\
Turn a folder of Markdown notes into a static HTML site

The site is written next to the content directory, as <name>_static.
That directory must not exist yet.

Content structure:

  notes/
  ├── index.md          # Optional: title and intro for the root index page
  ├── about.md          # Page → about/index.html
  ├── logo.svg          # Anything else is copied unchanged
  └── travel/           # Directory → travel/index.html listing its pages
      ├── index.md      # Optional: title and intro for travel/index.html
      └── japan.md      # Page → travel/japan/index.html

Page titles come from the first line of each Markdown file.")]
#[command(version)]
struct Cli {
    /// Content directory
    source: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let site_config = config::SiteConfig::from_source(&cli.source)?;
    let titles = title::TitleExtractor::new()?;

    println!("==> Stage 1: Scanning {}", site_config.source.display());
    let site = scan::scan(&site_config, &titles)?;
    output::print_scan_output(&site);

    println!(
        "==> Stage 2: Generating HTML → {}",
        site_config.output.display()
    );
    let report = generate::generate(&site, &site_config.output)?;
    output::print_generate_output(&report);

    println!("==> Build complete: {}", site_config.output.display());
    Ok(())
}
