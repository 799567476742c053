use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mdsite::Config;

#[derive(Parser)]
#[command(name = "mdsite", version)]
#[command(about = "Build a static HTML site from Markdown pages")]
struct Cli {
    /// Prefix for root-relative links (defaults to the config's base_path)
    base_path: Option<String>,

    /// Site config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Directory of Markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets copied into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log progress at info level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut site = Config::load(&cli.config).site;
    if let Some(base_path) = cli.base_path {
        site.base_path = base_path;
    }
    if let Some(content) = cli.content {
        site.content_dir = content;
    }
    if let Some(static_dir) = cli.static_dir {
        site.static_dir = static_dir;
    }
    if let Some(template) = cli.template {
        site.template = template;
    }
    if let Some(output) = cli.output {
        site.output_dir = output;
    }

    let summary = match mdsite::site::build(&site) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Generated {} pages in {}",
        summary.pages,
        site.output_dir.display()
    );
}
