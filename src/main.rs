use clap::Parser;
use site_index::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "site-index")]
#[command(about = "Build the file-tree index page and sitemap for a static site")]
#[command(long_about = "\
Build the file-tree index page and sitemap for a static site

Reads a JSON list of site paths and writes three files next to it:

  all/
  ├── more-everything.json   # input: [\"all/a/b.html\", \"all/c.png\", ...]
  ├── template-all.html      # input: page with {FILES}, {STYLES}, ... tokens
  ├── everything.txt         # output: flat outline (>dir, <, file)
  ├── index.html             # output: collapsible listing with filters
  └── sitemap.txt            # output: one page URL per line

The first segment of every path (\"all\") is dropped. Locations and the
sitemap base URL can be changed in an optional index.toml in the site root;
run 'site-index --print-config' for a documented template.")]
#[command(version)]
struct Cli {
    /// Site root; all configured file locations are relative to it
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Config file (default: <root>/index.toml, optional)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a stock index.toml with all options documented, then exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    // An explicit --config must exist; the root's index.toml is optional.
    let index_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::load_site_config(&cli.root)?,
    };

    output::print_start();
    let summary = generate::generate(&cli.root, &index_config, chrono::Utc::now())?;
    output::print_summary(&summary);

    Ok(())
}
