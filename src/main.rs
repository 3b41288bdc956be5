use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use md2slack::{Config, Error, JsonOptions, UnsupportedInline};

#[derive(Parser)]
#[command(name = "md2slack")]
#[command(version)]
#[command(about = "Convert Markdown files to Slack rich text blocks")]
#[command(
    after_help = "Inline code, images and inline HTML have no Slack rich text form. \
                  By default they fail the conversion; pass --skip-unsupported or set \
                  `unsupported = \"skip\"` under [inline] in a config file to drop them."
)]
struct Cli {
    /// Input Markdown file ("-" reads stdin)
    input: PathBuf,

    /// Output JSON file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file (defaults to the bundled config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Drop inline code, images and inline HTML instead of failing
    #[arg(long)]
    skip_unsupported: bool,

    /// Wrap the blocks in a {"blocks": [...]} message payload
    #[arg(long)]
    payload: bool,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        if matches!(e, Error::UnsupportedInline(_)) {
            eprintln!("hint: pass --skip-unsupported to drop unsupported inline nodes");
        }
        std::process::exit(1);
    }
}

/// The config named on the command line (which must exist), or the bundled
/// one, with command line overrides applied.
fn resolve_config(cli: &Cli) -> md2slack::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::compiled_default(),
    };
    if cli.skip_unsupported {
        config.inline.unsupported = UnsupportedInline::Skip;
    }
    Ok(config)
}

fn run(cli: &Cli) -> md2slack::Result<()> {
    let config = resolve_config(cli)?;

    // Read input file
    let markdown = if cli.input.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        content
    } else {
        fs::read_to_string(&cli.input)?
    };

    let options = JsonOptions {
        payload: cli.payload,
        pretty: cli.pretty,
    };
    let json = md2slack::markdown_to_json(&markdown, &config, options)?;

    match &cli.output {
        Some(output) => {
            fs::write(output, json + "\n")?;
            log::info!("wrote {}", output.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
