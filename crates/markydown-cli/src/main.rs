use anyhow::{Context, Result, bail};
use clap::Parser;
use markydown_config::Config;
use markydown_html::{HtmlOptions, HtmlRenderer};
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "markydown")]
#[command(about = "Convert Markydown text to HTML")]
#[command(version)]
struct Args {
    /// Markydown file to convert (stdin if omitted)
    input: Option<PathBuf>,

    /// Where to write the result (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/markydown/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit a complete HTML document
    #[arg(long, conflicts_with = "fragment")]
    standalone: bool,

    /// Emit just the body content
    #[arg(long)]
    fragment: bool,

    /// Use XHTML-style void elements (`<br />`)
    #[arg(long)]
    xhtml: bool,

    /// Print the parser events instead of HTML
    #[arg(long)]
    events: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Renderer options: config file settings, overridden by flags.
    fn html_options(&self, config: &Config) -> HtmlOptions {
        let standalone = if self.standalone {
            true
        } else if self.fragment {
            false
        } else {
            config.html.standalone
        };

        HtmlOptions {
            standalone,
            xhtml: self.xhtml || config.html.xhtml,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let path = Config::expand_path(path);
            log::debug!("Loading config from {}", path.display());
            match Config::load_from_path(&path)? {
                Some(config) => Ok(config),
                None => bail!("Config file '{}' does not exist", path.display()),
            }
        }
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "No config file at {}, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(
            fs::File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn write_events(source: &str, out: &mut dyn Write) -> Result<()> {
    for event in markydown_syntax::events(source) {
        writeln!(out, "{event:?}")?;
    }
    out.flush()?;
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let source = read_input(args.input.as_deref())?;
    log::info!("Read {} bytes of input", source.len());

    let mut out = open_output(args.output.as_deref())?;

    if args.events {
        return write_events(&source, &mut out).context("Failed to write events");
    }

    let config = load_config(args.config.as_deref())?;
    let options = args.html_options(&config);
    log::debug!("HTML options: {options:?}");

    let mut renderer = HtmlRenderer::new(out, options);
    markydown_syntax::parse(&source, &mut renderer).context("Failed to write HTML")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args)
}
