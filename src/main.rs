use clap::Parser;
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;
use tilebg::{GeneratorConfig, TilebgError, WallpaperGenerator, patterns};

// Exact arithmetic allocates many small big integers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Seamless geometric desktop background image generator.
#[derive(Parser, Debug)]
#[command(name = "tilebg", version, about)]
struct Cli {
    /// Pattern to generate (see --list)
    pattern: Option<String>,

    /// Seed for the random fill choices [default: 1]
    #[arg(long)]
    seed: Option<u64>,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stylesheet as CSS or a JSON rule list
    #[arg(long)]
    stylesheet: Option<PathBuf>,

    /// JSON file with generator settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// List the available patterns and exit
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn into_config(self) -> Result<GeneratorConfig, TilebgError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };
        if self.pattern.is_some() {
            config.pattern = self.pattern;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.output.is_some() {
            config.output = self.output;
        }
        if self.stylesheet.is_some() {
            config.stylesheet = self.stylesheet;
        }
        Ok(config)
    }
}

fn main() -> Result<(), TilebgError> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        let mut stdout = io::stdout().lock();
        for pattern in patterns::all() {
            writeln!(stdout, "{:<18}{}", pattern.name(), pattern.title())?;
        }
        return Ok(());
    }

    let config = cli.into_config()?;
    debug!("Resolved configuration: {:?}", config);
    if config.pattern.is_none() {
        return Err(TilebgError::Config(format!(
            "No pattern given. Choose one of: {}",
            patterns::names().join(", ")
        )));
    }

    let generator = WallpaperGenerator::from_config(&config)?;
    match &config.output {
        Some(path) => generator.generate_to_file(path)?,
        None => {
            let mut stdout = io::BufWriter::new(io::stdout().lock());
            generator.generate_to_writer(&mut stdout)?;
            writeln!(stdout)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
