/// beadcraft command-line entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    cli::run(cli::Cli::parse())
}

// The library is the only wasm target
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::io::Read;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use anyhow::{Context, Result};
    use clap::{Parser, Subcommand};

    use beadcraft::color_utils::ansi_swatch;
    use beadcraft::config::AppConfig;
    use beadcraft::format::{self, PatternData, SuggestionRequest, WarningSeverity};
    use beadcraft::{BeadCounts, PatternGrid};

    #[derive(Parser)]
    #[command(name = "beadcraft")]
    #[command(about = "Iron-bead inventory normalization and 16x16 design decoding")]
    #[command(version)]
    pub struct Cli {
        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Decode a 256-character pattern string into a grid
        Decode {
            pattern: String,

            /// Draw colored blocks instead of pattern codes
            #[arg(short, long)]
            swatch: bool,
        },

        /// Normalize a bead counting response (file, or stdin when omitted)
        Counts { file: Option<PathBuf> },

        /// Show the designs in a suggestion response (file, or stdin when omitted)
        Suggestions {
            file: Option<PathBuf>,

            /// Prefix for pattern ids; defaults to the current time in ms
            #[arg(long)]
            request_id: Option<String>,

            #[arg(short, long)]
            swatch: bool,
        },

        /// Build the suggestion request URL from NAME=COUNT pairs
        Query {
            #[arg(required = true)]
            pairs: Vec<String>,
        },

        /// Print the effective configuration
        Config {
            /// Write the effective configuration to the default path
            #[arg(long)]
            save: bool,
        },
    }

    pub fn run(cli: Cli) -> Result<()> {
        let loaded = AppConfig::load_from_default_path();
        let config = match &loaded {
            Ok(Some(config)) => config.clone(),
            _ => AppConfig::default(),
        }
        .with_env_overrides();

        // RUST_LOG wins over the configured level when set
        env_logger::Builder::new()
            .filter_level(config.log_level.to_level_filter())
            .parse_default_env()
            .init();

        if let Err(e) = &loaded {
            log::warn!("Failed to load config file, using defaults: {}", e);
        }
        log::debug!("Log level {}", config.log_level.name());

        match cli.command {
            Commands::Decode { pattern, swatch } => {
                print_grid(&PatternGrid::decode(&pattern), swatch);
                Ok(())
            }
            Commands::Counts { file } => cmd_counts(file),
            Commands::Suggestions {
                file,
                request_id,
                swatch,
            } => cmd_suggestions(file, request_id, swatch),
            Commands::Query { pairs } => cmd_query(&config, &pairs),
            Commands::Config { save } => cmd_config(&config, save),
        }
    }

    fn read_input(file: Option<PathBuf>) -> Result<String> {
        match file {
            Some(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display())),
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read stdin")?;
                Ok(text)
            }
        }
    }

    fn print_grid(grid: &PatternGrid, swatch: bool) {
        if !swatch {
            println!("{}", grid);
            return;
        }
        for row in grid.rows() {
            let line: String = row.iter().map(|color| ansi_swatch(color.rgb())).collect();
            println!("{}", line);
        }
    }

    fn print_counts(counts: &BeadCounts) {
        for (color, count) in counts.iter() {
            println!("{:<8} {:>5}  {}", color.key(), count, color.hex());
        }
        println!("{:<8} {:>5}", "total", counts.total());
    }

    fn cmd_counts(file: Option<PathBuf>) -> Result<()> {
        let counts = format::parse_bead_counts(&read_input(file)?)?;
        print_counts(&counts);
        Ok(())
    }

    fn cmd_suggestions(
        file: Option<PathBuf>,
        request_id: Option<String>,
        swatch: bool,
    ) -> Result<()> {
        let request_id = request_id.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis().to_string())
                .unwrap_or_default()
        });

        let result = format::parse_suggestions(&read_input(file)?, &request_id)?;
        for warning in &result.warnings {
            let level = match warning.severity {
                WarningSeverity::Info => "info",
                WarningSeverity::Warning => "warning",
                WarningSeverity::Error => "error",
            };
            match &warning.pattern_id {
                Some(id) => eprintln!("{} [{}]: {}", level, id, warning.message),
                None => eprintln!("{}: {}", level, warning.message),
            }
        }

        for pattern in &result.items {
            print_pattern(pattern, swatch);
        }
        Ok(())
    }

    fn print_pattern(pattern: &PatternData, swatch: bool) {
        println!(
            "== {} {}",
            pattern.id,
            pattern.title.as_deref().unwrap_or("(untitled)")
        );
        if !pattern.pattern_len_ok() {
            println!("  (pattern has the wrong length; missing cells shown as white)");
        }
        print_grid(&pattern.grid(), swatch);
        for (color, count) in pattern.used_beads() {
            println!("  {:<8} {:>4}", color.label(), count);
        }
        println!("  {:<8} {:>4}", "Total", pattern.total_beads());
        println!();
    }

    fn cmd_query(config: &AppConfig, pairs: &[String]) -> Result<()> {
        let counts = format::counts_from_pairs(pairs, config.max_bead_count)?;

        let request = SuggestionRequest::new(&counts)?;
        println!("{}", request.url(&config.api_base_url));
        Ok(())
    }

    fn cmd_config(config: &AppConfig, save: bool) -> Result<()> {
        println!("{}", config.to_json()?);
        if save {
            let path = config.save_to_default_path()?;
            eprintln!("saved to {}", path.display());
        }
        Ok(())
    }
}
