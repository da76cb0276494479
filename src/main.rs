use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use justme::cli::args::{Cli, Commands, MoodArgs};
use justme::cli::commands::{self, Context};
use justme::config::{ColorSetting, Config, Paths};
use justme::core::SystemClock;
use justme::storage::Store;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn apply_color(setting: ColorSetting) {
    match setting {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                colored::control::set_override(false);
            }
        },
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Completions need neither config nor database
    if let Commands::Completions { shell } = cli.command {
        print!("{}", commands::completions(shell));
        return Ok(());
    }

    let paths = Paths::resolve(cli.data_dir)?;
    let config = Config::load_from_path(&paths.config_file)?;
    apply_color(config.general.color);

    let store = Store::open(&paths)
        .with_context(|| format!("could not open data directory {}", paths.root.display()))?;
    tracing::debug!(root = %paths.root.display(), "store ready");

    let ctx = Context {
        store,
        clock: Box::new(SystemClock),
        format: cli.output.unwrap_or(config.general.default_output),
        config,
    };

    let output = match cli.command {
        Commands::Add(args) => commands::add(&ctx, &args)?,
        Commands::Edit(args) => commands::edit(&ctx, &args)?,
        Commands::Delete { habit, yes } => commands::delete(&ctx, &habit, yes)?,
        Commands::List { all } => commands::list(&ctx, all)?,
        Commands::Show { habit, date, limit } => {
            commands::show(&ctx, &habit, date.as_deref(), limit)?
        },
        Commands::Log(args) => commands::log(&ctx, &args)?,
        Commands::Today { date } => commands::today(&ctx, date.as_deref())?,
        Commands::Stats { all, date } => commands::stats(&ctx, all, date.as_deref())?,
        Commands::Profile { date } => commands::profile(&ctx, date.as_deref())?,
        Commands::Mood(MoodArgs { command }) => commands::mood(&ctx, command)?,
        Commands::Seed { days, yes } => commands::seed(&ctx, days, yes)?,
        Commands::Reset { yes } => commands::reset(&ctx, yes)?,
        Commands::Completions { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
    Ok(())
}
