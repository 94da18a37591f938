use clap::Parser;
use console_todo::{Shell, TaskStore};
use log::{LevelFilter, info};
use log4rs::Config;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Logger, Root};

/// Interactive console todo list. Tasks live in memory for one session.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Enable debug logging of shell and store activity
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose)?;
    info!("Starting console todo session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(TaskStore::new(), stdin.lock(), stdout.lock());
    shell.run()?;

    info!("Session finished");
    Ok(())
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let stdout = ConsoleAppender::builder().build();
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .logger(Logger::builder().build("console_todo", level))
        .build(Root::builder().appender("stdout").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
