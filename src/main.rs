// AlgoFlow: step-by-step algorithm walkthroughs in the terminal

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use algoflow::catalog::{Algorithm, Catalog};
use algoflow::config::Config;
use algoflow::logging;
use algoflow::player::Speed;
use algoflow::ui::{App, TerminalSession};

#[derive(Parser)]
#[command(name = "algoflow", about = "Step through classic algorithms in the terminal", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// TOML dataset to use instead of the built-in library
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file (default: <config dir>/algoflow/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Playback speed: 0.5x, 1x or 2x
    #[arg(long, global = true)]
    speed: Option<Speed>,

    /// Write tracing output to this file
    #[arg(long = "log-file", global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the player for one algorithm
    Play { slug: String },
    /// Print every algorithm in the library
    List,
    /// Print the step script of one algorithm
    Steps { slug: String },
    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    logging::init(cli.log_file.as_deref(), config.log.level.into())
        .context("failed to set up logging")?;

    let catalog = match &cli.data {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load dataset {}", path.display()))?,
        None => Catalog::builtin(),
    };
    let speed = cli.speed.unwrap_or(config.player.default_speed);

    match cli.command {
        Some(Command::List) => {
            list(&catalog);
            Ok(())
        }
        Some(Command::Steps { slug }) => {
            let algorithm = find(&catalog, &slug)?;
            print_steps(&algorithm);
            Ok(())
        }
        Some(Command::Config) => {
            let mut effective = config;
            effective.player.default_speed = speed;
            let text = toml::to_string_pretty(&effective).context("failed to render config")?;
            print!("{}", text);
            Ok(())
        }
        Some(Command::Play { slug }) => {
            find(&catalog, &slug)?;
            let mut app = App::new(catalog, speed, config.ui.show_code);
            app.open(&slug);
            run(app)
        }
        None => run(App::new(catalog, speed, config.ui.show_code)),
    }
}

fn find(catalog: &Catalog, slug: &str) -> Result<std::rc::Rc<Algorithm>> {
    match catalog.get(slug) {
        Some(algorithm) => Ok(algorithm),
        None => bail!("algorithm '{}' not found (try `algoflow list`)", slug),
    }
}

fn run(mut app: App) -> Result<()> {
    let mut session = TerminalSession::start().context("failed to set up terminal")?;
    app.run(session.terminal()).context("terminal UI failed")
}

fn list(catalog: &Catalog) {
    for algorithm in catalog.library_order() {
        println!(
            "{:<24} {:<24} {:<16} {}",
            algorithm.slug,
            algorithm.name,
            algorithm.category.label(),
            algorithm.difficulty.label()
        );
    }
}

fn print_steps(algorithm: &Algorithm) {
    println!("{} ({} steps)", algorithm.name, algorithm.total_steps());
    for (idx, step) in algorithm.steps.iter().enumerate() {
        let title = step.title.as_deref().unwrap_or("(untitled)");
        match step.pseudocode_line {
            Some(line) => println!("{:>3}. {} [line {}]", idx + 1, title, line),
            None => println!("{:>3}. {}", idx + 1, title),
        }
        println!("     {}", step.visual.summary());
    }
}
