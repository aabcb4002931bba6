use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{LevelFilter, info};

use repwise_domain::{ExperienceLevel, Goal, KnowledgeRepository, KnowledgeService, MuscleGroup};
use repwise_storage::{bundled::Bundled, file::File};

mod command;
mod settings;

#[derive(Parser)]
#[command(
    name = "repwise",
    about = "Evidence-based training knowledge lookup",
    version
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Settings file.
    #[arg(long, env = "REPWISE_CONFIG", default_value = "repwise.json")]
    config: PathBuf,

    /// Knowledge base file used instead of the bundled one.
    #[arg(long, env = "REPWISE_KNOWLEDGE_BASE")]
    knowledge_base: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the details of an exercise.
    Exercise {
        /// Exercise name (case-insensitive).
        name: String,
    },
    /// List the recommended exercises of a muscle group.
    Exercises { muscle_group: MuscleGroup },
    /// Show the volume landmarks of a muscle group.
    Volume {
        muscle_group: MuscleGroup,
        /// Training goal (bulk, cut, maintain).
        #[arg(short, long, default_value = "bulk")]
        goal: Goal,
        /// Experience level (beginner, intermediate, advanced).
        #[arg(short, long, default_value = "intermediate")]
        level: ExperienceLevel,
    },
    /// List exercise substitutions of a muscle group.
    Substitutes {
        muscle_group: MuscleGroup,
        /// Only show the substitution for this scenario.
        scenario: Option<String>,
    },
    /// Show the general training principles.
    Principles,
    /// List all muscle groups.
    MuscleGroups,
    /// Remove citation and image artifacts from text.
    Sanitize {
        text: String,
        /// Only print the first sentence.
        #[arg(long)]
        first_sentence: bool,
    },
}

fn init_logging(verbosity: u8, default: LevelFilter) {
    let level = match verbosity {
        0 => default,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run<R: KnowledgeRepository>(
    subcommand: Commands,
    service: &KnowledgeService<R>,
) -> anyhow::Result<String> {
    match subcommand {
        Commands::Exercise { name } => command::exercise(service, &name),
        Commands::Exercises { muscle_group } => command::exercises(service, &muscle_group),
        Commands::Volume {
            muscle_group,
            goal,
            level,
        } => command::volume(service, &muscle_group, goal, level),
        Commands::Substitutes {
            muscle_group,
            scenario,
        } => command::substitutes(service, &muscle_group, scenario.as_deref()),
        Commands::Principles => command::principles(service),
        Commands::MuscleGroups => Ok(command::muscle_groups(service)),
        Commands::Sanitize {
            text,
            first_sentence,
        } => Ok(command::sanitize(&text, first_sentence)),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = settings::load(&cli.config)?;
    init_logging(cli.verbose, settings.log_level()?);

    let output = match cli.knowledge_base.or(settings.knowledge_base) {
        Some(path) => {
            info!("reading knowledge base from {}", path.display());
            run(cli.command, &KnowledgeService::new(File::new(path)))?
        }
        None => run(cli.command, &KnowledgeService::new(Bundled))?,
    };
    print!("{output}");

    Ok(())
}
