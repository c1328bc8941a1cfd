use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "taskflow", version, about = "Taskflow CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan file management
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Project management
    Project {
        #[command(subcommand)]
        action: commands::project::ProjectAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Weekly work-hours configuration
    Hours {
        #[command(subcommand)]
        action: commands::hours::HoursAction,
    },
    /// Schedule generation
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    // Handle must stay alive for the duration of the process.
    let _logger = init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Project { action } => commands::project::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Hours { action } => commands::hours::run(action),
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "taskflow", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

// Quiet by default; RUST_LOG=debug surfaces allocator diagnostics.
fn init_logging() -> Option<flexi_logger::LoggerHandle> {
    flexi_logger::Logger::try_with_env_or_str("warn")
        .ok()?
        .start()
        .ok()
}
