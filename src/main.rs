use clap::Parser;
use cryptjournal::cli::{commands, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; RUST_LOG overrides the --verbose default.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Write {
            ref title,
            ref body,
        } => commands::write::execute(&cli, title, body.as_deref()),
        Commands::Edit {
            id,
            ref title,
            ref body,
        } => commands::edit::execute(&cli, id, title.as_deref(), body.as_deref()),
        Commands::List => commands::list::execute(&cli),
        Commands::Show { id } => commands::show::execute(&cli, id),
        Commands::Search { ref query } => commands::search::execute(&cli, query),
        Commands::Delete { id, force } => commands::delete::execute(&cli, id, force),
        Commands::Export { ref output } => commands::export::execute(&cli, output.as_deref()),
        Commands::Import { ref file } => commands::import_cmd::execute(&cli, file),
        Commands::Clear { force } => commands::clear::execute(&cli, force),
        Commands::Demo => commands::demo::execute(),
    };

    if let Err(e) = result {
        cryptjournal::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
