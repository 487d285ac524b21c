use clap::{CommandFactory, Parser};
use productdash::config::{CliConfig, Config};
use productdash::reporting::logging;
use productdash::server;
use productdash::ui::completion::print_completions;
use productdash::ui::{Cli, Commands, cli_to_config};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    if let Err(e) = run_dashboard(&cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Build the page, then either export it or serve it until Ctrl-C
pub async fn run_dashboard(cli: &Cli) -> productdash::Result<()> {
    let cli_config = cli_to_config(cli);

    // Installed before the config is read so a skipped config file is reported
    logging::init_logger(cli_config.verbose, cli_config.debug, cli_config.quiet);
    let config = load_and_merge_config(&cli_config)?;
    logging::set_level(config.is_verbose(), config.is_debug(), cli_config.quiet);
    logging::log_config_info(&config);

    let page = productdash::build_dashboard(&config)?;

    if let Some(ref export_path) = config.export_path {
        page.write_to(export_path)?;
        if !cli_config.quiet {
            println!("Dashboard written to {export_path}");
        }
        return Ok(());
    }

    let html = page.render()?;
    let settings = config.server_settings();
    let listener = server::bind(&settings).await?;
    if !cli_config.quiet {
        match listener.local_addr() {
            Ok(addr) => println!("Dashboard running on http://{addr}/ (press Ctrl-C to stop)"),
            Err(_) => println!("Dashboard running on http://{}/", settings.address()),
        }
    }
    server::serve(listener, server::router(html.into(), settings.debug)).await
}

pub fn load_and_merge_config(cli_config: &CliConfig) -> productdash::Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
