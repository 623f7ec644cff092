use clap::Parser;

use bavard::cli::commands::chat::{self, StartupError};
use bavard::cli::commands::providers;
use bavard::cli::{Args, Command};
use bavard::ui::Style;
use bavard::{logging, output};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(output::OutputConfig { quiet: args.quiet });

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("{} {e}", Style::warning("Warning:"));
    }

    if let Err(e) = run(args).await {
        eprintln!("{} {e:#}", Style::error("Error:"));
        let code = e
            .downcast_ref::<StartupError>()
            .map_or(exitcode::SOFTWARE, StartupError::exit_code);
        std::process::exit(code);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Command::Providers { provider }) => providers::print_providers(provider.as_deref()),
        None => {
            let options = chat::ChatOptions {
                name: args.name,
                subject: args.subject,
                provider: args.provider,
                model: args.model,
            };
            chat::run_chat(options).await
        }
    }
}
