use clap::{CommandFactory, Parser};
use memrank_cli::args::CompletionsArgs;
use memrank_cli::cli::Cli;
use memrank_cli::commands::Commands;
use memrank_cli::context::MemrankCliContext;
use memrank_cli::handlers::{handle_check_command, handle_rank_command};
use memrank_cli::output::output_error_json;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli_args = Cli::parse();

    let output_format = cli_args.output_format();

    tracing_subscriber::fmt()
        .with_max_level(cli_args.log_level())
        .with_writer(std::io::stderr)
        .init();

    match run(cli_args, &output_format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output_error_json(&e, &output_format);
            ExitCode::FAILURE
        }
    }
}

fn run(cli_args: Cli, output_format: &str) -> memrank::Result<()> {
    match cli_args.command {
        Commands::Version => {
            println!("memrank CLI v{}", memrank::VERSION);
        }

        Commands::Completions(CompletionsArgs { shell }) => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(
                clap_complete::Shell::from(shell),
                &mut command,
                name,
                &mut std::io::stdout(),
            );
        }

        Commands::Rank(args) => {
            let ctx = MemrankCliContext::new(cli_args.config.as_deref())?;
            handle_rank_command(args, &ctx, output_format)?;
        }

        Commands::Check(args) => {
            let ctx = MemrankCliContext::new(cli_args.config.as_deref())?;
            handle_check_command(args, &ctx, output_format)?;
        }
    }

    Ok(())
}
