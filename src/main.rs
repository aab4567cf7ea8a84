use blend::cli::{check, demo, output, rates, run, CheckCommand, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(ref args) => run::execute(args).await,
        Commands::Rates(ref args) => rates::execute(&args.config, args.json),
        Commands::Demo(ref args) => demo::execute(&args.config, args.ticks, args.seed),
        Commands::Check(CheckCommand::Config(ref args)) => check::execute_config(&args.config),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
