use crate::demo::{run_catalog, run_demo, run_random, CatalogArgs, DemoArgs, RandomArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pc_builder::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "PC Builder",
    about = "Assemble and validate PC builds from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List the parts library grouped by kind, or export it as CSV
    Catalog(CatalogArgs),
    /// Walk through a scripted build, including the mistakes the validator catches
    Demo(DemoArgs),
    /// Generate the starter build and print its spec sheet
    Random(RandomArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog(args) => run_catalog(args),
        Command::Demo(args) => run_demo(args),
        Command::Random(args) => run_random(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["pc-builder-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_random_overrides() {
        let cli = Cli::try_parse_from(["pc-builder-api", "random", "--min-psu-watts", "900"])
            .expect("parses");
        match cli.command {
            Some(Command::Random(args)) => assert_eq!(args.min_psu_watts, Some(900)),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
