use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::env;
use std::path::PathBuf;
use std::process;

use cometnet_setup::cli::{self, parse_flag_value, EXIT_FAILURE};
use cometnet_setup::config::SetupConfig;
use cometnet_setup::error::SetupError;
use cometnet_setup::identity::CometbftCli;
use cometnet_setup::orchestrator::ClusterSetup;

const USAGE: &str = "Usage: configure-nodes [--use-mongodb=true|false] <path_to_docker_volumes>";

/// Wire pre-initialized CometBFT nodes into a full-mesh test network with a shared genesis
#[derive(Parser, Debug)]
#[command(name = "configure-nodes", author, version, about, long_about = None)]
struct Args {
    /// Directory holding one sub-directory per node, relative to the current directory
    #[arg(required = true, num_args = 1..)]
    path: Vec<String>,

    /// Store blocks in each node's sibling MongoDB service
    #[arg(
        short = 'm',
        long = "use-mongodb",
        value_name = "true|false",
        default_value = "false",
        value_parser = parse_flag_value,
        action = clap::ArgAction::Set
    )]
    use_mongodb: bool,
}

impl Args {
    /// Volume root: path words joined by a space, relative to the current directory
    fn root(&self) -> Result<PathBuf> {
        let cwd = env::current_dir().wrap_err("Failed to get current directory")?;
        Ok(cwd.join(self.path.join(" ")))
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args: Args = cli::parse_or_exit(USAGE);

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let root = args.root()?;
    let config = SetupConfig::from_env();

    info!("Configuring nodes under {:?}", root);
    info!("MongoDB block store: {}", args.use_mongodb);
    info!("Identity query binary: {}", config.identity_binary);

    let source = CometbftCli::new(config.identity_binary.clone());
    let setup = ClusterSetup::new(config, args.use_mongodb);

    let report = match setup.run(&root, &source) {
        Ok(report) => report,
        Err(err @ SetupError::MissingConfigDir { .. }) => {
            eprintln!("{}", err);
            process::exit(EXIT_FAILURE);
        }
        Err(err) => {
            return Err(err)
                .wrap_err_with(|| format!("Failed to configure nodes under '{}'", root.display()));
        }
    };

    info!("Genesis time: {}", report.genesis_time);
    info!(
        "Configured {} nodes ({} files written)",
        report.nodes.len(),
        report.files_written.len()
    );
    Ok(())
}
