use super::logging::init_logging;
use super::menu::Session;
use super::render::print_messages;
use super::setup::Cli;
use clap::Parser;
use staffdb::api::StaffApi;
use staffdb::config::{StaffConfig, StorageKind};
use staffdb::error::Result;
use staffdb::store::array::ArrayStore;
use staffdb::store::sorted::SortedStore;
use staffdb::store::RecordStore;
use std::io;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    debug!(?config, "configuration");

    match config.storage {
        StorageKind::Sorted => {
            run_session(StaffApi::new(SortedStore::new(), config.rules()), &cli)
        }
        StorageKind::Array => run_session(
            StaffApi::new(ArrayStore::with_capacity(config.capacity), config.rules()),
            &cli,
        ),
    }
}

fn load_config(cli: &Cli) -> Result<StaffConfig> {
    match &cli.config {
        Some(path) => StaffConfig::load(path),
        None => match StaffConfig::default_path() {
            Some(path) => StaffConfig::load(path),
            None => Ok(StaffConfig::default()),
        },
    }
}

fn run_session<S: RecordStore>(mut api: StaffApi<S>, cli: &Cli) -> Result<()> {
    let mut stderr = io::stderr();

    if let Some(path) = &cli.database {
        let result = api.load_database(path)?;
        print_messages(&mut stderr, &result.messages)?;
    }

    let stdin = io::stdin();
    let mut session = Session::new(api, stdin.lock(), stderr, io::stdout(), cli.format);
    session.run()?;

    if let Some(path) = &cli.output {
        let result = session.api_mut().save_database(path)?;
        print_messages(&mut io::stderr(), &result.messages)?;
    }
    Ok(())
}
