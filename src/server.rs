use tracing::info;

use crate::cli::ServeArgs;
use urlshort::api::{self, StartupError};
use urlshort::config::Config;

pub async fn run(args: ServeArgs) -> Result<(), StartupError> {
    info!("Loading configuration");
    let mut config = match args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    if let Some(address) = args.address {
        config.server.bind_addr = address;
    }
    // A file given on the command line replaces any file from settings.
    if args.yaml.is_some() || args.json.is_some() {
        config.source.yaml = args.yaml;
        config.source.json = args.json;
    }
    config.source.strict |= args.strict;

    api::run(config).await
}
