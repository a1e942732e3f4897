mod error;

use std::path::PathBuf;

use access::AccessList;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use error::{Error, Result};

const DEFAULT_ACL_FILE: &str = ".buildconf.yaml";
const ACL_ACTOR_VAR: &str = "ACL_ACTOR";
const ACL_ENV_VAR: &str = "ACL_ENV";

#[derive(Parser)]
#[command(name = "gangway")]
#[command(about = "Environment access gate for automation pipelines", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the ACL file.
    #[arg(value_name = "PATH", default_value = DEFAULT_ACL_FILE)]
    path: PathBuf,
}

fn main() {
    init_tracing();

    match run() {
        // Granted: exit status 0.
        Ok(true) => {}
        // Denied and every error collapse to status 1; only the
        // diagnostics differ.
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    // Unset variables read as empty strings: an empty actor is never
    // listed, an empty environment is never defined.
    let actor = std::env::var(ACL_ACTOR_VAR).unwrap_or_default();
    let environment = std::env::var(ACL_ENV_VAR).unwrap_or_default();

    let list = AccessList::load(&cli.path).map_err(|source| Error::LoadList {
        path: cli.path.clone(),
        source,
    })?;

    let granted = list
        .can_access(&actor, &environment)
        .map_err(|source| Error::CheckAccess { source })?;

    if granted {
        info!(actor = %actor, environment = %environment, "access granted");
    } else {
        warn!(actor = %actor, environment = %environment, "access denied");
    }

    Ok(granted)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_acl_path() {
        let cli = Cli::parse_from(["gangway"]);
        assert_eq!(cli.path, PathBuf::from(DEFAULT_ACL_FILE));
    }

    #[test]
    fn test_positional_path_overrides_default() {
        let cli = Cli::parse_from(["gangway", "conf/team.yaml"]);
        assert_eq!(cli.path, PathBuf::from("conf/team.yaml"));
    }
}
