use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes the default configuration file under the config directory.
/// In test mode only the resolved paths are reported.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init(cli.test)?;
    let cfg = Config::load()?;

    info("Initializing focustimeline…");
    println!("📄 Config file : {}", path.display());
    println!("📥 Input log   : {}", cfg.input_path().display());
    println!("📂 Output dir  : {}", cfg.output_path().display());

    success("focustimeline initialization completed!");
    Ok(())
}
