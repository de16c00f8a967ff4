//! filedeck: interactive file toolbox for the terminal

use anyhow::Result;
use clap::Parser;
use console::style;
use log::{error, info};

use filedeck::actions::OfficeConverter;
use filedeck::app::{App, AppConfig};
use filedeck::cli::{Cli, TermConsole};
use filedeck::menu::MenuError;
use filedeck::utils::{init_logging, print_banner};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_path();
    if let Err(err) = init_logging(&log_path, cli.log_level.into()) {
        eprintln!("{} {:#}", style("Logging disabled:").yellow(), err);
    }
    info!("filedeck v{} starting", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_cli(&cli)?;
    let converter = OfficeConverter::new(config.soffice.clone());
    info!("Document converter: {}", converter.program().display());

    print_banner(env!("CARGO_PKG_VERSION"));

    let mut app = App::new(TermConsole::new(), config, Box::new(converter))?;
    match app.run() {
        Ok(()) => Ok(()),
        Err(err) if matches!(err.downcast_ref::<MenuError>(), Some(MenuError::Interrupted)) => {
            info!("Interrupted by user");
            println!("\n    {}", style("Cancelled by user.").dim());
            Ok(())
        }
        Err(err) => {
            error!("{:#}", err);
            Err(err)
        }
    }
}
