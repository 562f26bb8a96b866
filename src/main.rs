//! Tally CLI
//!
//! Loads a catalog fixture, replays cart commands against an empty cart and
//! prints the resulting receipt.
//!
//! ```text
//! tally --catalog store add:2 add:3 add:2 dec:3
//! tally --list
//! ```

use std::io::{self, Write};

use anyhow::Result;
use tracing::{info, warn};

use tally::{
    config::CliConfig, fixtures::Fixture, observability::init_subscriber, session::Session,
};

fn main() -> Result<()> {
    let config = CliConfig::load().unwrap_or_else(|err| err.exit());

    init_subscriber(&config.logging)?;

    let catalog = Fixture::with_base_path(&config.fixtures).load_catalog(&config.catalog)?;

    info!(
        catalog = %config.catalog,
        products = catalog.len(),
        currency = catalog.currency().iso_alpha_code,
        "loaded catalog"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if config.list {
        catalog.write_to(&mut handle)?;

        return Ok(());
    }

    let mut session = Session::new(&catalog);
    let rejected = session.run(&config.commands);

    if rejected > 0 {
        warn!(rejected, "some commands were rejected");
    }

    let receipt = if config.checkout && !session.cart().is_empty() {
        session.checkout()?
    } else {
        session.receipt()?
    };

    receipt.write_to(&mut handle)?;
    handle.flush()?;

    Ok(())
}
