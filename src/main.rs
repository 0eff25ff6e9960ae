use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifetable::config::Config;
use lifetable::driver::Driver;
use lifetable::surface::PageFile;
use lifetable::timer::SleepTimer;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::default();
    let grid = config.initial_grid();

    info!(
        width = config.width,
        height = config.height,
        page = ?config.page,
        "starting simulation"
    );

    let page = PageFile::new(&config.page, &config.element_id);
    let mut driver = Driver::new(page, SleepTimer, config.delay);

    let outcome = driver
        .run(grid)
        .with_context(|| format!("Failed to display board on {:?}", config.page))?;

    info!(generations = outcome.generations, "done");
    print!("{}", outcome.last);

    Ok(())
}
