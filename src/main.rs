use anyhow::Context;
use fixvec::config::{Config, ElementKind};
use fixvec::menu::Menu;
use log::debug;
use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env().context("invalid configuration")?;
    debug!("running menu with {:?} elements", config.element);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let result = match config.element {
        ElementKind::Float => Menu::<f64>::new().run(stdin.lock(), &mut stdout),
        ElementKind::Integer => Menu::<i64>::new().run(stdin.lock(), &mut stdout),
    };
    result.context("menu I/O failed")?;

    Ok(())
}
