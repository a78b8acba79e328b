use std::rc::Rc;

use clap::Parser;
use kitchen_core::cli::{self, Cli};
use kitchen_core::{Config, FileStorage, Storefront, init_logger_with_file};

fn main() -> anyhow::Result<()> {
    // 1. 环境变量 (.env 可选)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(dir) = cli.work_dir.clone() {
        config.work_dir = dir;
    }

    // 2. 日志
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    // 3. 本地存储
    let storage = FileStorage::open(&config.work_dir)?;
    tracing::debug!(path = %storage.path().display(), "Local storage opened");

    let front = Storefront::new(config, Rc::new(storage));
    let mut stdout = std::io::stdout().lock();
    cli::run(&front, cli.command, &mut stdout)
}
