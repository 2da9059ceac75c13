use std::io::{self, IsTerminal, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use rust_crawler::cli::Cli;
use rust_crawler::finder::Finder;
use rust_crawler::output::{render_error, Presenter};

fn main() {
    let cli = Cli::parse();

    // 初始化日志
    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let color = !cli.no_color && io::stdout().is_terminal();

    if let Err(err) = run(&cli, color) {
        let color = !cli.no_color && io::stderr().is_terminal();
        eprintln!("{}", render_error(&format!("{:#}", err), color));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, color: bool) -> Result<()> {
    info!("开始运行 rust-crawler");
    let start_time = Instant::now();

    cli.validate()?;
    let options = cli.build_options();
    debug!("查找选项: {:?}", options);

    let records = Finder::new(options.clone())?
        .find()
        .with_context(|| format!("search in '{}' aborted", options.root.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Presenter::from_options(&options)
        .with_color(color)
        .present(&mut out, records)
        .context("failed to write results")?;
    out.flush()?;

    info!("搜索完成，耗时 {:.2?}", start_time.elapsed());
    Ok(())
}
