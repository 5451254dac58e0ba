// std imports
use std::io::{BufWriter, Write, stdout};
use std::process;

// third-party imports
use clap::Parser;
use env_logger::{self as logger};
use itertools::Itertools;

// local imports
use globgrep::{
    App, Options,
    app::build_glob_set,
    cli, config,
    error::*,
    input::InputReference,
};

const GLOBGREP_DEBUG_LOG: &str = "GLOBGREP_DEBUG_LOG";
const GLOBGREP_DEBUG_LOG_STYLE: &str = "GLOBGREP_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(GLOBGREP_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(GLOBGREP_DEBUG_LOG)
                .write_style(GLOBGREP_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Warn)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<bool> {
    bootstrap();

    let opt = cli::Opt::parse();

    let (configs, no_default) = opt.config_files();
    let settings = config::at(configs).no_default(no_default).load()?;
    log::debug!("settings: {:?}", &settings);

    let globs = build_glob_set(
        opt.all_patterns()
            .map(globgrep::GlobMatcher::from)
            .chain(settings.patterns.iter().cloned()),
        settings.limits.max_pattern_length,
    )?;
    log::debug!("patterns: {}", globs.iter().join(", "));

    let inputs = if opt.files.is_empty() {
        vec![InputReference::Stdin]
    } else {
        opt.files.iter().cloned().map(InputReference::from_arg).collect()
    };

    let app = App::new(Options {
        globs,
        mode: opt.mode.unwrap_or(settings.mode),
        invert: opt.invert_match || settings.invert,
        count: opt.count,
        line_number: opt.line_number || settings.line_number,
        with_filename: opt.with_filename,
        show_pattern: opt.show_pattern,
        max_line_length: opt.max_line_length.or(settings.limits.max_line_length),
    });

    let mut output = BufWriter::new(stdout().lock());
    let stats = app.run(&inputs, &mut output)?;
    output.flush()?;

    log::debug!("done: {:?}", stats);
    if stats.skipped != 0 {
        log::warn!("{} line(s) skipped for exceeding the length limit", stats.skipped);
    }

    Ok(stats.selected != 0)
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) if err.is_broken_pipe() => {}
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(2);
        }
    }
}
