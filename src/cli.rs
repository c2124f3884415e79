// src/cli.rs
use std::path::PathBuf;

use crate::config::{ExtractOptions, RenderOptions, consts::DEFAULT_MARKDOWN};
use crate::error::{Error, Result};
use crate::runner::{self, ExtractSummary, RenderSummary};

const EXTRACT_HELP: &str = include_str!("extract_help.txt");
const RENDER_HELP: &str = include_str!("render_help.txt");

/// What the process should do after looking at argv.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<T> {
    Run(T),
    Help,
}

/// `extract` takes no arguments besides `-h/--help`.
pub fn parse_extract_args<I, S>(args: I) -> Result<Command<()>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    match args.into_iter().next().map(Into::<String>::into) {
        None => Ok(Command::Run(())),
        Some(a) if a == "-h" || a == "--help" => Ok(Command::Help),
        Some(a) => Err(Error::Usage(format!("Unknown arg: {a} (extract takes no arguments)"))),
    }
}

/// `render [INPUT] [OUTPUT]`
pub fn parse_render_args<I, S>(args: I) -> Result<Command<RenderOptions>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut opts = RenderOptions::default();
    let mut positional = 0usize;

    for a in args {
        let a: String = a.into();
        if a == "-h" || a == "--help" {
            return Ok(Command::Help);
        }
        if a.starts_with('-') && a.len() > 1 {
            return Err(Error::Usage(format!("Unknown arg: {a}")));
        }
        match positional {
            0 => opts.input = PathBuf::from(a),
            1 => opts.output = PathBuf::from(a),
            _ => return Err(Error::Usage(format!("Unexpected extra argument: {a}"))),
        }
        positional += 1;
    }
    Ok(Command::Run(opts))
}

pub fn run_extract<I, S>(args: I) -> Result<Option<ExtractSummary>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    match parse_extract_args(args)? {
        Command::Help => {
            eprint!("{EXTRACT_HELP}");
            Ok(None)
        }
        Command::Run(()) => {
            let opts = ExtractOptions::load()?;
            runner::extract(&opts, &PathBuf::from(DEFAULT_MARKDOWN)).map(Some)
        }
    }
}

pub fn run_render<I, S>(args: I) -> Result<Option<RenderSummary>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    match parse_render_args(args)? {
        Command::Help => {
            eprint!("{RENDER_HELP}");
            Ok(None)
        }
        Command::Run(opts) => runner::render(&opts).map(Some),
    }
}
