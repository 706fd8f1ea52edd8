//! abbrev: shortens file-system paths for display
//! Paths longer than the limit are cut from the left and prefixed with an ellipsis.

use anyhow::Result;
use clap::{Arg, ArgAction, Command as ClapCommand};
use std::io::{self, BufWriter};
use std::path::PathBuf;

use path_abbrev::commands::abbreviate::{handle_abbreviate_command, AbbreviateArgs, PathSource};

fn build_cli() -> ClapCommand {
    ClapCommand::new("abbrev")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Shorten file-system paths to a maximum display length")
        .arg(
            Arg::new("max-len")
                .short('m')
                .long("max-len")
                .value_name("N")
                .help("Number of trailing characters to keep (env: ABBREV_MAX_LEN, default: 30)")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Read paths from a file, one per line")
                .value_parser(clap::value_parser!(PathBuf))
                .conflicts_with("paths"),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Print how many paths were shortened to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .help("Paths to abbreviate (reads stdin when none are given)")
                .num_args(0..),
        )
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let max_len = matches.get_one::<i64>("max-len").copied();
    let show_summary = matches.get_flag("summary");

    let source = if let Some(file) = matches.get_one::<PathBuf>("file") {
        PathSource::File(file.clone())
    } else {
        match matches.get_many::<String>("paths") {
            Some(paths) => PathSource::Args(paths.cloned().collect()),
            None => PathSource::Stdin,
        }
    };

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let summary =
        handle_abbreviate_command(AbbreviateArgs { source, max_len }, stdin.lock(), &mut out)?;

    if show_summary {
        eprintln!("{}", summary.generate_summary());
    }

    Ok(())
}
