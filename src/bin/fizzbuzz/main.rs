use core::ops::RangeInclusive;
use std::io::{self, Write};
use std::{fs, path::Path, path::PathBuf};

use fizz_buzz::filter::{Filter, FilterError, Format, Policy};

use clap::ArgMatches;
use quick_error::quick_error;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, PartialEq)]
struct Options {
    /// A version number for the configuration.
    ///
    /// Always 1.
    version: u64,
    /// Stop at the first line that is not an integer, instead of writing an empty line for it.
    #[serde(default)]
    strict: Option<bool>,
    /// The output format. Text when not provided.
    #[serde(default)]
    format: Option<OutputFormat>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
enum OutputFormat {
    Text,
    Json,
}

/// Everything `main` needs to know after merging flags into the configuration.
#[derive(Debug)]
struct Settings {
    filter: Filter,
    /// Print this range instead of filtering stdin.
    range: Option<RangeInclusive<i64>>,
}

quick_error! {
    #[derive(Debug)]
    pub enum OptionsError {
        UnsupportedVersion (version: u64) {
            display("unsupported configuration version {}", version)
        }
        EmptyRange (from: i64, to: i64) {
            display("empty range, {} is after {}", from, to)
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        BadOptions (err: OptionsError) {
            from()
            display("{}", err)
        }
        Filter (err: FilterError) {
            from()
            display("{}", err)
        }
        Config (err: serde_json::Error) {
            from()
            display("bad configuration: {}", err)
        }
        Io (err: std::io::Error) {
            from()
            display("{}", err)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = closed_output_is_done(run()) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn command() -> clap::Command {
    clap::command!()
        .arg(
            clap::arg!(
                -c --config <FILE> "A json configuration file"
            )
            .required(false)
            .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(clap::arg!(--strict "Fail on the first line that is not an integer"))
        .arg(
            clap::arg!(--lenient "Write an empty line for lines that are not integers")
                .conflicts_with("strict"),
        )
        .arg(clap::arg!(--json "Write one json record per line"))
        .arg(clap::arg!(--text "Write the bare classification per line").conflicts_with("json"))
        .arg(
            clap::arg!(--from <N> "First number of the range to print, 1 by default")
                .required(false)
                .requires("to")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            clap::arg!(--to <N> "Print the range up to and including this number instead of reading stdin")
                .required(false)
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
}

fn run() -> Result<(), Error> {
    let matches = command().get_matches();

    let options = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_options(path)?,
        None => Options {
            version: 1,
            ..Options::default()
        },
    };

    let settings = settings(&matches, &options)?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    if let Some(range) = settings.range {
        return Ok(print_range(&settings.filter, &mut stdout, range)?);
    }

    let stdin = io::stdin();
    let summary = settings.filter.run(stdin.lock(), stdout)?;

    if summary.rejected > 0 {
        log::warn!(
            "{} of {} lines were not integers",
            summary.rejected,
            summary.lines
        );
    }

    Ok(())
}

/// Merge the command line into the configuration file, flags win.
fn settings(matches: &ArgMatches, options: &Options) -> Result<Settings, OptionsError> {
    let strict = if matches.get_flag("strict") {
        true
    } else if matches.get_flag("lenient") {
        false
    } else {
        options.strict.unwrap_or(false)
    };

    let format = if matches.get_flag("json") {
        OutputFormat::Json
    } else if matches.get_flag("text") {
        OutputFormat::Text
    } else {
        options.format.unwrap_or(OutputFormat::Text)
    };

    let filter = Filter {
        policy: if strict { Policy::Strict } else { Policy::Lenient },
        format: match format {
            OutputFormat::Text => Format::Text,
            OutputFormat::Json => Format::Json,
        },
    };

    let range = match matches.get_one::<i64>("to") {
        Some(&to) => {
            let from = matches.get_one::<i64>("from").copied().unwrap_or(1);

            if from > to {
                return Err(OptionsError::EmptyRange(from, to));
            }

            Some(from..=to)
        }
        None => None,
    };

    Ok(Settings { filter, range })
}

fn print_range<W: Write>(
    filter: &Filter,
    output: &mut W,
    range: RangeInclusive<i64>,
) -> io::Result<()> {
    for record in fizz_buzz::range(*range.start(), *range.end()) {
        filter.write_record(output, record)?;
    }

    output.flush()
}

/// The reader of our output went away, e.g. `head`. That ends the run but is no failure.
fn closed_output_is_done(result: Result<(), Error>) -> Result<(), Error> {
    match result {
        Err(Error::Io(err)) | Err(Error::Filter(FilterError::Io(err)))
            if err.kind() == io::ErrorKind::BrokenPipe =>
        {
            Ok(())
        }
        other => other,
    }
}

fn load_options(path: &Path) -> Result<Options, Error> {
    let file = fs::File::open(path)?;
    let options: Options = serde_json::de::from_reader(io::BufReader::new(file))?;

    if options.version != 1 {
        return Err(OptionsError::UnsupportedVersion(options.version))?;
    }

    Ok(options)
}
