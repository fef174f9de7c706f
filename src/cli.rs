use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::app;
use crate::config::FigureConfig;
use crate::data::loader;

pub const USAGE: &str = "Please pass the name of the file.";

/// Plot the orbital phase φ of a two-column `time phi` file.
#[derive(Debug, Parser)]
#[command(name = "phi-plot", version, about)]
pub struct Cli {
    /// Whitespace-delimited text file with time [s] and φ columns.
    #[arg(allow_hyphen_values = true)]
    pub path: Option<PathBuf>,

    /// Extra arguments are accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<OsString>,
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No file was given; the usage line was printed.
    Usage,
    /// The plot window was shown and then closed.
    Shown,
}

/// Run the viewer with the given arguments (program name excluded).
///
/// Argument errors, `--help` and `--version` come back as a [`clap::Error`]
/// for the caller to report.
pub fn run<I, T>(args: I) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv = std::iter::once(OsString::from("phi-plot")).chain(args.into_iter().map(Into::into));
    let cli = Cli::try_parse_from(argv)?;

    let Some(path) = cli.path else {
        println!("{USAGE}");
        return Ok(Outcome::Usage);
    };

    let table = loader::load_file(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    match table.time_span() {
        Some((first, last)) => log::info!(
            "Loaded {} rows from {} (t = {first} .. {last} s)",
            table.len(),
            path.display()
        ),
        None => log::info!("Loaded {} rows from {}", table.len(), path.display()),
    }

    app::show(table, FigureConfig::default())?;
    Ok(Outcome::Shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_argument_prints_usage() {
        let outcome = run(Vec::<String>::new()).unwrap();
        assert_eq!(outcome, Outcome::Usage);
    }

    #[test]
    fn first_argument_is_the_path() {
        let cli = Cli::try_parse_from(["phi-plot", "orbit.txt", "ignored"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("orbit.txt")));
        assert_eq!(cli.rest, vec![OsString::from("ignored")]);
    }

    #[test]
    fn hyphenated_extras_are_ignored() {
        let cli = Cli::try_parse_from(["phi-plot", "f.txt", "--extra", "-v"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("f.txt")));
        assert_eq!(
            cli.rest,
            vec![OsString::from("--extra"), OsString::from("-v")]
        );
    }

    #[test]
    fn path_may_start_with_a_hyphen() {
        let cli = Cli::try_parse_from(["phi-plot", "-data.txt"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("-data.txt")));
        assert!(cli.rest.is_empty());
    }

    #[test]
    fn help_flag_is_still_recognised() {
        let err = Cli::try_parse_from(["phi-plot", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn extras_do_not_stop_the_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1.0").unwrap();
        let err = run([file.path().as_os_str(), std::ffi::OsStr::new("--extra")]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<loader::LoadError>(),
            Some(loader::LoadError::ColumnCount { line: 1, found: 1 })
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = run([path.as_os_str()]).unwrap_err();
        assert!(err.downcast_ref::<loader::LoadError>().is_some());
    }

    #[test]
    fn malformed_file_fails_before_any_window() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0.0 0.0 0.0").unwrap();
        let err = run([file.path().as_os_str()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<loader::LoadError>(),
            Some(loader::LoadError::ColumnCount { line: 1, found: 3 })
        ));
    }
}
