use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use charwidth_engine::{Category, NormalizeOptions, Normalizer};
use clap::Parser;
use tracing::debug;

use crate::settings::Settings;

/// charwidth: normalize Unicode fullwidth/halfwidth (zenkaku/hankaku) characters.
#[derive(Parser, Debug)]
#[command(name = "charwidth", version)]
#[command(about = "Normalize Unicode fullwidth/halfwidth (zenkaku/hankaku) characters")]
pub struct Cli {
    /// Input files (reads stdin when omitted)
    pub files: Vec<PathBuf>,

    /// Fold only these categories (comma separated)
    #[arg(long, value_delimiter = ',', value_name = "TYPES")]
    pub only: Option<Vec<String>>,

    /// Leave these categories untouched (comma separated)
    #[arg(long, value_delimiter = ',', value_name = "TYPES")]
    pub except: Option<Vec<String>>,

    /// Rewrite each file instead of printing to stdout
    #[arg(short, long, requires = "files")]
    pub in_place: bool,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the available categories and exit
    #[arg(long)]
    pub list_types: bool,
}

impl Cli {
    /// Options from `--only`/`--except`, or from settings when neither flag is given.
    pub fn normalize_options(&self, settings: &Settings) -> Result<NormalizeOptions> {
        let mut pairs = Vec::new();
        if let Some(only) = &self.only {
            pairs.push(("only", only.as_slice()));
        }
        if let Some(except) = &self.except {
            pairs.push(("except", except.as_slice()));
        }

        if pairs.is_empty() {
            return Ok(settings.normalize.clone());
        }
        Ok(NormalizeOptions::from_pairs(pairs)?)
    }

    fn settings(&self) -> Result<Settings> {
        match &self.config {
            Some(path) => Settings::load_from(path),
            None => Settings::load(),
        }
    }
}

/// Run the command, reading stdin and writing stdout when no files are given.
pub fn run(cli: &Cli, stdin: impl Read, mut stdout: impl Write) -> Result<()> {
    if cli.list_types {
        for category in Category::ALL {
            writeln!(stdout, "{}", category)?;
        }
        return Ok(());
    }

    let settings = cli.settings()?;
    let options = cli.normalize_options(&settings)?;
    let normalizer = Normalizer::new(&options);
    debug!("Normalizing with {:?}", normalizer.categories());

    if cli.files.is_empty() {
        let text = read_all(stdin).context("failed to read stdin")?;
        stdout.write_all(normalizer.normalize(&text).as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    for path in &cli.files {
        let mut text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        if cli.in_place {
            let original_len = text.len();
            normalizer.normalize_in_place(&mut text);
            fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!(
                "Rewrote {:?} ({} -> {} bytes)",
                path,
                original_len,
                text.len()
            );
        } else {
            stdout.write_all(normalizer.normalize(&text).as_bytes())?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn read_all(mut reader: impl Read) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("charwidth").chain(args.iter().copied()))
    }

    fn empty_config() -> NamedTempFile {
        NamedTempFile::new().unwrap()
    }

    fn run_stdin(cli: &Cli, input: &str) -> Result<String> {
        let mut out = Vec::new();
        run(cli, Cursor::new(input.as_bytes()), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_stdin_default() {
        let config = empty_config();
        let cli = parse(&["--config", config.path().to_str().unwrap()]);
        let out = run_stdin(&cli, "Ｒｕｓｔ　ｶﾞｲﾄﾞ\n").unwrap();
        assert_eq!(out, "Rust ガイド\n");
    }

    #[test]
    fn test_only_flag() {
        let config = empty_config();
        let cli = parse(&[
            "--config",
            config.path().to_str().unwrap(),
            "--only",
            "space,katakana",
        ]);
        let out = run_stdin(&cli, "ＡＢ　ｱｲ").unwrap();
        assert_eq!(out, "ＡＢ アイ");
    }

    #[test]
    fn test_except_flag() {
        let config = empty_config();
        let cli = parse(&[
            "--config",
            config.path().to_str().unwrap(),
            "--except",
            "space",
        ]);
        let out = run_stdin(&cli, "ＡＢ　ｱｲ").unwrap();
        assert_eq!(out, "AB　アイ");
    }

    #[test]
    fn test_flags_override_settings() {
        let mut config = NamedTempFile::new().unwrap();
        writeln!(config, "[normalize]\nonly = [\"space\"]").unwrap();
        let path = config.path().to_str().unwrap();

        let cli = parse(&["--config", path]);
        assert_eq!(run_stdin(&cli, "Ａ　").unwrap(), "Ａ ");

        let cli = parse(&["--config", path, "--only", "ascii"]);
        assert_eq!(run_stdin(&cli, "Ａ　").unwrap(), "A　");
    }

    #[test]
    fn test_unknown_type_is_reported() {
        let config = empty_config();
        let cli = parse(&[
            "--config",
            config.path().to_str().unwrap(),
            "--only",
            "ascii,bogus",
        ]);
        let err = run_stdin(&cli, "Ａ").unwrap_err();
        assert_eq!(err.to_string(), "unexpected normalize type(s): [\"bogus\"]");
    }

    #[test]
    fn test_in_place() {
        let config = empty_config();
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "ﾃﾞｰﾀ１２３").unwrap();

        let cli = parse(&[
            "--config",
            config.path().to_str().unwrap(),
            "-i",
            input.path().to_str().unwrap(),
        ]);
        let out = run_stdin(&cli, "").unwrap();
        assert!(out.is_empty());
        assert_eq!(fs::read_to_string(input.path()).unwrap(), "データ123");
    }

    #[test]
    fn test_files_to_stdout_leave_files_untouched() {
        let config = empty_config();
        let mut first = NamedTempFile::new().unwrap();
        let mut second = NamedTempFile::new().unwrap();
        write!(first, "ｱ").unwrap();
        write!(second, "Ｂ").unwrap();

        let cli = parse(&[
            "--config",
            config.path().to_str().unwrap(),
            first.path().to_str().unwrap(),
            second.path().to_str().unwrap(),
        ]);
        assert_eq!(run_stdin(&cli, "").unwrap(), "アB");
        assert_eq!(fs::read_to_string(first.path()).unwrap(), "ｱ");
    }

    #[test]
    fn test_in_place_requires_files() {
        let result = Cli::try_parse_from(["charwidth", "--in-place"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_types() {
        let cli = parse(&["--list-types"]);
        let out = run_stdin(&cli, "").unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "ascii");
        assert_eq!(lines[5], "latin_1_punctuation_and_symbols");
        assert_eq!(lines[7], "space");
    }
}
