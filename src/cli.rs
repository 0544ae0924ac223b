use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;

use crate::Config;
use crate::error::OcrError;

#[derive(Parser, Debug)]
#[command(
    name = "text-extractor-rust",
    version,
    about = "Recognize text in an image or screen region and print it as JSON"
)]
pub struct Cli {
    /// Image to recognize (png, jpeg, ...)
    pub image_path: Option<String>,

    /// Tesseract language code (default: [ocr] language from settings, "eng")
    pub language: Option<String>,

    /// Select a screen region with the screenshot tool and recognize it
    /// (the only positional argument is then the language)
    #[arg(long = "capture")]
    pub capture: bool,

    /// Print installed tesseract languages and exit
    #[arg(long = "list-languages")]
    pub list_languages: bool,

    /// Check runtime dependencies, print the report as JSON and exit
    #[arg(long = "check")]
    pub check: bool,

    /// Pretty-print the JSON result
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Read extra settings from a local TOML file
    #[arg(short = 'r', long = "read-settings")]
    pub read_settings: Option<String>,

    /// Enable verbose logging (stderr)
    #[arg(long = "verbose")]
    pub verbose: bool,
}

/// Result of reading the command line.
#[derive(Debug)]
pub enum Parsed {
    Cli(Cli),
    /// `--help` / `--version`: print and exit successfully.
    Display(clap::Error),
    /// Anything clap rejects; reported as a usage failure.
    Invalid(clap::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListLanguages,
    Check,
    Recognize(Config),
}

pub fn parse_args<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Parsed::Cli(cli),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Parsed::Display(err)
        }
        Err(err) => Parsed::Invalid(err),
    }
}

impl Cli {
    /// What the invocation asks for. With `--capture` the image comes from the
    /// screen, so a single positional is the language and two are an error.
    pub fn action(&self) -> Result<Action, OcrError> {
        if self.list_languages {
            return Ok(Action::ListLanguages);
        }
        if self.check {
            return Ok(Action::Check);
        }
        if self.capture {
            if self.language.is_some() {
                return Err(OcrError::Usage);
            }
            return Ok(Action::Recognize(Config {
                image_path: None,
                language: self.image_path.clone(),
                capture: true,
                settings_path: self.read_settings.clone(),
            }));
        }
        Ok(Action::Recognize(Config {
            image_path: self.image_path.clone(),
            language: self.language.clone(),
            capture: false,
            settings_path: self.read_settings.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["text-extractor-rust"];
        argv.extend_from_slice(args);
        match parse_args(argv) {
            Parsed::Cli(cli) => cli,
            other => panic!("unexpected parse result: {other:?}"),
        }
    }

    #[test]
    fn image_and_language_positionals() {
        let action = cli(&["shot.png", "deu", "-r", "extra.toml"]).action().unwrap();
        assert_eq!(
            action,
            Action::Recognize(Config {
                image_path: Some("shot.png".to_string()),
                language: Some("deu".to_string()),
                capture: false,
                settings_path: Some("extra.toml".to_string()),
            })
        );
    }

    #[test]
    fn capture_takes_the_positional_as_language() {
        let action = cli(&["--capture", "jpn"]).action().unwrap();
        assert_eq!(
            action,
            Action::Recognize(Config {
                image_path: None,
                language: Some("jpn".to_string()),
                capture: true,
                settings_path: None,
            })
        );
    }

    #[test]
    fn capture_with_image_path_is_usage_error() {
        let err = cli(&["--capture", "a.png", "eng"]).action().unwrap_err();
        assert_eq!(err, OcrError::Usage);
    }

    #[test]
    fn no_arguments_still_parse() {
        let action = cli(&[]).action().unwrap();
        assert_eq!(action, Action::Recognize(Config::default()));
    }

    #[test]
    fn listing_and_check_win_over_recognition() {
        assert_eq!(cli(&["--list-languages"]).action().unwrap(), Action::ListLanguages);
        assert_eq!(cli(&["--check", "shot.png"]).action().unwrap(), Action::Check);
    }

    #[test]
    fn unknown_flag_is_invalid() {
        let parsed = parse_args(["text-extractor-rust", "--no-such-flag"]);
        assert!(matches!(parsed, Parsed::Invalid(_)));
        let parsed = parse_args(["text-extractor-rust", "a.png", "eng", "extra"]);
        assert!(matches!(parsed, Parsed::Invalid(_)));
    }

    #[test]
    fn help_and_version_are_display_only() {
        assert!(matches!(
            parse_args(["text-extractor-rust", "--help"]),
            Parsed::Display(_)
        ));
        assert!(matches!(
            parse_args(["text-extractor-rust", "--version"]),
            Parsed::Display(_)
        ));
    }
}
