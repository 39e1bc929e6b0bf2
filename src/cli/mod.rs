// CLI module for gemtranslate
// Author: kelexine (https://github.com/kelexine)

use crate::languages;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

/// gemtranslate - Structured multilingual translation over the Gemini API
#[derive(Parser, Debug)]
#[command(name = "gemtranslate", version, about, long_about = None)]
pub struct Args {
    /// Gemini API key (overrides the config file)
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to a config file (default: ~/.gemtranslate/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate text, or OCR/describe an image, and print the result as JSON
    Translate {
        /// Text to translate
        #[arg(required_unless_present = "image")]
        text: Option<String>,

        /// Target language code, e.g. `es`
        #[arg(short, long, default_value = "en")]
        target: String,

        /// Image file to analyze instead of text
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List supported target languages
    Languages,

    /// Run the HTTP translation service
    Serve {
        /// Override the configured bind port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Check a `--target` code against the supported languages.
///
/// Unknown codes are warned about and still sent as-is. Returns whether the
/// code is supported.
pub fn check_target_language(code: &str) -> bool {
    if languages::lookup(code).is_some() {
        return true;
    }
    warn!(
        "Target language '{}' is not a supported code (see `gemtranslate languages`), sending as-is",
        code.trim()
    );
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_target_language() {
        assert!(check_target_language("es"));
        assert!(check_target_language(" FR "));
        assert!(!check_target_language("tlh"));
        assert!(!check_target_language(""));
    }

    #[test]
    fn test_parse_translate() {
        let args = Args::try_parse_from(["gemtranslate", "translate", "hello", "-t", "es"]).unwrap();
        match args.command {
            Command::Translate { text, target, image, pretty } => {
                assert_eq!(text.as_deref(), Some("hello"));
                assert_eq!(target, "es");
                assert!(image.is_none());
                assert!(!pretty);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_translate_requires_text_or_image() {
        assert!(Args::try_parse_from(["gemtranslate", "translate"]).is_err());
        assert!(Args::try_parse_from(["gemtranslate", "translate", "--image", "photo.png"]).is_ok());
    }
}
