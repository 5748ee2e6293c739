use crate::domain::model::Command;
use clap::{ArgGroup, Parser};
use std::ffi::OsString;

#[derive(Debug, Clone, Parser)]
#[command(about = "Decode a cipher string or every line of a file")]
#[command(group(ArgGroup::new("input").required(true).args(["file", "string"])))]
pub struct CliArgs {
    /// Decode every line of the file at this path
    #[arg(short = 'f', value_name = "PATH", allow_hyphen_values = true)]
    pub file: Option<String>,

    /// Decode a single literal string
    #[arg(short = 's', value_name = "CIPHERTEXT", allow_hyphen_values = true)]
    pub string: Option<String>,
}

impl From<CliArgs> for Command {
    fn from(args: CliArgs) -> Self {
        match (args.file, args.string) {
            (Some(path), None) => Command::SolveFile(path),
            (None, Some(text)) => Command::SolveString(text),
            _ => Command::Undefined,
        }
    }
}

impl Command {
    /// Exactly `-f <path>` or `-s <text>`; anything else is `Undefined`.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 3 {
            tracing::debug!("Expected 2 arguments, got {}", args.len().saturating_sub(1));
            return Command::Undefined;
        }

        match CliArgs::try_parse_from(args) {
            Ok(parsed) => parsed.into(),
            Err(e) => {
                tracing::debug!("Unrecognized arguments: {}", e.kind());
                Command::Undefined
            }
        }
    }
}
