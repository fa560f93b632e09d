use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "lss")]
#[command(about = "List directory contents as file sequences", long_about = None)]
#[command(version)]
pub struct Args {
    /// Directories to list
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Set logging level to debug and trace every sibling comparison
    #[arg(short, long)]
    pub debug: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Append the missing frames to each plain-text line
    #[arg(long)]
    pub missing: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_directory() {
        let args = Args::parse_from(["lss"]);
        assert_eq!(args.paths, vec![PathBuf::from(".")]);
        assert!(!args.debug);
        assert_eq!(args.format, OutputFormat::Plain);
        assert!(!args.missing);
    }

    #[test]
    fn parses_flags_and_paths() {
        let args = Args::parse_from(["lss", "-d", "--format", "json", "shots", "plates"]);
        assert!(args.debug);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.paths, vec![PathBuf::from("shots"), PathBuf::from("plates")]);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Args::try_parse_from(["lss", "--format", "xml"]).is_err());
    }
}
