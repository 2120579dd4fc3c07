//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Extract all hyperlinks from the website source code after JavaScript
/// has run.
#[derive(Parser, Debug)]
#[command(
    name = "linkseeker",
    version,
    about = "Extract all hyperlinks from the rendered source of a web page"
)]
pub struct Cli {
    /// Target website URL.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output file for extracted links (default: extracted_links.txt).
    #[arg(short, long, value_name = "FILENAME")]
    pub output: Option<PathBuf>,

    /// Print extracted links to the console.
    #[arg(short, long)]
    pub print: bool,

    /// Do not print the banner.
    #[arg(short, long)]
    pub quiet: bool,

    /// Render timeout in milliseconds (overrides configuration).
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_required() {
        let result = Cli::try_parse_from(["linkseeker"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["linkseeker", "https://example.com"]).unwrap();
        assert_eq!(cli.url, "https://example.com");
        assert!(cli.output.is_none());
        assert!(!cli.print);
        assert!(!cli.quiet);
        assert!(cli.timeout_ms.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "linkseeker",
            "https://example.com",
            "-o",
            "out.txt",
            "-p",
            "-q",
            "--timeout-ms",
            "5000",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert!(cli.print);
        assert!(cli.quiet);
        assert_eq!(cli.timeout_ms, Some(5000));
    }
}
