use clap::Parser;
use clap::ValueEnum;
use clap::builder::FalseyValueParser;

use crate::adapters::OutputFormat;
use crate::usecases::OverlapPolicy;

const LONG_ABOUT: &str = "\
Show an 8x8 grayscale digit fetched from a digit server.\n\
\n\
The server must answer GET /digit with {\"pixels\": [64 integers], \"target\": \"...\"}.\n\
Endpoint defaults come from DIGIT_GRID_HOST, DIGIT_GRID_PORT, DIGIT_GRID_PATH and\n\
DIGIT_GRID_TIMEOUT_MS; flags override them.";

const AFTER_LONG_HELP: &str = r#"KEYS (interactive view):
    r, Enter, Space   Fetch a new digit
    q, Esc, Ctrl-C    Quit

OVERLAP POLICIES:
    completion   Responses are drawn as they arrive; the last to arrive wins
    latest       Responses older than the one on screen are dropped

EXAMPLES:
    digit-grid
    digit-grid --host 10.0.0.5 --port 9000
    digit-grid --once --format json
    DIGIT_GRID_LOG=/tmp/digit-grid.log RUST_LOG=debug digit-grid"#;

#[derive(Parser, Debug)]
#[command(name = "digit-grid")]
#[command(author, version)]
#[command(about = "Terminal viewer for 8x8 grayscale digits")]
#[command(long_about = LONG_ABOUT)]
#[command(after_long_help = AFTER_LONG_HELP)]
pub struct Cli {
    /// Digit server host
    #[arg(long, value_name = "HOST", help_heading = "Endpoint Options")]
    pub host: Option<String>,

    /// Digit server port
    #[arg(long, value_name = "PORT", help_heading = "Endpoint Options")]
    pub port: Option<u16>,

    /// Request path on the digit server
    #[arg(long, value_name = "PATH", help_heading = "Endpoint Options")]
    pub path: Option<String>,

    /// Request timeout in milliseconds (0 waits forever)
    #[arg(long, value_name = "MS", help_heading = "Endpoint Options")]
    pub timeout_ms: Option<u64>,

    /// How overlapping refreshes are ordered
    #[arg(
        long,
        value_enum,
        value_name = "POLICY",
        default_value_t = PolicyArg::Completion
    )]
    pub policy: PolicyArg,

    /// Fetch one digit, print it and exit
    #[arg(long)]
    pub once: bool,

    /// Output format for --once and errors (text or json)
    #[arg(
        short,
        long,
        value_enum,
        value_name = "FORMAT",
        default_value_t = OutputFormat::Text,
        help_heading = "Output Options"
    )]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long, help_heading = "Output Options")]
    pub json: bool,

    /// Disable colored output (also respects NO_COLOR)
    #[arg(
        long,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help_heading = "Output Options"
    )]
    pub no_color: bool,

    /// Log at debug level
    #[arg(short, long, help_heading = "Debug Options")]
    pub verbose: bool,
}

impl Cli {
    pub fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum PolicyArg {
    Completion,
    Latest,
}

impl From<PolicyArg> for OverlapPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Completion => OverlapPolicy::Completion,
            PolicyArg::Latest => OverlapPolicy::Latest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["digit-grid"]).unwrap();
        assert!(!cli.once);
        assert_eq!(cli.host, None);
        assert_eq!(OverlapPolicy::from(cli.policy), OverlapPolicy::Completion);
        assert_eq!(cli.effective_format(), OutputFormat::Text);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_endpoint_flags() {
        let cli = Cli::try_parse_from([
            "digit-grid",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--timeout-ms",
            "0",
            "--policy",
            "latest",
            "--once",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.timeout_ms, Some(0));
        assert_eq!(OverlapPolicy::from(cli.policy), OverlapPolicy::Latest);
        assert!(cli.once);
        assert_eq!(cli.effective_format(), OutputFormat::Json);
    }

    #[test]
    fn test_no_color_flag() {
        let cli = Cli::try_parse_from(["digit-grid", "--no-color"]).unwrap();
        assert!(cli.no_color);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["digit-grid", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["digit-grid", "--policy", "newest"]).is_err());
    }
}
