use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "barchar",
    version,
    about = "Horizontal bar charts from ordered query parameters"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a chart from a query string like `A=10&B=20&sort=desc`
    Render(RenderArgs),
    /// Print the example queries
    Examples(ExamplesArgs),
}

/// Output format for `render`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Format {
    /// Text, unless a browser-like user agent is given
    #[default]
    Auto,
    Text,
    Html,
}

/// `barchar render …`
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Raw query string or URL (use `-` for stdin); empty renders filler data.
    /// Falls back to `QUERY_STRING`, taken verbatim.
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// User agent deciding between text and HTML in `auto` format
    #[arg(long, env = "HTTP_USER_AGENT")]
    pub user_agent: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Auto)]
    pub format: Format,

    /// Seed for filler data (time based if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Base URL for links on the HTML page
    #[arg(long, env = "BARCHAR_BASE_URL", default_value = "/")]
    pub base_url: String,

    /// Prefix the body with a CGI `Content-Type` header block
    #[arg(long)]
    pub cgi: bool,

    /// Emit parse and timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// `barchar examples …`
#[derive(Args, Debug)]
pub struct ExamplesArgs {
    /// Base URL the example links point at
    #[arg(long, env = "BARCHAR_BASE_URL", default_value = "/")]
    pub base_url: String,
}

impl Cli {
    /// `--debug` on `render` forces debug logging.
    #[must_use]
    pub fn debug(&self) -> bool {
        matches!(&self.cmd, Command::Render(a) if a.debug)
    }
}
