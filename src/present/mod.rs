//! Caller-side presentation: plain text for command-line clients, a small
//! HTML page for browsers. The chart itself never contains markup; this layer
//! only wraps the finished text.

pub mod examples;

use std::fmt::Write;

use crate::core::error::ConfigError;

pub use examples::{EXAMPLES, ExampleQuery};

const PAGE_TITLE: &str = "barchar";

/// Response body shape.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shape {
    Text,
    Html,
}

impl Shape {
    /// `curl` and `Wget` get the bare chart, everything else a page.
    #[must_use]
    pub fn from_user_agent(agent: &str) -> Self {
        if agent.starts_with("curl") || agent.starts_with("Wget") {
            Self::Text
        } else {
            Self::Html
        }
    }

    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Html => "text/html; charset=utf-8",
        }
    }
}

/// Where the page and its example links point.
#[derive(Clone, Debug)]
pub struct PageConfig {
    base_url: String,
}

impl PageConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if base_url.contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }
        Ok(Self { base_url })
    }

    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Link that reproduces the chart for `query`.
    #[must_use]
    pub fn chart_url(&self, query: &str) -> String {
        format!("{}?{query}", self.base_url)
    }
}

/// Full HTML document around `chart`.
#[must_use]
pub fn page(chart: &str, heading: Option<&str>, chart_url: &str, config: &PageConfig) -> String {
    let title = html_escape(heading.unwrap_or(PAGE_TITLE));
    let chart = html_escape(chart);
    let url = html_escape(chart_url);

    let mut out = String::with_capacity(chart.len() + 2048);
    out.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n\t<meta charset=\"utf-8\">\n\
         \t<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    let _ = writeln!(out, "\t<title>{title}</title>");
    out.push_str(STYLE);
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "\t<h1>{PAGE_TITLE}</h1>");
    out.push_str(
        "\t<p>Bar charts generated from nothing but query parameters.</p>\n\t<hr />\n",
    );
    let _ = writeln!(out, "\t<pre>{chart}</pre>");
    out.push_str("\t<hr>\n");
    let _ = writeln!(
        out,
        "\t<p>Link used to generate the current chart: <a href=\"{url}\">{url}</a></p>"
    );
    out.push_str(&example_list(config));
    out.push_str("</body>\n</html>\n");
    out
}

/// "More example queries" section.
#[must_use]
pub fn example_list(config: &PageConfig) -> String {
    let mut out = String::from("\t<hr/>\n\t<p>More example queries:</p>\n\t<ul>\n");
    for ex in &EXAMPLES {
        let _ = writeln!(
            out,
            "\t\t<li><a href=\"{}\">{}</a></li>",
            html_escape(&ex.link(config.base_url())),
            html_escape(ex.title)
        );
    }
    out.push_str("\t</ul>\n");
    out
}

const STYLE: &str = "\t<style>
\t\t* { box-sizing: border-box; }
\t\tbody { font-family: sans-serif; line-height: 1.33; margin: 0 auto; max-width: 650px; padding: 1rem; }
\t\tpre { overflow: auto; user-select: all; }
\t\ta { word-break: break-all; }
\t</style>
";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
