use std::{
    env,
    io::{self, Read, Write},
    time::Instant,
};

use log::{debug, info};

use crate::{
    core::{error::BarcharError, filler::fill_if_blank, query, rng::Lcg},
    present::{self, EXAMPLES, PageConfig, Shape},
    render::Chart,
};

use super::parse::{ExamplesArgs, Format, RenderArgs};

/// CGI hands the undecoded query over in this variable.
const QUERY_STRING_VAR: &str = "QUERY_STRING";

pub fn render(a: RenderArgs) -> Result<(), BarcharError> {
    let started = Instant::now();
    let page_cfg = PageConfig::new(a.base_url)?;

    let raw = match a.query.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            strip_to_query(buf.trim_end_matches(['\r', '\n'])).to_owned()
        }
        Some(arg) => strip_to_query(arg).to_owned(),
        None => env::var(QUERY_STRING_VAR).unwrap_or_default(),
    };

    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let resolved = fill_if_blank(&raw, &mut rng);
    let parsed = query::parse(&resolved);
    let chart = Chart::build(parsed);
    let text = chart.to_string();

    let shape = match a.format {
        Format::Text => Shape::Text,
        Format::Html => Shape::Html,
        Format::Auto => a
            .user_agent
            .as_deref()
            .map_or(Shape::Text, Shape::from_user_agent),
    };
    debug!("rendering {} rows as {shape:?}", chart.rows().len());

    let body = match shape {
        Shape::Text => text,
        Shape::Html => present::page(
            &text,
            chart.title(),
            &page_cfg.chart_url(&resolved),
            &page_cfg,
        ),
    };

    let mut out = io::stdout().lock();
    if a.cgi {
        write!(out, "Content-Type: {}\r\n\r\n", shape.content_type())?;
    }
    out.write_all(body.as_bytes())?;
    out.flush()?;

    info!("completed in: {:?}", started.elapsed());
    Ok(())
}

/// Print every example as a title line and its link.
pub fn examples(a: ExamplesArgs) -> Result<(), BarcharError> {
    let cfg = PageConfig::new(a.base_url)?;
    let mut out = io::stdout().lock();
    for ex in &EXAMPLES {
        writeln!(out, "{}\n  {}\n", ex.title, ex.link(cfg.base_url()))?;
    }
    Ok(())
}

/// Accept a full URL as well as a bare query. Only URLs (`scheme://`, `/path`
/// or `?query`) lose their prefix and `#fragment`; a bare query is returned
/// as is, `?` and `#` in values included.
fn strip_to_query(raw: &str) -> &str {
    let is_url = raw.contains("://") || raw.starts_with(['/', '?']);
    if !is_url {
        return raw;
    }
    let query = raw.split_once('?').map_or("", |(_, q)| q);
    query.split_once('#').map_or(query, |(q, _)| q)
}
