//! Order-preserving query string parser.
//!
//! Decoded query maps lose the order parameters appeared in, so the raw
//! string is tokenized directly: split on `&`, then on the first `=`.
//! Control keys (`sort`, `spaces`, `title`) configure the chart; every other
//! pair is a data row whose value must parse as a number, otherwise the pair
//! is dropped without complaint.

use std::borrow::Cow;

use log::{debug, trace};

use crate::core::{
    config::{ChartOptions, SortOrder},
    data::{Entry, parse_value},
};

const SORT_KEY: &str = "sort";
const SPACES_KEY: &str = "spaces";
const TITLE_KEY: &str = "title";

/// Entries in query order plus the options taken from control parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedQuery {
    pub entries: Vec<Entry>,
    pub options: ChartOptions,
}

/// True when the query carries no parameters at all.
#[inline]
#[must_use]
pub fn is_blank(raw: &str) -> bool {
    raw.split('&').all(str::is_empty)
}

/// Parse a raw, undecoded query string.
///
/// The first occurrence of each control key wins; repeats are ignored but
/// still kept out of the data rows.
#[must_use]
pub fn parse(raw: &str) -> ParsedQuery {
    let mut sort = None;
    let mut spaces = None;
    let mut title = None;
    let mut candidates = Vec::new();

    for token in raw.split('&').filter(|t| !t.is_empty()) {
        let Some((key, value)) = token.split_once('=') else {
            trace!("dropping token without value: {token:?}");
            continue;
        };
        match key {
            SORT_KEY => {
                sort.get_or_insert(value);
            }
            SPACES_KEY => {
                spaces.get_or_insert(value);
            }
            TITLE_KEY => {
                title.get_or_insert(value);
            }
            _ => candidates.push((key, value)),
        }
    }

    let decode_spaces = spaces == Some("yes");
    let mut options = ChartOptions::builder()
        .sort(sort.map_or(SortOrder::Original, SortOrder::from_param))
        .decode_spaces(decode_spaces);
    if let Some(t) = title {
        options = options.title(decode_title(t));
    }

    let entries: Vec<Entry> = candidates
        .into_iter()
        .filter_map(|(key, value)| match parse_value(value) {
            Some(v) => {
                let label = if decode_spaces {
                    decode_label_spaces(key)
                } else {
                    Cow::Borrowed(key)
                };
                Some(Entry::new(label, v))
            }
            None => {
                trace!("dropping non-numeric value {value:?} for {key:?}");
                None
            }
        })
        .collect();

    let options = options.build();
    debug!(
        "parsed {} data entries (sort {:?}, spaces {}, title {})",
        entries.len(),
        options.sort,
        options.decode_spaces,
        options.title.is_some()
    );
    ParsedQuery { entries, options }
}

/// `%20` and `+` both stand for a space in a query string.
fn decode_label_spaces(label: &str) -> Cow<'_, str> {
    if label.contains("%20") || label.contains('+') {
        Cow::Owned(label.replace("%20", " ").replace('+', " "))
    } else {
        Cow::Borrowed(label)
    }
}

/// Titles are percent-decoded; malformed escapes leave the text untouched.
fn decode_title(title: &str) -> String {
    urlencoding::decode(title).map_or_else(|_| title.to_owned(), Cow::into_owned)
}
