//! Illustrative data for requests that carry no parameters.

use std::borrow::Cow;

use log::debug;

use crate::core::{
    constants::{FILLER_MAX, FILLER_ROWS, MONTHS},
    query::is_blank,
    rng::NumberSource,
};

/// Six distinct months with values in `0..=100`, encoded as a query string
/// sorted by month name.
pub fn filler_query<S: NumberSource + ?Sized>(source: &mut S) -> String {
    let mut picked: Vec<(&str, u32)> = Vec::with_capacity(FILLER_ROWS);
    while picked.len() < FILLER_ROWS {
        #[allow(clippy::cast_possible_truncation)]
        let month = MONTHS[source.below(MONTHS.len() as u32) as usize];
        if picked.iter().any(|(m, _)| *m == month) {
            continue;
        }
        picked.push((month, source.below(FILLER_MAX + 1)));
    }
    picked.sort_unstable_by_key(|(m, _)| *m);

    picked
        .iter()
        .map(|(m, v)| format!("{m}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Hand back `raw` untouched, or a filler query when it is blank.
pub fn fill_if_blank<'a, S: NumberSource + ?Sized>(raw: &'a str, source: &mut S) -> Cow<'a, str> {
    if is_blank(raw) {
        let q = filler_query(source);
        debug!("blank query, generated filler: {q}");
        Cow::Owned(q)
    } else {
        Cow::Borrowed(raw)
    }
}
