//! Chart assembly and plain-text layout.
//!
//! A chart is one row per data entry in final order, then `Avg.`, then
//! `Total`. The `Total` bar is drawn as wide as the widest other bar rather
//! than proportional to its value, so it never overflows the scale.

use std::fmt::{self, Display};

use unicode_width::UnicodeWidthStr;

use crate::{
    core::{
        aggregate::Summary,
        constants::{AVG_LABEL, DECIMAL_PRECISION, MIN_VALUE_WIDTH, TOTAL_LABEL},
        data::{DisplayValue, Entry},
        query::{self, ParsedQuery},
    },
    render::bar::{Bar, increment},
};

#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub label: String,
    pub value: f64,
    pub bar: Bar,
}

/// A fully laid out chart; `to_string()` gives the text artifact.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    title: Option<String>,
    rows: Vec<Row>,
    summary: Summary,
    label_width: usize,
    value_width: usize,
}

impl Chart {
    /// Parse a raw query string and lay out its chart.
    #[must_use]
    pub fn from_query(raw: &str) -> Self {
        Self::build(query::parse(raw))
    }

    #[must_use]
    pub fn build(parsed: ParsedQuery) -> Self {
        let ParsedQuery {
            mut entries,
            options,
        } = parsed;

        options.sort.apply(&mut entries);
        let summary = Summary::of(&entries);
        let step = increment(summary.max);

        let mut rows = Vec::with_capacity(entries.len() + 2);
        let mut widest = 0;
        for Entry { label, value } in entries
            .into_iter()
            .chain(std::iter::once(Entry::new(AVG_LABEL, summary.average)))
        {
            let bar = Bar::scaled(value, step);
            widest = widest.max(bar.full());
            rows.push(Row { label, value, bar });
        }
        rows.push(Row {
            label: TOTAL_LABEL.to_owned(),
            value: summary.total,
            bar: Bar::solid(widest),
        });

        let label_width = rows.iter().map(|r| r.label.width()).max().unwrap_or(0);
        let value_width = value_column_width(&rows);

        Self {
            title: options.title,
            rows,
            summary,
            label_width,
            value_width,
        }
    }

    /// Heading printed above the rows, if any.
    #[inline]
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Data rows followed by the `Avg.` and `Total` rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}

/// As soon as one value carries decimals every value is measured with
/// decimals, so `142` takes the room of `142.00`.
#[allow(clippy::float_cmp)]
fn value_column_width(rows: &[Row]) -> usize {
    let fractional = rows.iter().any(|r| r.value != r.value.trunc());
    rows.iter()
        .map(|r| {
            if fractional {
                format!("{:.prec$}", r.value, prec = DECIMAL_PRECISION).len()
            } else {
                DisplayValue(r.value).to_string().len()
            }
        })
        .fold(MIN_VALUE_WIDTH, usize::max)
}

impl Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            write!(f, "{title}\n\n")?;
        }
        for row in &self.rows {
            let pad = self.label_width.saturating_sub(row.label.width());
            let value = DisplayValue(row.value).to_string();
            writeln!(
                f,
                "{}{:pad$} {value:>vw$} {}",
                row.label,
                "",
                row.bar,
                vw = self.value_width,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(q: &str) -> String {
        Chart::from_query(q).to_string()
    }

    const ABC: &str = "\
A       10 ████████████▌
B       20 █████████████████████████
C       15 ██████████████████▊
Avg.    15 ██████████████████▊
Total   45 █████████████████████████
";

    const ABC_ASC: &str = "\
A       10 ████████████▌
C       15 ██████████████████▊
B       20 █████████████████████████
Avg.    15 ██████████████████▊
Total   45 █████████████████████████
";

    const ABC_DESC: &str = "\
B       20 █████████████████████████
C       15 ██████████████████▊
A       10 ████████████▌
Avg.    15 ██████████████████▊
Total   45 █████████████████████████
";

    #[test]
    fn keeps_query_order_without_sort() {
        assert_eq!(render("A=10&B=20&C=15"), ABC);
    }

    #[test]
    fn sorts_ascending() {
        assert_eq!(render("A=10&B=20&C=15&sort=asc"), ABC_ASC);
    }

    #[test]
    fn sorts_descending() {
        assert_eq!(render("A=10&B=20&C=15&sort=desc"), ABC_DESC);
    }

    #[test]
    fn unknown_sort_keeps_query_order() {
        assert_eq!(render("A=10&B=20&C=15&sort=bogus"), ABC);
    }

    #[test]
    fn fractional_average_widens_value_column() {
        let expected = "\
2012       8 ████████▎
2013       6 ██████▎
2014       8 ████████▎
2015      14 ██████████████▌
2016       8 ████████▎
2017       6 ██████▎
2018       0 ▏
2019      24 █████████████████████████
2020      17 █████████████████▋
2021      21 █████████████████████▉
2022      17 █████████████████▋
2023      13 █████████████▌
Avg.   11.83 ████████████▎
Total    142 █████████████████████████
";
        assert_eq!(
            render(
                "2012=8&2013=6&2014=8&2015=14&2016=8&2017=6&2018=0&2019=24&2020=17&2021=21&2022=17&2023=13"
            ),
            expected
        );
    }

    #[test]
    fn encoded_spaces_are_kept_by_default() {
        let expected = "\
Year%202024   10 █████████████████████████
Year%202023    8 ████████████████████
Avg.           9 ██████████████████████▌
Total         18 █████████████████████████
";
        assert_eq!(render("Year%202024=10&Year%202023=8"), expected);
        assert_eq!(render("Year%202024=10&Year%202023=8&spaces=invalid"), expected);
    }

    #[test]
    fn encoded_spaces_are_decoded_on_request() {
        let expected = "\
Year 2024   10 █████████████████████████
Year 2023    8 ████████████████████
Avg.         9 ██████████████████████▌
Total       18 █████████████████████████
";
        assert_eq!(render("Year%202024=10&Year%202023=8&spaces=yes"), expected);
    }

    #[test]
    fn title_is_a_heading_wherever_it_appears() {
        let expected = format!("A descriptive title\n\n{ABC}");
        for q in [
            "A=10&B=20&C=15&title=A descriptive title",
            "A=10&B=20&C=15&title=A%20descriptive%20title",
            "title=A descriptive title&A=10&B=20&C=15",
        ] {
            assert_eq!(render(q), expected, "query {q}");
        }
        assert_eq!(
            render("A=10&B=20&C=15&sort=desc&title=A descriptive title"),
            format!("A descriptive title\n\n{ABC_DESC}")
        );
    }

    #[test]
    fn total_bar_matches_widest_bar() {
        let chart = Chart::from_query("A=10&B=20&C=15");
        let rows = chart.rows();
        let total = rows.last().unwrap();
        assert_eq!(total.label, TOTAL_LABEL);
        assert_eq!(total.bar, Bar::solid(25));
        assert_eq!(rows[1].bar.full(), total.bar.full());
    }

    #[test]
    fn huge_values_keep_total_on_scale() {
        let chart = Chart::from_query("A=1e308&B=1&C=1.7e308");
        for row in chart.rows() {
            assert!(row.bar.full() <= 25, "{} has {} blocks", row.label, row.bar.full());
        }
        assert_eq!(chart.rows().last().unwrap().bar, Bar::solid(25));
    }

    #[test]
    fn negative_zero_ties_with_zero() {
        let chart = Chart::from_query("A=0&B=-0&C=1&sort=asc");
        let labels: Vec<&str> = chart.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["A", "B", "C", "Avg.", "Total"]);
        assert!(chart.to_string().starts_with("A        0 ▏\nB        0 ▏\n"));
    }

    #[test]
    fn no_data_renders_zero_average_and_total() {
        let chart = Chart::from_query("sort=asc&A=x");
        assert_eq!(chart.rows().len(), 2);
        assert_eq!(chart.summary().count, 0);
        assert_eq!(chart.to_string(), "Avg.     0 ▏\nTotal    0 ▏\n");
    }

    #[test]
    fn wide_labels_align_by_display_width() {
        let chart = Chart::from_query("日本=4&B=2");
        let text = chart.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("日本 "));
        assert!(lines[1].starts_with("B     "));
    }
}
