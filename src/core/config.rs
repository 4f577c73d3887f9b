//! Per-chart options taken from the control parameters + fluent builder.

/// Row ordering selected by the `sort` control parameter.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortOrder {
    /// Keep the order the labels appeared in the query.
    #[default]
    Original,
    Ascending,
    Descending,
}

impl SortOrder {
    /// `asc` and `desc` are recognised; every other value keeps query order.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value {
            "asc" => Self::Ascending,
            "desc" => Self::Descending,
            _ => Self::Original,
        }
    }
}

/// Immutable options handed to the chart builder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartOptions {
    pub sort: SortOrder,
    /// Replace `%20` and `+` in labels with literal spaces.
    pub decode_spaces: bool,
    pub title: Option<String>,
}

impl ChartOptions {
    #[inline]
    #[must_use]
    pub fn builder() -> ChartOptionsBuilder {
        ChartOptionsBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ChartOptionsBuilder {
    sort: Option<SortOrder>,
    decode_spaces: bool,
    title: Option<String>,
}

impl ChartOptionsBuilder {
    #[inline]
    #[must_use]
    pub fn sort(mut self, s: SortOrder) -> Self {
        self.sort = Some(s);
        self
    }
    #[inline]
    #[must_use]
    pub fn decode_spaces(mut self, yes: bool) -> Self {
        self.decode_spaces = yes;
        self
    }
    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }

    /// Empty titles are dropped so no blank heading gets rendered.
    #[must_use]
    pub fn build(self) -> ChartOptions {
        ChartOptions {
            sort: self.sort.unwrap_or_default(),
            decode_spaces: self.decode_spaces,
            title: self.title.filter(|t| !t.is_empty()),
        }
    }
}
