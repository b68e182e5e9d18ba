//! Query-string view exposed by the router.

use std::collections::BTreeMap;

/// Query parameter holding the one-time password reset token.
pub const RESET_TOKEN_PARAM: &str = "resetUrl";

/// Query parameter holding the 1-based product grid page.
pub const PAGE_PARAM: &str = "page";

/// Parsed query parameters of the current route.
///
/// A key may appear more than once; such keys are treated as arrays and
/// never yield a single value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteQuery {
    params: BTreeMap<String, Vec<String>>,
}

impl RouteQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string such as `page=2&resetUrl=abc`.
    ///
    /// A leading `?` is accepted. Keys and values are percent-decoded with
    /// `+` read as a space; pairs without `=` get an empty value.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        form_urlencoded::parse(raw.as_bytes()).fold(Self::new(), |query, (key, value)| {
            query.with(key, value)
        })
    }

    /// Add a value for `key`, keeping any existing values.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.entry(key.into()).or_default().push(value.into());
    }

    /// Builder-style variant of [`append`](Self::append).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(key, value);
        self
    }

    /// The value of `key` when it was given exactly once.
    pub fn single(&self, key: &str) -> Option<&str> {
        match self.params.get(key).map(Vec::as_slice) {
            Some([value]) => Some(value.as_str()),
            _ => None,
        }
    }

    /// The non-empty reset token, if the route carries one.
    pub fn reset_token(&self) -> Option<&str> {
        self.single(RESET_TOKEN_PARAM).filter(|token| !token.is_empty())
    }

    /// The requested grid page. Anything missing, repeated, unparsable or
    /// below 1 resolves to the first page.
    pub fn page(&self) -> usize {
        self.single(PAGE_PARAM)
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
