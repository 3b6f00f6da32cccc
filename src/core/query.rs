use url::Url;

/// Name of the continuation-token query parameter.
pub const PAGINATION_KEY: &str = "pagination_key";

/// An ordered set of query parameters for one request.
///
/// Setting a name that is already present replaces its value in place, so the
/// parameter order is the order of first insertion. Empty values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// An empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Set `name` to `value`, replacing any previous value. An empty value removes the
    /// parameter instead.
    ///
    /// `pagination_key` is reserved for the pagination driver and is ignored here.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if name == PAGINATION_KEY {
            return;
        }
        self.put(name, value.into());
    }

    /// Builder-style [`Query::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// The value currently set for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `name` carries a (non-empty) value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The continuation token, if one is set.
    #[must_use]
    pub fn pagination_key(&self) -> Option<&str> {
        self.get(PAGINATION_KEY)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overwrite the continuation token. The token is stored verbatim.
    pub(crate) fn set_pagination_key(&mut self, token: Option<&str>) {
        match token {
            Some(t) => self.put(PAGINATION_KEY.to_string(), t.to_string()),
            None => self.pairs.retain(|(k, _)| k != PAGINATION_KEY),
        }
    }

    pub(crate) fn append_to(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            return;
        }
        let mut qp = url.query_pairs_mut();
        for (k, v) in &self.pairs {
            qp.append_pair(k, v);
        }
    }

    fn put(&mut self, name: String, value: String) {
        if value.is_empty() {
            self.pairs.retain(|(k, _)| *k != name);
            return;
        }
        match self.pairs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((name, value)),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut q = Self::new();
        for (k, v) in iter {
            q.set(k, v);
        }
        q
    }
}
