//! Call-site parameter bundles and their encoding into a [`Query`].

use chrono::NaiveDate;

use crate::core::{JqError, Query};

/// How an endpoint wants its date parameters spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    #[default]
    Dashed,
    /// `YYYYMMDD`
    Compact,
}

impl DateFormat {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Dashed => "%Y-%m-%d",
            Self::Compact => "%Y%m%d",
        }
    }
}

/// Which parameters an endpoint insists on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// No parameter is required.
    Optional,
    /// At least one of the named parameters must be set.
    AnyOf(&'static [&'static str]),
    /// Every named parameter must be set.
    Required(&'static [&'static str]),
}

impl Selector {
    pub(crate) fn check(self, query: &Query) -> Result<(), JqError> {
        match self {
            Self::Optional => Ok(()),
            Self::AnyOf(names) => {
                if names.iter().any(|n| query.contains(n)) {
                    Ok(())
                } else {
                    Err(JqError::InvalidArgument(format!(
                        "at least one of {} is required",
                        names.join(", ")
                    )))
                }
            }
            Self::Required(names) => match names.iter().find(|n| !query.contains(n)) {
                Some(missing) => Err(JqError::InvalidArgument(format!(
                    "parameter `{missing}` is required"
                ))),
                None => Ok(()),
            },
        }
    }
}

/// A date supplied by the caller, either as text (`YYYYMMDD` or `YYYY-MM-DD`) or as a
/// [`NaiveDate`]. Text is validated when the request is encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParam {
    Text(String),
    Date(NaiveDate),
}

impl DateParam {
    /// Parse into a calendar date, accepting both supported spellings.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::InvalidArgument`] when the text is neither `YYYYMMDD` nor
    /// `YYYY-MM-DD`, or names an impossible date.
    pub fn to_date(&self) -> Result<NaiveDate, JqError> {
        match self {
            Self::Date(d) => Ok(*d),
            Self::Text(s) => parse_date(s),
        }
    }

    /// Render in the requested format.
    ///
    /// # Errors
    ///
    /// See [`DateParam::to_date`].
    pub fn encode(&self, format: DateFormat) -> Result<String, JqError> {
        Ok(self.to_date()?.format(format.pattern()).to_string())
    }

    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, JqError> {
    let s = raw.trim();
    let pattern = match s.len() {
        8 if s.bytes().all(|b| b.is_ascii_digit()) => DateFormat::Compact.pattern(),
        10 if s.as_bytes()[4] == b'-' && s.as_bytes()[7] == b'-' => DateFormat::Dashed.pattern(),
        _ => {
            return Err(JqError::InvalidArgument(format!(
                "malformed date {raw:?}: expected YYYYMMDD or YYYY-MM-DD"
            )));
        }
    };
    NaiveDate::parse_from_str(s, pattern)
        .map_err(|e| JqError::InvalidArgument(format!("invalid date {raw:?}: {e}")))
}

impl From<&str> for DateParam {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DateParam {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for DateParam {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<NaiveDate> for DateParam {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Text(String),
    Date(DateParam),
}

/// The parameter bundle shared by every endpoint request.
///
/// Unset (or empty) fields are omitted from the encoded query. Dates are normalized to
/// the endpoint's [`DateFormat`] at encode time. The continuation token is not part of
/// the bundle; only the pagination driver sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    fields: Vec<(&'static str, Value)>,
}

impl Params {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Security code (`7203` or `72030`).
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.set_text("code", code);
    }

    pub fn set_date(&mut self, date: impl Into<DateParam>) {
        self.set_date_field("date", date);
    }

    pub fn set_from(&mut self, from: impl Into<DateParam>) {
        self.set_date_field("from", from);
    }

    pub fn set_to(&mut self, to: impl Into<DateParam>) {
        self.set_date_field("to", to);
    }

    /// Set an endpoint-specific text parameter.
    pub fn set_text(&mut self, name: &'static str, value: impl Into<String>) {
        self.put(name, Value::Text(value.into()));
    }

    /// Set an endpoint-specific date parameter.
    pub fn set_date_field(&mut self, name: &'static str, value: impl Into<DateParam>) {
        self.put(name, Value::Date(value.into()));
    }

    /// Remove a parameter.
    pub fn clear(&mut self, name: &str) {
        self.fields.retain(|(k, _)| *k != name);
    }

    /// Encode into a query, normalizing dates and enforcing the endpoint's selector.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::InvalidArgument`] for malformed dates, a `from` later than `to`,
    /// or when the selector's requirement is not met.
    pub fn encode(&self, format: DateFormat, selector: Selector) -> Result<Query, JqError> {
        let mut query = Query::new();
        for (name, value) in &self.fields {
            match value {
                Value::Text(s) => query.set(*name, s.trim()),
                Value::Date(d) if d.is_blank() => {}
                Value::Date(d) => query.set(*name, d.encode(format)?),
            }
        }
        self.check_range()?;
        selector.check(&query)?;
        Ok(query)
    }

    fn check_range(&self) -> Result<(), JqError> {
        let (Some(from), Some(to)) = (self.date_value("from"), self.date_value("to")) else {
            return Ok(());
        };
        let (from, to) = (from.to_date()?, to.to_date()?);
        if from > to {
            return Err(JqError::InvalidArgument(format!(
                "invalid date range: from ({from}) is after to ({to})"
            )));
        }
        Ok(())
    }

    fn date_value(&self, name: &str) -> Option<&DateParam> {
        self.fields.iter().find_map(|(k, v)| match v {
            Value::Date(d) if *k == name && !d.is_blank() => Some(d),
            _ => None,
        })
    }

    fn put(&mut self, name: &'static str, value: Value) {
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }
}
