//! Remote command/response client seam
//!
//! The collectors in this crate never speak the RouterOS API wire protocol
//! themselves. They issue a command through a [`RouterOsClient`] and work on
//! the structured [`Reply`] it returns. Connection handling, login and
//! timeouts are the implementor's concern.
//!
//! # Examples
//!
//! ```rust
//! use routeros_metrics::client::ReplyRow;
//!
//! let row = ReplyRow::from_words(["=name=ether1", "=rx-bits-per-second=1500"]);
//! assert_eq!(row.get("name"), Some("ether1"));
//! assert_eq!(row.get("rx-bits-per-second"), Some("1500"));
//! assert_eq!(row.get("tx-bits-per-second"), None);
//! ```

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
use mockall::automock;

/// A client able to run a RouterOS API command on one device.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RouterOsClient: Send + Sync {
    /// Runs `command` with the given attribute words and returns the reply.
    ///
    /// Transport and `!trap`/`!fatal` replies are reported as errors.
    async fn run(&self, command: &str, args: &[String]) -> Result<Reply>;
}

/// The `!re` sentences returned by a command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reply {
    pub rows: Vec<ReplyRow>,
}

impl Reply {
    pub fn new(rows: Vec<ReplyRow>) -> Self {
        Self { rows }
    }
}

/// One reply sentence: the field values of a single polled entity.
///
/// Fields keep the order in which the device sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyRow {
    fields: Vec<(String, String)>,
}

impl ReplyRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses attribute words of the form `=key=value`.
    ///
    /// The value is everything after the second `=`, so it may itself contain
    /// `=`. Words that are not attributes (`!re`, `.tag=...`) are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut row = Self::new();
        for word in words {
            let Some(attribute) = word.as_ref().strip_prefix('=') else {
                continue;
            };
            match attribute.split_once('=') {
                Some((key, value)) if !key.is_empty() => row.insert(key, value),
                Some(_) => {}
                None if !attribute.is_empty() => row.insert(attribute, ""),
                None => {}
            }
        }
        row
    }

    /// Sets a field, replacing an earlier value with the same name in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(field) => field.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Raw value of a field, `None` when the device omitted it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Raw value of a field, or the empty string when it is missing.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ReplyRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = Self::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}
