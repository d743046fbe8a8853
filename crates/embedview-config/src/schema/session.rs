//! Request parameters for the browsing session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The page to open and how to request it.
///
/// Query parameters and headers are kept in `BTreeMap`s so the built request
/// is reproducible: items are emitted in key order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SessionSection {
    /// Base URL. Must be absolute.
    pub url: String,
    /// Query items merged into the URL.
    pub query: BTreeMap<String, String>,
    /// Extra request headers, applied last-write-wins.
    pub headers: BTreeMap<String, String>,
}
