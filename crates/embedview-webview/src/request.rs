//! Request construction: URL parsing, query merging, header application.

use std::collections::BTreeMap;

use embedview_common::WebViewError;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::{form_urlencoded, Url};

/// Immutable parameters for one browsing session.
///
/// Query parameters and headers live in `BTreeMap`s: the built request lists
/// them in key order, so the same parameters always produce the same URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pub url: String,
    pub query_params: BTreeMap<String, String>,
    pub extra_headers: BTreeMap<String, String>,
}

impl RequestParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name.into(), value.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }
}

/// The request actually handed to the browser surface.
#[derive(Debug, Clone)]
pub struct BuiltRequest {
    url: Url,
    headers: HeaderMap,
}

impl BuiltRequest {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn into_parts(self) -> (Url, HeaderMap) {
        (self.url, self.headers)
    }
}

/// Build the session request from raw parameters.
///
/// Fails with `InvalidUrl` when the URL is not absolute or does not survive
/// re-parsing after the query merge, and with `InvalidHeader` when a header
/// name or value is not valid HTTP.
pub fn build_request(params: &RequestParams) -> Result<BuiltRequest, WebViewError> {
    let mut url = Url::parse(&params.url).map_err(|_| WebViewError::InvalidUrl)?;

    if !params.query_params.is_empty() {
        url = merge_query(url, &params.query_params)?;
    }

    let mut headers = HeaderMap::with_capacity(params.extra_headers.len());
    for (name, value) in &params.extra_headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| WebViewError::InvalidHeader(name.clone()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| WebViewError::InvalidHeader(name.clone()))?;
        headers.insert(header_name, header_value);
    }

    Ok(BuiltRequest { url, headers })
}

/// Characters escaped in supplied query names and values: everything a
/// query may not contain raw, plus the pair delimiters and `+`, which form
/// decoders read as a space.
const QUERY_ITEM: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Drop existing segments whose decoded name is supplied, keeping the others
/// byte for byte, then append every supplied pair percent-encoded.
fn merge_query(mut url: Url, query: &BTreeMap<String, String>) -> Result<Url, WebViewError> {
    let mut segments: Vec<String> = url
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter(|segment| !query.contains_key(segment_name(segment).as_str()))
        .map(str::to_string)
        .collect();

    segments.extend(query.iter().map(|(name, value)| {
        format!(
            "{}={}",
            utf8_percent_encode(name, QUERY_ITEM),
            utf8_percent_encode(value, QUERY_ITEM)
        )
    }));

    url.set_query(Some(&segments.join("&")));
    Url::parse(url.as_str()).map_err(|_| WebViewError::InvalidUrl)
}

/// Decoded name of one raw `name[=value]` query segment.
fn segment_name(segment: &str) -> String {
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .map(|(name, _)| name.into_owned())
        .unwrap_or_default()
}
