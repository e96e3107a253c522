//! Share links: a configuration encoded as URL query parameters.
//!
//! `?color=%23dc2626&finish=metallic&env=studio`. Values are percent-encoded
//! with the `encodeURIComponent` unreserved set. Decoding is best effort and
//! falls back to defaults field by field.

use crate::config::Configuration;
use crate::constants::{PARAM_COLOR, PARAM_ENVIRONMENT, PARAM_FINISH, PARAM_FINISH_LEGACY};
use crate::error::Field;
use crate::session::{Issues, Restored, RestoreSource};
use fnv::FnvHashMap;
use std::fmt::Write;

/// Build a share URL for `config` on top of `base_url`.
///
/// Any fragment on `base_url` is dropped; an existing query is extended.
pub fn to_share_link(config: &Configuration, base_url: &str) -> String {
    let base = base_url.split('#').next().unwrap_or_default();
    let sep = match base.find('?') {
        None => "?",
        Some(i) if i + 1 == base.len() || base.ends_with('&') => "",
        Some(_) => "&",
    };
    format!("{base}{sep}{}", to_query(config))
}

/// The query part of a share link, without the leading `?`.
pub fn to_query(config: &Configuration) -> String {
    format!(
        "{}={}&{}={}&{}={}",
        PARAM_COLOR,
        percent_encode(&config.value_of(Field::Color)),
        PARAM_FINISH,
        percent_encode(&config.value_of(Field::Finish)),
        PARAM_ENVIRONMENT,
        percent_encode(&config.value_of(Field::Environment)),
    )
}

/// Decode a share link.
///
/// Accepts a bare query, one with a leading `?`, or a full URL. Missing
/// parameters keep their defaults silently; invalid ones keep their defaults
/// and are reported in [`Restored::issues`].
pub fn from_share_link(query: &str) -> Restored {
    let params = parse_query(query);
    let finish = params
        .get(PARAM_FINISH)
        .or_else(|| params.get(PARAM_FINISH_LEGACY));

    let mut config = Configuration::default();
    let mut issues = Issues::new();
    config.apply_or_default(Field::Color, params.get(PARAM_COLOR).map(String::as_str), &mut issues);
    config.apply_or_default(Field::Finish, finish.map(String::as_str), &mut issues);
    config.apply_or_default(
        Field::Environment,
        params.get(PARAM_ENVIRONMENT).map(String::as_str),
        &mut issues,
    );
    if !issues.is_empty() {
        log::warn!("[share] recovered {} invalid parameter(s)", issues.len());
    }
    Restored {
        config,
        source: RestoreSource::ShareLink,
        issues,
    }
}

/// Whether `query` carries a non-empty value for any configuration parameter.
pub fn has_share_params(query: &str) -> bool {
    let params = parse_query(query);
    [PARAM_COLOR, PARAM_FINISH, PARAM_FINISH_LEGACY, PARAM_ENVIRONMENT]
        .iter()
        .any(|p| params.get(*p).is_some_and(|v| !v.is_empty()))
}

/// Split a query string into decoded key/value pairs. Later duplicates win.
pub fn parse_query(input: &str) -> FnvHashMap<String, String> {
    let input = input.split('#').next().unwrap_or_default();
    let query = match input.find('?') {
        Some(i) => &input[i + 1..],
        None if input.contains('=') => input,
        None => "",
    };
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (percent_decode(k), percent_decode(v)),
            None => (percent_decode(pair), String::new()),
        })
        .collect()
}

#[inline]
fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

/// Percent-encode everything outside the `encodeURIComponent` unreserved set.
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            let _ = write!(out, "%{:02X}", b);
        }
    }
    out
}

/// Inverse of [`percent_encode`]; `+` becomes a space and malformed escapes are
/// kept as written.
pub fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[inline]
fn hex_val(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}
