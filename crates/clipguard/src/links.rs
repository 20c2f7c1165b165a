//! Link normalizer: strips tracking parameters and unwraps redirectors.
//!
//! Every transformation is a local string rewrite; nothing touches the
//! network. The pipeline runs three stages, re-parsing the working URL
//! between them: unwrap known redirectors, rewrite AMP mirrors to their
//! direct origin, then remove tracking query parameters. A parse failure at
//! any stage aborts the whole pipeline and the input comes back untouched.
//!
//! # Example
//!
//! ```
//! use clipguard::clean;
//!
//! let result = clean("https://example.com/page?utm_source=news&id=5");
//! assert_eq!(result.text, "https://example.com/page?id=5");
//! assert!(result.changed);
//! ```

use tracing::{debug, trace};
use url::Url;

use crate::rules::MatchResult;

/// Query parameter names removed from every URL (case-sensitive).
pub const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "fbclid",
    "gclid",
    "mc_eid",
    "igshid",
    "_ga",
    "ref",
    "source",
];

/// Clean tracking parameters and redirector wrapping from `url`.
///
/// Operates on the trimmed input; `changed` compares the final string to
/// the trimmed original. Empty or whitespace-only input is a no-op, and any
/// URL that cannot be parsed comes back unchanged with `changed = false`.
/// Cleaning an already-clean URL reports `changed = false`, so the
/// operation is idempotent.
#[must_use]
pub fn clean(url: &str) -> MatchResult {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return MatchResult::unchanged(url);
    }

    match clean_pipeline(trimmed) {
        Some(cleaned) => {
            let changed = cleaned != trimmed;
            MatchResult {
                text: cleaned,
                changed,
            }
        }
        None => {
            debug!(url = %trimmed, "unparseable URL, returning input unchanged");
            MatchResult::unchanged(trimmed)
        }
    }
}

/// Run the rewrite stages, bailing out on the first parse failure.
fn clean_pipeline(original: &str) -> Option<String> {
    let mut current = original.to_string();
    let mut parsed = Url::parse(&current).ok()?;

    if let Some(target) = redirect_target(&parsed) {
        trace!(from = %current, to = %target, "unwrapped redirector");
        current = target;
        parsed = Url::parse(&current).ok()?;
    }

    if let Some(direct) = strip_amp(&parsed) {
        trace!(from = %current, to = %direct, "stripped AMP mirror");
        current = direct;
        parsed = Url::parse(&current).ok()?;
    }

    if parsed.query().is_some() {
        current = strip_tracking(&current);
    }

    Some(current)
}

/// Extract the target URL when `parsed` is a known redirector.
///
/// Google wraps the target in a `q` parameter; Facebook wraps it
/// percent-encoded in a `u` parameter. Anything else passes through.
fn redirect_target(parsed: &Url) -> Option<String> {
    let host = parsed.host_str()?;

    if host.contains("google.com") && parsed.path().contains("/url") {
        let (_, target) = parsed.query_pairs().find(|(key, _)| key == "q")?;
        return Some(target.into_owned());
    }

    if host.contains("facebook.com") && parsed.path().contains("/l.php") {
        let (_, target) = parsed.query_pairs().find(|(key, _)| key == "u")?;
        let decoded = urlencoding::decode(&target).ok()?;
        return Some(decoded.into_owned());
    }

    None
}

/// Rewrite a Google AMP mirror into the direct `https://` form of the
/// embedded origin and path, preserving any query string verbatim.
fn strip_amp(parsed: &Url) -> Option<String> {
    let host = parsed.host_str()?;
    if !(host.contains("google.com") && parsed.path().contains("/amp/s/")) {
        return None;
    }

    let direct_path = parsed.path().replace("/amp/s/", "");
    let mut direct = format!("https://{direct_path}");
    if let Some(query) = parsed.query() {
        direct.push('?');
        direct.push_str(query);
    }
    Some(direct)
}

/// Rebuild the query string without tracking parameters.
///
/// Works on the raw URL text so everything outside the query survives
/// byte-for-byte. Surviving pairs keep their original relative order;
/// duplicate keys collapse to their first value; blank-valued keys come
/// back bare. An emptied query drops the `?` entirely.
fn strip_tracking(url: &str) -> String {
    let Some((prefix, rest)) = url.split_once('?') else {
        return url.to_string();
    };
    let (query, fragment) = match rest.split_once('#') {
        Some((query, fragment)) => (query, Some(fragment)),
        None => (rest, None),
    };

    let mut kept: Vec<(&str, &str)> = Vec::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if TRACKING_PARAMS.contains(&key) {
            trace!(param = %key, "removed tracking parameter");
            continue;
        }
        // First occurrence wins; later duplicates are dropped.
        if kept.iter().any(|(seen, _)| *seen == key) {
            continue;
        }
        kept.push((key, value));
    }

    let mut rebuilt = prefix.to_string();
    if !kept.is_empty() {
        rebuilt.push('?');
        let joined = kept
            .iter()
            .map(|(key, value)| {
                if value.is_empty() {
                    (*key).to_string()
                } else {
                    format!("{key}={value}")
                }
            })
            .collect::<Vec<_>>()
            .join("&");
        rebuilt.push_str(&joined);
    }
    if let Some(fragment) = fragment {
        rebuilt.push('#');
        rebuilt.push_str(fragment);
    }
    rebuilt
}
