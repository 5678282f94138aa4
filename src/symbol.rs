//! Currency symbol normalization
//!
//! Both the catalog scanner and the archive differ derive symbols from file
//! names. They must agree exactly, so the rule lives here and nowhere else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Extension of an asset-catalog bundle directory
pub const BUNDLE_EXTENSION: &str = "imageset";

/// Marker appended to the symbol in bundle and rendition names
pub const SMALL_MARKER: &str = "_small";

/// Upper-cased ticker identifying a currency, e.g. `BTC`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencySymbol(String);

impl CurrencySymbol {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base name shared by the bundle directory and its renditions (`BTC_small`)
    pub fn asset_stem(&self) -> String {
        format!("{}{}", self.0, SMALL_MARKER)
    }

    /// Directory name of this currency's bundle (`BTC_small.imageset`)
    pub fn bundle_dir_name(&self) -> String {
        format!("{}.{}", self.asset_stem(), BUNDLE_EXTENSION)
    }
}

impl fmt::Display for CurrencySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CurrencySymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive a currency symbol from a bundle directory or icon file name.
///
/// Drops the extension, then a trailing `_small` marker (any case), then
/// upper-cases what is left. Returns `None` when nothing remains.
pub fn normalize_symbol(name: &str) -> Option<CurrencySymbol> {
    let stem = match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    };

    let stem = strip_suffix_ignore_case(stem, SMALL_MARKER).unwrap_or(stem);
    let stem = stem.trim();

    if stem.is_empty() {
        return None;
    }

    Some(CurrencySymbol(stem.to_uppercase()))
}

/// Whether a directory name follows the `<symbol>[_small].imageset` convention
pub fn is_bundle_dir_name(name: &str) -> bool {
    let suffix = format!(".{BUNDLE_EXTENSION}");
    strip_suffix_ignore_case(name, &suffix).is_some()
}

fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    if value.len() < suffix.len() {
        return None;
    }
    let split = value.len() - suffix.len();
    if !value.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = value.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
