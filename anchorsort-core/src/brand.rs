// Brand identity derivation from a backlink target URL

use serde::{Deserialize, Serialize};
use url::Url;

/// The two spellings of a site's brand that count as a branded anchor:
/// the host without its `www.` prefix, and the host's leftmost label.
///
/// Both are empty when the target URL has no usable host, in which case
/// no anchor can ever match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandIdentity {
    pub full_host: String,
    pub root_label: String,
}

impl BrandIdentity {
    pub fn new(host: &str) -> Self {
        let host = host.to_lowercase();
        let full_host = host.strip_prefix("www.").unwrap_or(&host).to_string();
        let root_label = full_host
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            full_host,
            root_label,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_host.is_empty()
    }

    /// Exact, case-insensitive comparison against either variant.
    /// `anchor` is expected to be trimmed already.
    pub fn matches(&self, anchor: &str) -> bool {
        if anchor.is_empty() || self.is_empty() {
            return false;
        }
        let anchor = anchor.to_lowercase();
        anchor == self.full_host || anchor == self.root_label
    }
}

/// Best-effort extraction of the brand identity for a target URL.
///
/// Never fails: anything the URL parser rejects, or a URL without a host
/// (`mailto:`, a bare `example.com` with no scheme), degrades to an empty
/// identity.
///
/// Internationalised hosts are kept in their Unicode spelling, since that is
/// how a site's own name shows up in anchor text.
pub fn extract_brand_identity(target_url: &str) -> BrandIdentity {
    let host = Url::parse(target_url.trim())
        .ok()
        .and_then(|u| u.host_str().map(unicode_host))
        .unwrap_or_default();

    BrandIdentity::new(&host)
}

// `Url` stores hosts as punycode; decoding failures keep the ASCII form
fn unicode_host(host: &str) -> String {
    match idna::domain_to_unicode(host) {
        (unicode, Ok(())) => unicode,
        (_, Err(_)) => host.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_one_www_prefix() {
        let identity = extract_brand_identity("https://www.www.example.com/");
        assert_eq!(identity.full_host, "www.example.com");
        assert_eq!(identity.root_label, "www");
    }

    #[test]
    fn single_label_host_is_its_own_root() {
        let identity = extract_brand_identity("http://localhost:8080/admin");
        assert_eq!(identity.full_host, "localhost");
        assert_eq!(identity.root_label, "localhost");
    }

    #[test]
    fn punycode_host_is_decoded() {
        let identity = extract_brand_identity("https://www.bücher.de/");
        assert_eq!(identity.full_host, "bücher.de");
        assert_eq!(identity.root_label, "bücher");
    }

    #[test]
    fn empty_identity_matches_nothing() {
        let identity = BrandIdentity::default();
        assert!(!identity.matches(""));
        assert!(!identity.matches("example"));
    }
}
