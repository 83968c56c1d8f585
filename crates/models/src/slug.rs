//! Canonical product URLs and the slugs stored in their place.
//!
//! Only the slug is persisted; the public URL is rebuilt on the way out.

pub const CATALOG_URL_PREFIX: &str = "https://www.maxidom.ru/catalog/";

/// Strip the catalog prefix and one trailing `/`. Either part may be absent.
pub fn derive_slug(url: &str) -> String {
    let rest = url.strip_prefix(CATALOG_URL_PREFIX).unwrap_or(url);
    rest.strip_suffix('/').unwrap_or(rest).to_string()
}

pub fn derive_url(slug: &str) -> String {
    format!("{CATALOG_URL_PREFIX}{slug}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_and_trailing_slash() {
        assert_eq!(derive_slug("https://www.maxidom.ru/catalog/hammer/"), "hammer");
        assert_eq!(derive_slug("https://www.maxidom.ru/catalog/tools/hammer-01/"), "tools/hammer-01");
    }

    #[test]
    fn missing_parts_are_noops() {
        assert_eq!(derive_slug("https://www.maxidom.ru/catalog/hammer"), "hammer");
        assert_eq!(derive_slug("hammer/"), "hammer");
        assert_eq!(derive_slug("hammer"), "hammer");
        assert_eq!(derive_slug(""), "");
        assert_eq!(derive_slug("https://example.com/catalog/hammer/"), "https://example.com/catalog/hammer");
    }

    #[test]
    fn only_one_trailing_slash_removed() {
        assert_eq!(derive_slug("https://www.maxidom.ru/catalog/hammer//"), "hammer/");
    }

    #[test]
    fn url_round_trips_through_slug() {
        for u in [
            "https://www.maxidom.ru/catalog/hammer/",
            "https://www.maxidom.ru/catalog/sadovyy-inventar/lopata-123/",
            "https://www.maxidom.ru/catalog//",
        ] {
            assert_eq!(derive_url(&derive_slug(u)), u);
        }
    }
}
