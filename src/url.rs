/// Prefix a bare domain with a URL scheme. The domain is taken as-is; a
/// nonsense domain surfaces later as a fetch failure, not here.
pub fn add_scheme(domain: &str, scheme: &str) -> String {
    format!("{}://{}", scheme, domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_scheme_prefixes_domain() {
        assert_eq!(add_scheme("example.com", "https"), "https://example.com");
    }

    #[test]
    fn add_scheme_accepts_other_schemes() {
        assert_eq!(add_scheme("example.com", "http"), "http://example.com");
    }

    #[test]
    fn add_scheme_does_not_validate_domain() {
        assert_eq!(add_scheme("not a domain", "https"), "https://not a domain");
    }
}
