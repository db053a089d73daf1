use crate::utils::error::{PortfolioError, Result};
use std::collections::HashSet;
use std::hash::Hash;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> PortfolioError {
    PortfolioError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(field_name, url_str, format!("Invalid URL format: {}", e))),
    }
}

/// Outbound links may also be `mailto:` addresses.
pub fn validate_link(field_name: &str, link: &str) -> Result<()> {
    if let Some(address) = link.strip_prefix("mailto:") {
        if !address.contains('@') {
            return Err(invalid(field_name, link, "mailto link has no address"));
        }
        return Ok(());
    }
    validate_url(field_name, link)
}

/// A host name without scheme or path, e.g. `kbyconline.org`.
pub fn validate_bare_domain(field_name: &str, domain: &str) -> Result<()> {
    if domain.contains("://") || domain.contains('/') {
        return Err(invalid(field_name, domain, "Expected a bare domain without scheme or path"));
    }
    let url = Url::parse(&format!("https://{}", domain))
        .map_err(|e| invalid(field_name, domain, format!("Invalid domain: {}", e)))?;
    match url.host_str() {
        Some(host) if host.contains('.') => Ok(()),
        _ => Err(invalid(field_name, domain, "Domain must contain a dot")),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_unique<T, I>(field_name: &str, values: I) -> Result<()>
where
    T: Eq + Hash + std::fmt::Display,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    for value in values {
        let shown = value.to_string();
        if !seen.insert(value) {
            return Err(invalid(field_name, &shown, "Duplicate value"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("site.url", "https://example.com").is_ok());
        assert!(validate_url("site.url", "http://example.com").is_ok());
        assert!(validate_url("site.url", "").is_err());
        assert!(validate_url("site.url", "invalid-url").is_err());
        assert!(validate_url("site.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_link() {
        assert!(validate_link("contact", "mailto:someone@example.com").is_ok());
        assert!(validate_link("contact", "mailto:").is_err());
        assert!(validate_link("contact", "https://github.com/someone").is_ok());
    }

    #[test]
    fn test_validate_bare_domain() {
        assert!(validate_bare_domain("url", "9jaspirit.com.ng").is_ok());
        assert!(validate_bare_domain("url", "https://9jaspirit.com.ng").is_err());
        assert!(validate_bare_domain("url", "example.com/path").is_err());
        assert!(validate_bare_domain("url", "localhost").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("level", 100u8, 0, 100).is_ok());
        assert!(validate_range("level", 101u8, 0, 100).is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("ids", [1, 2, 3]).is_ok());
        let err = validate_unique("names", ["a", "b", "a"]).unwrap_err();
        assert!(err.to_string().contains("'a'"));
    }
}
