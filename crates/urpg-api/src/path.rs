//! Request path handling: base-path stripping, segment splitting and
//! percent-decoding.

use crate::errors::{ApiError, ApiResult};

/// Split `path` into decoded segments relative to `base_path`.
///
/// The query string and empty segments are dropped. Returns `Ok(None)` when
/// the path lies outside `base_path`.
pub fn segments(path: &str, base_path: &str) -> ApiResult<Option<Vec<String>>> {
    let path = path.split(['?', '#']).next().unwrap_or_default();

    let Some(rest) = strip_base(path, base_path) else {
        return Ok(None);
    };

    rest.split('/')
        .filter(|s| !s.is_empty())
        .map(percent_decode)
        .collect::<ApiResult<Vec<_>>>()
        .map(Some)
}

fn strip_base<'a>(path: &'a str, base_path: &str) -> Option<&'a str> {
    let base = base_path.trim_end_matches('/');
    if base.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(base)?;
    // "/api" must not match "/apidocs"
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

/// Decode `%XX` escapes. The decoded bytes must be UTF-8.
pub fn percent_decode(segment: &str) -> ApiResult<String> {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = bytes.get(i + 1).copied().and_then(hex_value);
            let lo = bytes.get(i + 2).copied().and_then(hex_value);
            match (hi, lo) {
                (Some(hi), Some(lo)) => {
                    out.push((hi << 4) | lo);
                    i += 3;
                    continue;
                }
                _ => {
                    return Err(ApiError::InvalidRequest {
                        message: format!("malformed percent-escape in '{segment}'"),
                    })
                }
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8(out).map_err(|_| ApiError::InvalidRequest {
        message: format!("path segment '{segment}' is not valid UTF-8"),
    })
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_escapes() {
        assert_eq!(percent_decode("Mr.%20Mime").unwrap(), "Mr. Mime");
        assert_eq!(percent_decode("Flab%C3%A9b%C3%A9").unwrap(), "Flabébé");
        assert_eq!(percent_decode("100%25").unwrap(), "100%");
        assert_eq!(percent_decode("Pikachu").unwrap(), "Pikachu");
    }

    #[test]
    fn rejects_malformed_escapes() {
        assert!(percent_decode("bad%2").is_err());
        assert!(percent_decode("bad%zz").is_err());
        assert!(percent_decode("%FF").is_err());
    }

    #[test]
    fn splits_and_drops_query() {
        assert_eq!(
            segments("/pokemon/Pikachu?lang=en", "/").unwrap(),
            Some(vec!["pokemon".to_string(), "Pikachu".to_string()])
        );
        assert_eq!(
            segments("//pokemon/", "/").unwrap(),
            Some(vec!["pokemon".to_string()])
        );
        assert_eq!(segments("/", "/").unwrap(), Some(vec![]));
    }

    #[test]
    fn strips_base_path() {
        assert_eq!(
            segments("/api/v1/pokemon", "/api/v1/").unwrap(),
            Some(vec!["pokemon".to_string()])
        );
        assert_eq!(segments("/api/v1", "/api/v1").unwrap(), Some(vec![]));
        assert_eq!(segments("/api/v10/pokemon", "/api/v1").unwrap(), None);
        assert_eq!(segments("/pokemon", "/api").unwrap(), None);
    }
}
