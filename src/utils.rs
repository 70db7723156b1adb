use axum::http::{header::InvalidHeaderValue, HeaderValue};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Session-lifetime cookie: no `Max-Age`, so it ends with the browser session.
pub fn cookie(name: &str, value: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let secure = if secure { "; Secure" } else { "" };
    format!("{name}={value}; HttpOnly; Path=/; SameSite=Lax{secure}").parse()
}

/// Joins ids with `.`, which stays inside the cookie-octet alphabet.
pub fn encode_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Inverse of [`encode_ids`]. Any malformed part discards the whole list.
pub fn decode_ids(value: &str) -> Vec<i64> {
    if value.is_empty() {
        return Vec::new();
    }
    value
        .split('.')
        .map(str::parse::<i64>)
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_survive_the_cookie_encoding() {
        let ids = vec![12, 3, 40];
        assert_eq!(encode_ids(&ids), "12.3.40");
        assert_eq!(decode_ids(&encode_ids(&ids)), ids);
    }

    #[test]
    fn malformed_ids_decode_to_nothing() {
        assert!(decode_ids("").is_empty());
        assert!(decode_ids("1.x.3").is_empty());
        assert!(decode_ids("1,2").is_empty());
    }

    #[test]
    fn cookie_is_secure_only_when_asked() {
        let plain = cookie("sample_size", "5", false).unwrap();
        assert_eq!(
            plain.to_str().unwrap(),
            "sample_size=5; HttpOnly; Path=/; SameSite=Lax"
        );
        let secure = cookie("sample_size", "5", true).unwrap();
        assert!(secure.to_str().unwrap().ends_with("; Secure"));
    }
}
