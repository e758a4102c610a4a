//! `format` string predicates (component C): one `is_valid_*` function per format name
//! known to the JSON Schema format vocabulary, each `true` on any non-string instance (the
//! `format` keyword only constrains strings; `type` is responsible for the rest).
use std::{
    net::{Ipv4Addr, Ipv6Addr},
    str::FromStr,
};

use email_address::EmailAddress;
use fancy_regex::Regex;
use once_cell::sync::Lazy;
use uuid_simd::{parse_hyphenated, Out};

static JSON_POINTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(/(([^/~])|(~[01]))*)*\z").expect("valid regex"));
static RELATIVE_JSON_POINTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:0|[1-9][0-9]*)(?:#|(?:/(?:[^~/]|~0|~1)*)*)\z").expect("valid regex")
});
static URI_TEMPLATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(?:(?:[^\x00-\x20"'<>%\\^`{|}]|%[0-9a-f]{2})|\{[+#./;?&=,!@|]?(?:[a-z0-9_]|%[0-9a-f]{2})+(?::[1-9][0-9]{0,3}|\*)?(?:,(?:[a-z0-9_]|%[0-9a-f]{2})+(?::[1-9][0-9]{0,3}|\*)?)*})*\z"#,
    )
    .expect("valid regex")
});

/// Looks up the built-in predicate for `name`, if any.
#[must_use]
pub(crate) fn builtin(name: &str) -> Option<fn(&str) -> bool> {
    Some(match name {
        "date" => is_valid_date,
        "date-time" => is_valid_date_time,
        "time" => is_valid_time,
        "duration" => is_valid_duration,
        "email" | "idn-email" => is_valid_email,
        "hostname" | "idn-hostname" => is_valid_hostname,
        "ipv4" => is_valid_ipv4,
        "ipv6" => is_valid_ipv6,
        "uri" => is_valid_uri,
        "uri-reference" => is_valid_uri_reference,
        "iri" => is_valid_iri,
        "iri-reference" => is_valid_iri_reference,
        "uri-template" => is_valid_uri_template,
        "json-pointer" => is_valid_json_pointer,
        "relative-json-pointer" => is_valid_relative_json_pointer,
        "regex" => is_valid_regex,
        "uuid" => is_valid_uuid,
        _ => return None,
    })
}

fn is_valid_date(date: &str) -> bool {
    if date.len() != 10 {
        return false;
    }
    let bytes = date.as_bytes();
    if bytes[4] != b'-'
        || bytes[7] != b'-'
        || !bytes[0..4].iter().all(u8::is_ascii_digit)
        || !bytes[5..7].iter().all(u8::is_ascii_digit)
        || !bytes[8..10].iter().all(u8::is_ascii_digit)
    {
        return false;
    }
    let year = (bytes[0] as u16 - b'0' as u16) * 1000
        + (bytes[1] as u16 - b'0' as u16) * 100
        + (bytes[2] as u16 - b'0' as u16) * 10
        + (bytes[3] as u16 - b'0' as u16);
    let month = (bytes[5] - b'0') * 10 + (bytes[6] - b'0');
    if month == 0 || month > 12 {
        return false;
    }
    let day = (bytes[8] - b'0') * 10 + (bytes[9] - b'0');
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => day >= 1 && day <= 31,
        4 | 6 | 9 | 11 => day >= 1 && day <= 30,
        2 if is_leap_year(year) => day >= 1 && day <= 29,
        2 => day >= 1 && day <= 28,
        _ => false,
    }
}

#[inline]
const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn is_valid_date_time(value: &str) -> bool {
    time::OffsetDateTime::parse(value, &time::format_description::well_known::Rfc3339).is_ok()
}

fn is_valid_time(item: &str) -> bool {
    let bytes = item.as_bytes();
    let len = bytes.len();
    if len < 9 {
        return false;
    }
    if !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || bytes[2] != b':'
        || !bytes[3].is_ascii_digit()
        || !bytes[4].is_ascii_digit()
        || bytes[5] != b':'
        || !bytes[6].is_ascii_digit()
        || !bytes[7].is_ascii_digit()
    {
        return false;
    }
    let hh = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let mm = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    let ss = (bytes[6] - b'0') * 10 + (bytes[7] - b'0');
    if hh > 23 || mm > 59 || ss > 60 {
        return false;
    }
    let mut i = 8;
    if i < len && bytes[i] == b'.' {
        i += 1;
        let mut has_digit = false;
        while i < len && bytes[i].is_ascii_digit() {
            has_digit = true;
            i += 1;
        }
        if !has_digit {
            return false;
        }
    }
    if i == len {
        return false;
    }
    match bytes[i] {
        b'Z' | b'z' => i == len - 1,
        b'+' | b'-' => {
            if len - i != 6 {
                return false;
            }
            let offset = &bytes[i + 1..];
            offset[0].is_ascii_digit()
                && offset[1].is_ascii_digit()
                && offset[2] == b':'
                && offset[3].is_ascii_digit()
                && offset[4].is_ascii_digit()
                && (offset[0] - b'0') * 10 + (offset[1] - b'0') <= 23
                && (offset[3] - b'0') * 10 + (offset[4] - b'0') <= 59
        }
        _ => false,
    }
}

fn is_valid_duration(value: &str) -> bool {
    iso8601::duration(value).is_ok()
}

fn is_valid_email(email: &str) -> bool {
    let Ok(parsed) = EmailAddress::from_str(email) else {
        return false;
    };
    let domain = parsed.domain();
    if let Some(domain) = domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
        if let Some(domain) = domain.strip_prefix("IPv6:") {
            domain.parse::<Ipv6Addr>().is_ok()
        } else {
            domain.parse::<Ipv4Addr>().is_ok()
        }
    } else {
        is_valid_hostname(domain)
    }
}

fn is_valid_hostname(hostname: &str) -> bool {
    if hostname.is_empty()
        || hostname.ends_with('-')
        || hostname.starts_with('-')
        || bytecount::num_chars(hostname.as_bytes()) > 255
    {
        return false;
    }
    if hostname.is_ascii() {
        !hostname.chars().any(|c| !(c.is_alphanumeric() || c == '-' || c == '.'))
            && !hostname.split('.').any(|part| bytecount::num_chars(part.as_bytes()) > 63)
    } else {
        idna::domain_to_ascii(hostname).is_ok()
    }
}

fn is_valid_ipv4(value: &str) -> bool {
    // `Ipv4Addr::from_str` accepts leading zeros in octets, which the IP address format
    // must reject (e.g. "127.0.0.01").
    if value.split('.').count() != 4 || value.split('.').any(|part| part.len() > 1 && part.starts_with('0')) {
        return false;
    }
    Ipv4Addr::from_str(value).is_ok()
}

fn is_valid_ipv6(value: &str) -> bool {
    Ipv6Addr::from_str(value).is_ok()
}

fn is_valid_uri(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

fn is_valid_uri_reference(value: &str) -> bool {
    if url::Url::parse(value).is_ok() {
        return true;
    }
    // Relative references resolve against an arbitrary base; acceptance here mirrors RFC
    // 3986 rather than a specific document.
    url::Url::parse("json-schema:///").and_then(|base| base.join(value)).is_ok()
}

fn is_valid_iri(value: &str) -> bool {
    is_valid_uri(value)
}

fn is_valid_iri_reference(value: &str) -> bool {
    is_valid_uri_reference(value)
}

fn is_valid_uri_template(value: &str) -> bool {
    URI_TEMPLATE_RE.is_match(value).unwrap_or(false)
}

fn is_valid_json_pointer(value: &str) -> bool {
    JSON_POINTER_RE.is_match(value).unwrap_or(false)
}

fn is_valid_relative_json_pointer(value: &str) -> bool {
    RELATIVE_JSON_POINTER_RE.is_match(value).unwrap_or(false)
}

fn is_valid_regex(value: &str) -> bool {
    crate::keywords::pattern::convert_regex(value).is_ok()
}

fn is_valid_uuid(value: &str) -> bool {
    let mut out = [0; 16];
    parse_hyphenated(value.as_bytes(), Out::from_mut(&mut out)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_rejects_invalid_day() {
        assert!(is_valid_date("2023-02-28"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(is_valid_date("2024-02-29"));
    }

    #[test]
    fn email_checks_domain() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("not-an-email"));
    }

    #[test]
    fn ipv4_rejects_leading_zeros() {
        assert!(is_valid_ipv4("127.0.0.1"));
        assert!(!is_valid_ipv4("127.0.0.01"));
    }

    #[test]
    fn uuid_requires_hyphenated_form() {
        assert!(is_valid_uuid("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!is_valid_uuid("not-a-uuid"));
    }
}
