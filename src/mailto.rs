//! Contact form to mail-compose handoff
//!
//! Builds a `mailto:` URI from the four form fields. Pure so the body layout
//! and escaping stay testable off the browser.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Escape set matching JS `encodeURIComponent`: everything but unreserved
/// characters and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Compose a `mailto:` URI with percent-encoded subject and body.
///
/// The body carries the sender's name and email on their own lines, then a
/// blank line, then the message.
pub fn compose(recipient: &str, name: &str, email: &str, subject: &str, message: &str) -> String {
    let body = format!("Name: {name}\nEmail: {email}\n\n{message}");
    format!(
        "mailto:{recipient}?subject={}&body={}",
        utf8_percent_encode(subject, COMPONENT),
        utf8_percent_encode(&body, COMPONENT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_basic_fields() {
        let uri = compose("to@example.com", "A", "a@b.com", "Hi", "Hello");
        assert!(uri.starts_with("mailto:to@example.com?"));
        assert!(uri.contains("subject=Hi"));
        // Body lines, percent-encoded: "Name: A", "Email: a@b.com", "Hello"
        assert!(uri.contains("body=Name%3A%20A%0AEmail%3A%20a%40b.com%0A%0AHello"));
    }

    #[test]
    fn test_compose_empty_fields() {
        let uri = compose("to@example.com", "", "", "", "");
        assert!(uri.contains("subject=&"));
        assert!(uri.ends_with("body=Name%3A%20%0AEmail%3A%20%0A%0A"));
    }

    #[test]
    fn test_compose_escapes_reserved_characters() {
        let uri = compose(
            "to@example.com",
            "A & B",
            "a+b@c.com",
            "50% off?",
            "line1\nline2",
        );
        assert!(uri.contains("subject=50%25%20off%3F"));
        assert!(uri.contains("A%20%26%20B"));
        assert!(uri.contains("a%2Bb%40c.com"));
        assert!(uri.contains("line1%0Aline2"));
        // Raw reserved characters must not leak into the query
        let query = uri.split_once('?').unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
    }

    #[test]
    fn test_compose_preserves_unreserved_characters() {
        let uri = compose("to@example.com", "", "", "hi-there_ok.txt!", "");
        assert!(uri.contains("subject=hi-there_ok.txt!"));
    }
}
