use crate::config;

/// `tel:` URI with every non-digit stripped from `number`.
pub fn tel_uri(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("tel:{}", digits)
}

/// WhatsApp deep link for `recipient`. An empty or missing message falls back
/// to the default greeting.
pub fn chat_link(recipient: &str, message: Option<&str>) -> String {
    let message = match message {
        Some(message) if !message.is_empty() => message,
        _ => config::DEFAULT_CHAT_MESSAGE,
    };
    format!("https://wa.me/{}?text={}", recipient, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_uri_strips_non_digits() {
        assert_eq!(tel_uri("+5582999532934"), "tel:5582999532934");
        assert_eq!(tel_uri("(82) 9 9953-2934"), "tel:82999532934");
    }

    #[test]
    fn chat_link_uses_default_greeting() {
        let link = chat_link("5582999532934", None);
        let expected = format!(
            "https://wa.me/5582999532934?text={}",
            urlencoding::encode(config::DEFAULT_CHAT_MESSAGE)
        );
        assert_eq!(link, expected);
        assert!(link.contains("Ol%C3%A1"));
        assert!(link.contains("%20PrimeCode%20Solutions."));
    }

    #[test]
    fn chat_link_encodes_custom_message() {
        let link = chat_link("123", Some("a b&c"));
        assert_eq!(link, "https://wa.me/123?text=a%20b%26c");
    }

    #[test]
    fn empty_message_falls_back() {
        assert_eq!(chat_link("1", Some("")), chat_link("1", None));
    }
}
