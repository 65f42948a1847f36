//! Provider utility functions
//!
//! Endpoint completion and API key masking.

/// OpenAI chat-completion endpoint suffix
pub const OPENAI_API_SUFFIX: &str = "/chat/completions";

/// Chat-completion URL for an OpenAI-compatible `base_url`
///
/// Trailing slashes are removed and [`OPENAI_API_SUFFIX`] appended, unless
/// the URL already ends with it.
///
/// # Example
/// ```
/// use gitr::llm::provider::utils::complete_endpoint;
///
/// assert_eq!(
///     complete_endpoint("https://api.openai.com/v1"),
///     "https://api.openai.com/v1/chat/completions"
/// );
///
/// assert_eq!(
///     complete_endpoint("https://api.deepseek.com/"),
///     "https://api.deepseek.com/chat/completions"
/// );
/// ```
pub fn complete_endpoint(base_url: &str) -> String {
    let url = base_url.trim_end_matches('/');
    if url.ends_with(OPENAI_API_SUFFIX) {
        return url.to_string();
    }
    format!("{}{}", url, OPENAI_API_SUFFIX)
}

/// Mask API key to prevent log leaks
///
/// # rule
/// - more than 8 characters: first 4 characters + `...` + last 4 characters
/// - otherwise: `****`
///
/// # Example
/// ```
/// use gitr::llm::provider::utils::mask_api_key;
///
/// assert_eq!(mask_api_key("sk-proj-abcdefgh"), "sk-p...efgh");
/// assert_eq!(mask_api_key("short"), "****");
/// assert_eq!(mask_api_key(""), "****");
/// ```
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("sk-proj-abcdefgh"), "sk-p...efgh");
        assert_eq!(mask_api_key("12345678"), "****");
        assert_eq!(mask_api_key(""), "****");
        assert_eq!(mask_api_key("123456789"), "1234...6789");
    }

    #[test]
    fn test_mask_api_key_non_ascii() {
        assert_eq!(mask_api_key("ключ-абвгдежз"), "ключ...дежз");
    }

    #[test]
    fn test_complete_endpoint_default_base() {
        assert_eq!(
            complete_endpoint("https://api.openai.com/v1"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            complete_endpoint("https://api.openai.com/v1/"),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_complete_endpoint_host_only() {
        assert_eq!(
            complete_endpoint("https://api.deepseek.com"),
            "https://api.deepseek.com/chat/completions"
        );
        assert_eq!(
            complete_endpoint("http://localhost:8080/"),
            "http://localhost:8080/chat/completions"
        );
    }

    #[test]
    fn test_complete_endpoint_already_complete() {
        assert_eq!(
            complete_endpoint("https://api.openai.com/v1/chat/completions"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            complete_endpoint("https://api.openai.com/v1/chat/completions/"),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_complete_endpoint_deep_gateway_path() {
        assert_eq!(
            complete_endpoint("https://gateway.ai.cloudflare.com/v1/acct/gw/openai"),
            "https://gateway.ai.cloudflare.com/v1/acct/gw/openai/chat/completions"
        );
        assert_eq!(
            complete_endpoint("https://proxy.internal/llm/openai/chat"),
            "https://proxy.internal/llm/openai/chat/chat/completions"
        );
    }
}
