use rand::Rng;

/// Characters allowed in agent access tokens (alphanumeric, excluding confusing chars)
const TOKEN_CHARS: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz23456789";
const TOKEN_PREFIX: &str = "pat_";
const TOKEN_BODY_LENGTH: usize = 40;

/// Generate a plaintext access token for widget embedding, e.g. `pat_Xk3...`.
pub fn generate_access_token() -> String {
    let mut rng = rand::thread_rng();
    let body: String = (0..TOKEN_BODY_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..TOKEN_CHARS.len());
            TOKEN_CHARS[idx] as char
        })
        .collect();
    format!("{TOKEN_PREFIX}{body}")
}

/// Cheap format check before hitting the database.
pub fn is_valid_access_token(token: &str) -> bool {
    token.strip_prefix(TOKEN_PREFIX).is_some_and(|body| {
        body.len() == TOKEN_BODY_LENGTH && body.bytes().all(|b| TOKEN_CHARS.contains(&b))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_token_format() {
        for _ in 0..100 {
            let token = generate_access_token();
            assert_eq!(token.len(), TOKEN_PREFIX.len() + TOKEN_BODY_LENGTH);
            assert!(is_valid_access_token(&token));
        }
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens: std::collections::HashSet<String> =
            (0..1000).map(|_| generate_access_token()).collect();
        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_is_valid_access_token() {
        assert!(!is_valid_access_token(""));
        assert!(!is_valid_access_token("pat_short"));
        assert!(!is_valid_access_token(&format!("tok_{}", "A".repeat(40))));
        assert!(!is_valid_access_token(&format!("pat_{}", "0".repeat(40))));
        assert!(is_valid_access_token(&format!("pat_{}", "A".repeat(40))));
    }
}
