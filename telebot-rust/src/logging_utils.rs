/// Masks Telegram bot tokens embedded in strings, e.g. `/bot123456:ABC-DEF/getMe`.
/// Keeps the first 5 chars of the token and replaces the rest with `*****`.
/// Use this for ANY log output that may include request URLs.
pub fn sanitize_bot_token(input: &str) -> String {
    input
        .split("bot")
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                return part.to_string();
            }

            let token_len = part.chars().take_while(|c| is_token_char(*c)).count();
            let (token, rest) = part.split_at(token_len);
            if !looks_like_token(token) {
                return format!("bot{part}");
            }

            let sanitized_token = if token.len() > 5 {
                format!("{}*****{}", &token[..5], rest)
            } else {
                format!("{token}*****{rest}")
            };
            format!("bot{sanitized_token}")
        })
        .collect()
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ':' || c == '-' || c == '_'
}

// <numeric bot id>:<secret>
fn looks_like_token(candidate: &str) -> bool {
    match candidate.split_once(':') {
        Some((id, _)) => !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}
