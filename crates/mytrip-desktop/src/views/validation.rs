//! Form field checks shared by the login and signup views.

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Trims and lowercases an email address, rejecting obviously bad input.
pub fn normalize_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim().to_lowercase();

    if email.is_empty() {
        return Err("이메일을 입력해주세요");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err("올바른 이메일 형식이 아니에요");
    };

    if local.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return Err("올바른 이메일 형식이 아니에요");
    }

    if email.chars().any(char::is_whitespace) {
        return Err("올바른 이메일 형식이 아니에요");
    }

    Ok(email)
}

/// Checks password length.
pub fn check_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("비밀번호를 입력해주세요");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("비밀번호는 8자 이상이어야 해요");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            normalize_email("  Traveler@Example.com ").unwrap(),
            "traveler@example.com"
        );
    }

    #[test]
    fn test_rejects_bad_emails() {
        assert!(normalize_email("").is_err());
        assert!(normalize_email("traveler").is_err());
        assert!(normalize_email("@example.com").is_err());
        assert!(normalize_email("traveler@example").is_err());
        assert!(normalize_email("traveler@.com").is_err());
        assert!(normalize_email("trav eler@example.com").is_err());
    }

    #[test]
    fn test_check_password() {
        assert!(check_password("").is_err());
        assert!(check_password("short").is_err());
        assert!(check_password("long enough").is_ok());
        // Counted in characters, not bytes
        assert!(check_password("여행가고싶어요").is_err());
        assert!(check_password("여행가고싶어요!!").is_ok());
    }
}
