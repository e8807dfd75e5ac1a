use domain::{DomainResult, Password, User};

/// Sample users served by the demo. Secrets are hashed when the store is built.
///
/// | username | password  | disabled |
/// |----------|-----------|----------|
/// | johndoe  | `secret`  | no       |
/// | alice    | `secret2` | yes      |
pub fn sample_users() -> DomainResult<Vec<User>> {
    Ok(vec![
        User::new("johndoe", Password::new("secret")?.into_string())
            .with_full_name("John Doe")
            .with_email("johndoe@example.com"),
        User::new("alice", Password::new("secret2")?.into_string())
            .with_full_name("Alice Wonderson")
            .with_email("alice@example.com")
            .disabled(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_passwords_verify() {
        let users = sample_users().unwrap();

        let johndoe = users.iter().find(|u| u.username == "johndoe").unwrap();
        assert!(Password::from_hash(johndoe.password_hash.as_str()).verify("secret"));
        assert!(johndoe.is_active());

        let alice = users.iter().find(|u| u.username == "alice").unwrap();
        assert!(Password::from_hash(alice.password_hash.as_str()).verify("secret2"));
        assert!(!alice.is_active());
    }
}
