use crate::UserAccount;

fn account(first: Option<&str>, last: Option<&str>) -> UserAccount {
    UserAccount {
        id: 1,
        username: "jdoe".to_string(),
        first_name: first.map(String::from),
        last_name: last.map(String::from),
        email: None,
    }
}

#[test]
fn test_option_label_with_full_name() {
    assert_eq!(
        account(Some("John"), Some("Doe")).option_label(),
        "jdoe (John Doe)"
    );
}

#[test]
fn test_option_label_first_name_only() {
    assert_eq!(account(Some("John"), None).option_label(), "jdoe (John)");
}

#[test]
fn test_option_label_bare_username() {
    assert_eq!(account(None, None).option_label(), "jdoe");
}
