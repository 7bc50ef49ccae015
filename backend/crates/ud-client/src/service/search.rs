use ud_core::UserRecord;

/// Case-insensitive substring match on names and email, plain substring on
/// phone. A blank term matches everyone.
pub fn matches(user: &UserRecord, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    user.given_names.to_lowercase().contains(&term)
        || user.surnames.to_lowercase().contains(&term)
        || user.email.to_lowercase().contains(&term)
        || user.phone.contains(&term)
}

/// Keep the users matching `term`, preserving order
pub fn filter_users(users: &[UserRecord], term: &str) -> Vec<UserRecord> {
    users
        .iter()
        .filter(|u| matches(u, term))
        .cloned()
        .collect()
}
