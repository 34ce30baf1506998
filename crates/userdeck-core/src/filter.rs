use crate::user::UserRecord;

/// Records whose name or email contains `term`, ignoring case, in their
/// original order. An empty term keeps every record. The term is not trimmed.
pub fn filter_users<'a>(users: &'a [UserRecord], term: &str) -> Vec<&'a UserRecord> {
    if term.is_empty() {
        return users.iter().collect();
    }
    let needle = term.to_lowercase();
    users.iter().filter(|user| user.matches_lowercase(&needle)).collect()
}
