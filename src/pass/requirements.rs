//! Composition rule for candidate passwords.

use super::charset::Group;

/// Groups that must be represented for a password to be accepted.
pub const MIN_GROUPS: usize = 3;

/// Number of character groups with at least one representative.
pub fn represented_groups(password: &str) -> usize {
    let mut seen = [false; Group::ALL.len()];
    for group in password.bytes().filter_map(Group::of) {
        seen[group as usize] = true;
    }
    seen.iter().filter(|&&s| s).count()
}

/// At most one of the four groups may be absent.
pub fn meets_requirements(password: &str) -> bool {
    represented_groups(password) >= MIN_GROUPS
}
