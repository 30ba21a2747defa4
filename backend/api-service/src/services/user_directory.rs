//! Fixed, in-memory user directory.
//!
//! The dataset lives in a static, so every request and every server
//! instance sees the same users in the same order.

use crate::models::{Role, User};

static USERS: [User; 3] = [
    User {
        id: 1,
        name: "Alice Johnson",
        email: "alice@example.com",
        role: Role::Admin,
    },
    User {
        id: 2,
        name: "Bob Smith",
        email: "bob@example.com",
        role: Role::User,
    },
    User {
        id: 3,
        name: "Charlie Brown",
        email: "charlie@example.com",
        role: Role::User,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct UserDirectory;

impl UserDirectory {
    pub fn all(&self) -> &'static [User] {
        &USERS
    }

    pub fn find(&self, id: i64) -> Option<&'static User> {
        USERS.iter().find(|user| user.id == id)
    }

    /// Looks up a raw path segment; unparsable input matches nothing.
    pub fn find_raw(&self, raw_id: &str) -> Option<&'static User> {
        parse_user_id(raw_id).and_then(|id| self.find(id))
    }
}

/// Parses an id the way `parseInt` does without a radix: leading whitespace
/// and an optional sign are skipped, a `0x`/`0X` prefix switches to base 16,
/// then the longest run of digits in that base is taken and any trailing
/// characters are ignored. Returns `None` when no digits lead.
pub fn parse_user_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits_len = rest
        .chars()
        .take_while(|c| c.is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }

    // Overflowing values cannot match a directory entry anyway.
    let value = i64::from_str_radix(&rest[..digits_len], radix).ok()?;
    Some(if negative { -value } else { value })
}
