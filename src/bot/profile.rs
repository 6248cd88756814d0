//! Profile snapshot comparison.
//!
//! Member updates (guild scope) and user updates (account scope) share one
//! diff routine. The two payload types expose different capability sets, so
//! both are adapted through the [`Profile`] trait instead of branching on
//! runtime types: a guild member carries roles and a boost timestamp, a bare
//! user does not.

use std::collections::HashSet;

use serenity::all::{Member, RoleId, Timestamp, User, UserId};

/// Capability view over one profile snapshot.
pub trait Profile {
    fn user_id(&self) -> UserId;
    fn display_name(&self) -> String;
    fn avatar_url(&self) -> String;
    /// Guild role set; `None` when the snapshot has no guild context.
    fn roles(&self) -> Option<&[RoleId]>;
    /// Boost timestamp; outer `None` when the snapshot has no guild context.
    fn premium_since(&self) -> Option<Option<Timestamp>>;
}

impl Profile for Member {
    fn user_id(&self) -> UserId {
        self.user.id
    }

    fn display_name(&self) -> String {
        // Inherent method: nickname, then global name, then username.
        Member::display_name(self).to_string()
    }

    fn avatar_url(&self) -> String {
        self.face()
    }

    fn roles(&self) -> Option<&[RoleId]> {
        Some(&self.roles)
    }

    fn premium_since(&self) -> Option<Option<Timestamp>> {
        Some(self.premium_since)
    }
}

impl Profile for User {
    fn user_id(&self) -> UserId {
        self.id
    }

    fn display_name(&self) -> String {
        // Inherent method: global name, then username.
        User::display_name(self).to_string()
    }

    fn avatar_url(&self) -> String {
        self.face()
    }

    fn roles(&self) -> Option<&[RoleId]> {
        None
    }

    fn premium_since(&self) -> Option<Option<Timestamp>> {
        None
    }
}

/// One reportable difference between two profile snapshots.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileChange {
    DisplayName { before: String, after: String },
    Roles { added: Vec<RoleId>, removed: Vec<RoleId> },
    Avatar { url: String },
    Boost { since: Option<Timestamp> },
}

/// Compares two snapshots of the same account and lists every change.
///
/// The four checks are independent: a single update event can produce zero,
/// one, or several entries. Role and boost checks only apply when both
/// snapshots carry guild scope; a role entry is emitted only when at least
/// one role was actually added or removed.
pub fn diff_profiles<P: Profile>(before: &P, after: &P) -> Vec<ProfileChange> {
    let mut changes = Vec::new();

    let old_name = before.display_name();
    let new_name = after.display_name();
    if old_name != new_name {
        changes.push(ProfileChange::DisplayName {
            before: old_name,
            after: new_name,
        });
    }

    if let (Some(old_roles), Some(new_roles)) = (before.roles(), after.roles()) {
        let old: HashSet<RoleId> = old_roles.iter().copied().collect();
        let new: HashSet<RoleId> = new_roles.iter().copied().collect();

        let added: Vec<RoleId> = new_roles.iter().filter(|r| !old.contains(*r)).copied().collect();
        let removed: Vec<RoleId> = old_roles
            .iter()
            .filter(|r| !new.contains(*r))
            .copied()
            .collect();

        if !added.is_empty() || !removed.is_empty() {
            changes.push(ProfileChange::Roles { added, removed });
        }
    }

    let old_face = before.avatar_url();
    let new_face = after.avatar_url();
    if old_face != new_face {
        changes.push(ProfileChange::Avatar { url: new_face });
    }

    if let (Some(old_boost), Some(new_boost)) = (before.premium_since(), after.premium_since()) {
        if old_boost != new_boost {
            changes.push(ProfileChange::Boost { since: new_boost });
        }
    }

    changes
}
