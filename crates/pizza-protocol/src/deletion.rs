//! Delete-user confirmation flow
//!
//! ```text
//! Idle --stage--> Staged --cancel--> Idle
//!                   |
//!                 begin
//!                   v
//!               Deleting --complete--> Idle
//!                   |
//!                  fail --> Staged
//! ```

use pizza_types::{User, UserId};

/// Element id of the delete-user confirmation modal
pub const DELETE_USER_MODAL: &str = "hs-delete-user-modal";

/// State of the delete-user confirmation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    /// Nothing staged, dialog closed
    #[default]
    Idle,
    /// A user awaits confirmation, dialog open
    Staged(User),
    /// The delete call for this user is in flight
    Deleting(User),
}

impl DeleteFlow {
    /// Stage `user` for deletion
    ///
    /// Replaces any previously staged user. Ignored while a delete is in
    /// flight; returns whether the user was staged.
    pub fn stage(&mut self, user: User) -> bool {
        if self.is_deleting() {
            return false;
        }
        *self = Self::Staged(user);
        true
    }

    /// Drop the staged user without deleting
    ///
    /// Returns the user that was staged. Ignored while a delete is in flight.
    pub fn cancel(&mut self) -> Option<User> {
        match std::mem::take(self) {
            Self::Staged(user) => Some(user),
            Self::Deleting(user) => {
                *self = Self::Deleting(user);
                None
            }
            Self::Idle => None,
        }
    }

    /// Start deleting the staged user
    ///
    /// Returns the id to delete, or `None` when nothing with an id is staged
    /// or a delete is already running. State is unchanged on `None`.
    pub fn begin(&mut self) -> Option<UserId> {
        let id = match self {
            Self::Staged(user) => user.id?,
            Self::Idle | Self::Deleting(_) => return None,
        };
        if let Self::Staged(user) = std::mem::take(self) {
            *self = Self::Deleting(user);
        }
        Some(id)
    }

    /// The delete call failed; the user goes back to awaiting confirmation
    pub fn fail(&mut self) {
        if let Self::Deleting(user) = std::mem::take(self) {
            *self = Self::Staged(user);
        }
    }

    /// The delete finished; returns the deleted user
    pub fn complete(&mut self) -> Option<User> {
        match std::mem::take(self) {
            Self::Deleting(user) => Some(user),
            other => {
                *self = other;
                None
            }
        }
    }

    /// The user shown in the confirmation dialog
    pub const fn pending(&self) -> Option<&User> {
        match self {
            Self::Staged(user) | Self::Deleting(user) => Some(user),
            Self::Idle => None,
        }
    }

    /// Whether a delete call is in flight
    pub const fn is_deleting(&self) -> bool {
        matches!(self, Self::Deleting(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_types::{Role, RoleAssignment};
    use pretty_assertions::assert_eq;

    fn diner() -> User {
        User {
            id: Some(2),
            name: "pizza diner".to_string(),
            email: "d@jwt.com".to_string(),
            roles: vec![RoleAssignment::new(Role::Diner)],
        }
    }

    #[test]
    fn test_idle_has_nothing_to_delete() {
        let mut flow = DeleteFlow::default();
        assert_eq!(flow.begin(), None);
        assert_eq!(flow, DeleteFlow::Idle);
        assert!(flow.pending().is_none());
    }

    #[test]
    fn test_stage_then_cancel() {
        let mut flow = DeleteFlow::Idle;
        assert!(flow.stage(diner()));
        assert_eq!(flow.pending(), Some(&diner()));

        assert_eq!(flow.cancel(), Some(diner()));
        assert_eq!(flow, DeleteFlow::Idle);
    }

    #[test]
    fn test_confirm_happy_path() {
        let mut flow = DeleteFlow::Idle;
        flow.stage(diner());

        assert_eq!(flow.begin(), Some(2));
        assert!(flow.is_deleting());
        assert_eq!(flow.pending(), Some(&diner()));

        assert_eq!(flow.complete(), Some(diner()));
        assert_eq!(flow, DeleteFlow::Idle);
    }

    #[test]
    fn test_user_without_id_cannot_be_deleted() {
        let mut user = diner();
        user.id = None;

        let mut flow = DeleteFlow::Idle;
        flow.stage(user.clone());

        assert_eq!(flow.begin(), None);
        assert_eq!(flow, DeleteFlow::Staged(user));
    }

    #[test]
    fn test_second_begin_is_ignored_while_deleting() {
        let mut flow = DeleteFlow::Idle;
        flow.stage(diner());
        assert_eq!(flow.begin(), Some(2));

        assert_eq!(flow.begin(), None);
        assert!(flow.is_deleting());
    }

    #[test]
    fn test_stage_and_cancel_ignored_while_deleting() {
        let mut flow = DeleteFlow::Idle;
        flow.stage(diner());
        flow.begin();

        let mut other = diner();
        other.id = Some(9);
        assert!(!flow.stage(other));
        assert_eq!(flow.cancel(), None);
        assert_eq!(flow, DeleteFlow::Deleting(diner()));
    }

    #[test]
    fn test_failure_returns_to_staged() {
        let mut flow = DeleteFlow::Idle;
        flow.stage(diner());
        flow.begin();
        flow.fail();

        assert_eq!(flow, DeleteFlow::Staged(diner()));
        assert_eq!(flow.begin(), Some(2));
    }

    #[test]
    fn test_complete_outside_deleting_is_noop() {
        let mut flow = DeleteFlow::Idle;
        flow.stage(diner());
        assert_eq!(flow.complete(), None);
        assert_eq!(flow, DeleteFlow::Staged(diner()));
    }
}
