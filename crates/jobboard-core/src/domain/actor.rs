//! Identity of the caller of a service operation

use jobboard_shared::EntityId;

use super::user::Role;

/// Who is performing an operation, taken from the verified bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: EntityId,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: EntityId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
