use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::auth::errors::ScopeError;
use crate::domain::auth::models::Role;

/// Permission scope, closed set.
///
/// String form is `verb:resource`, the shape embedded in access tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    ReadSimulations,
    WriteSimulations,
    CompareSimulations,
    ExportSimulations,
    DeleteSimulations,
    ReadUsers,
    ManageUsers,
}

impl Scope {
    /// Wire name of the scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::ReadSimulations => "read:simulations",
            Scope::WriteSimulations => "write:simulations",
            Scope::CompareSimulations => "compare:simulations",
            Scope::ExportSimulations => "export:simulations",
            Scope::DeleteSimulations => "delete:simulations",
            Scope::ReadUsers => "read:users",
            Scope::ManageUsers => "manage:users",
        }
    }
}

impl FromStr for Scope {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read:simulations" => Ok(Scope::ReadSimulations),
            "write:simulations" => Ok(Scope::WriteSimulations),
            "compare:simulations" => Ok(Scope::CompareSimulations),
            "export:simulations" => Ok(Scope::ExportSimulations),
            "delete:simulations" => Ok(Scope::DeleteSimulations),
            "read:users" => Ok(Scope::ReadUsers),
            "manage:users" => Ok(Scope::ManageUsers),
            other => Err(ScopeError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scopes granted by a role.
///
/// Total over the closed `Role` set; the match is exhaustive, so adding a
/// role without deciding its scopes fails to compile.
pub fn scopes_for(role: Role) -> &'static [Scope] {
    match role {
        Role::User => &[
            Scope::ReadSimulations,
            Scope::WriteSimulations,
            Scope::CompareSimulations,
        ],
        Role::Admin => &[
            Scope::ReadSimulations,
            Scope::WriteSimulations,
            Scope::CompareSimulations,
            Scope::ExportSimulations,
            Scope::DeleteSimulations,
            Scope::ReadUsers,
            Scope::ManageUsers,
        ],
    }
}

/// Deduplicated union of scopes across a role set.
pub fn scope_union(roles: &BTreeSet<Role>) -> BTreeSet<Scope> {
    roles
        .iter()
        .flat_map(|role| scopes_for(*role).iter().copied())
        .collect()
}
