use serde::{Deserialize, Serialize};

/// Back-office user role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    ProcurementManager,
    Staff,
    Viewer,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::ProcurementManager => "ProcurementManager",
            UserRole::Staff => "Staff",
            UserRole::Viewer => "Viewer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::ProcurementManager => "Procurement Manager",
            UserRole::Staff => "Staff",
            UserRole::Viewer => "Viewer",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![
            UserRole::Admin,
            UserRole::ProcurementManager,
            UserRole::Staff,
            UserRole::Viewer,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Admin" => Some(UserRole::Admin),
            "ProcurementManager" => Some(UserRole::ProcurementManager),
            "Staff" => Some(UserRole::Staff),
            "Viewer" => Some(UserRole::Viewer),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
