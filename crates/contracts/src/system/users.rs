use serde::{Deserialize, Serialize};

use crate::domain::common::{CollectionError, Record, RecordCollection};
use crate::enums::UserRole;
use crate::shared::modal::{EditContext, FormModel, ModalTexts};
use crate::shared::search::Searchable;
use crate::shared::table::{or_na, ColumnDef, Tabular};
use crate::shared::validation::{is_present, is_valid_email, FieldErrors};

pub const ID_PREFIX: &str = "U";

/// Back-office user shown on the admin dashboard. No credentials are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: UserRole,
}

impl Record for User {
    const KIND: &'static str = "user";

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, self.role.code()]
    }
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef { key: "id", title: "ID" },
    ColumnDef { key: "name", title: "Name" },
    ColumnDef { key: "email", title: "Email" },
    ColumnDef { key: "role", title: "Role" },
    ColumnDef { key: "actions", title: "Actions" },
];

impl Tabular for User {
    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn empty_message() -> &'static str {
        "No users found."
    }

    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            or_na(&self.name),
            or_na(&self.email),
            self.role.display_name().to_string(),
        ]
    }
}

/// Remove a user unless it is the protected main admin.
pub fn delete_user(
    users: &mut RecordCollection<User>,
    id: &str,
    protected_id: &str,
) -> Result<User, CollectionError> {
    if id == protected_id {
        log::warn!("Refusing to delete protected user {}", id);
        return Err(CollectionError::ProtectedRecord { id: id.to_string() });
    }
    users.remove(id)
}

pub const PROTECTED_DELETE_MESSAGE: &str = "Cannot delete main admin user.";

// ============================================================================
// Modal form
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    /// Role code as chosen in the select; empty until chosen
    pub role: String,
}

static TEXTS: ModalTexts = ModalTexts {
    add_title: "Add User",
    edit_title: "Edit User",
    added: "User added!",
    updated: "User updated!",
    not_found: "User not found.",
    invalid: "Fix errors.",
};

impl FormModel for UserForm {
    type Record = User;

    fn texts() -> &'static ModalTexts {
        &TEXTS
    }

    fn from_record(record: &User) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.code().to_string(),
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(is_present(&self.name), "name", "Name required.");
        errors.check(
            is_present(&self.email) && is_valid_email(self.email.trim()),
            "email",
            "Valid email required.",
        );
        errors.check(
            UserRole::from_code(&self.role).is_some(),
            "role",
            "Role required.",
        );
        errors.into_result()
    }

    fn create(&self, ctx: &mut EditContext<'_>) -> Option<User> {
        let role = UserRole::from_code(&self.role)?;
        Some(User {
            id: ctx.ids.next_id(ID_PREFIX),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role,
        })
    }

    fn apply(&self, record: &mut User, _ctx: &mut EditContext<'_>) {
        record.name = self.name.trim().to_string();
        record.email = self.email.trim().to_string();
        if let Some(role) = UserRole::from_code(&self.role) {
            record.role = role;
        }
    }
}

pub fn sample_users() -> Vec<User> {
    let user = |id: &str, name: &str, email: &str, role| User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
    };
    vec![
        user("U001", "Admin User", "admin@swiftgoods.com", UserRole::Admin),
        user("U002", "Priya Khan", "priya.k@swiftgoods.com", UserRole::ProcurementManager),
        user("U003", "Mark Lee", "mark.l@swiftgoods.com", UserRole::Staff),
        user("U004", "View Only", "viewer@swiftgoods.com", UserRole::Viewer),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::id::ClockIds;
    use crate::shared::modal::{Feedback, ModalEditor};
    use crate::shared::search::search;
    use crate::shared::storage::MemoryStorage;
    use chrono::NaiveDate;

    #[test]
    fn test_search_matches_role() {
        let users = sample_users();
        let found = search(&users, "procurement");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "U002");
        assert_eq!(search(&users, "SWIFTGOODS").len(), 4);
    }

    #[test]
    fn test_protected_user_cannot_be_deleted() {
        let mut users = RecordCollection::in_memory("swiftGoodsUsers", sample_users());
        assert_eq!(
            delete_user(&mut users, "U001", "U001"),
            Err(CollectionError::ProtectedRecord { id: "U001".to_string() })
        );
        assert_eq!(users.len(), 4);
        assert_eq!(delete_user(&mut users, "U003", "U001").unwrap().name, "Mark Lee");
        assert_eq!(users.len(), 3);
    }

    #[test]
    fn test_user_modal_messages() {
        let storage = MemoryStorage::new();
        let mut users = RecordCollection::load(&storage, "swiftGoodsUsers", "swiftGoodsUsers.rev", sample_users());
        let mut ids = ClockIds::new(1_716_200_000_777, 42);
        let mut ctx = EditContext {
            today: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            ids: &mut ids,
        };
        let mut modal = ModalEditor::<UserForm>::new();

        modal.open_add();
        modal.form.email = "nobody".to_string();
        modal.submit(&mut users, &storage, &mut ctx).unwrap_err();
        assert_eq!(modal.feedback(), Some(&Feedback::error("Fix errors.")));
        assert_eq!(modal.errors().get("name"), Some("Name required."));
        assert_eq!(modal.errors().get("email"), Some("Valid email required."));
        assert_eq!(modal.errors().get("role"), Some("Role required."));

        modal.form.name = "Sara Tesfaye".to_string();
        modal.form.email = "sara@swiftgoods.com".to_string();
        modal.form.role = "Staff".to_string();
        let done = modal.submit(&mut users, &storage, &mut ctx).unwrap();
        assert_eq!(done.id, "U00077742");
        assert_eq!(modal.feedback(), Some(&Feedback::success("User added!")));

        let sara = users.get(&done.id).unwrap().clone();
        modal.open_edit(&sara);
        modal.form.role = "Viewer".to_string();
        modal.submit(&mut users, &storage, &mut ctx).unwrap();
        assert_eq!(users.get(&done.id).unwrap().role, UserRole::Viewer);
        assert_eq!(modal.feedback(), Some(&Feedback::success("User updated!")));
    }

    #[test]
    fn test_role_cell_uses_display_name() {
        assert_eq!(sample_users()[1].cells()[3], "Procurement Manager");
    }
}
