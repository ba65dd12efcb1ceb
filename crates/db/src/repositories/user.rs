//! User repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use aerodesk_core::auth::UserType;
use aerodesk_shared::auth::UserInfo;
use aerodesk_shared::types::UserId;

use crate::entities::users;

/// User repository for account lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: UserId) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id.into_inner()).one(&self.db).await
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails, e.g. on a duplicate email.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        user_type: UserType,
    ) -> Result<users::Model, DbErr> {
        let user = users::ActiveModel {
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            user_type: Set(user_type.into()),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        user.insert(&self.db).await
    }
}

impl users::Model {
    /// Returns the domain user type.
    #[must_use]
    pub fn domain_user_type(&self) -> UserType {
        self.user_type.into()
    }

    /// Returns the public view of the user.
    #[must_use]
    pub fn to_user_info(&self) -> UserInfo {
        UserInfo {
            id: UserId::new(self.id),
            name: self.name.clone(),
            email: self.email.clone(),
            user_type: self.domain_user_type().as_str().to_string(),
        }
    }
}
