use chrono::{TimeDelta, Utc};
use sea_orm::Set;
use sea_orm::prelude::*;
use uuid::Uuid;

use crate::entities::users::{ActiveModel, Column, Entity, Model};
use crate::entities::{roles, tokens, users_roles};

impl Model {
    /// Exact-match lookup on the login key
    pub async fn find_by_email<T: ToString>(
        db: &DatabaseConnection,
        email: T,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email.to_string()))
            .one(db)
            .await
            .inspect_err(|e| ::tracing::error!(error = %e, "Failed to find user by email"))
    }

    pub async fn roles(&self, db: &DatabaseConnection) -> Result<Vec<roles::Model>, DbErr> {
        let query = roles::Entity::find()
            .inner_join(users_roles::Entity)
            .filter(users_roles::Column::UserId.eq(self.id));

        query.all(db).await
    }

    /// Create a session token that expires `lifetime` from now
    pub async fn issue_token(
        &self,
        db: &DatabaseConnection,
        lifetime: TimeDelta,
    ) -> Result<tokens::Model, DbErr> {
        let token = tokens::Model {
            id: Uuid::new_v4(),
            user_id: self.id,
            expired_at: Some(Utc::now().naive_utc() + lifetime),
        };

        token.store(db).await
    }

    /// Replace the stored password hash
    pub async fn update_password(self, db: &DatabaseConnection, hash: String) -> Result<Self, DbErr> {
        let mut user: ActiveModel = self.into();
        user.password = Set(hash);
        user.updated_at = Set(Some(Utc::now().naive_utc()));

        user.update(db).await
    }
}
