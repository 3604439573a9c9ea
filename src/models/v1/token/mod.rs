use sea_orm::prelude::*;

use crate::entities::tokens::{ActiveModel, Model};

impl Model {
    pub async fn store(&self, db: &DatabaseConnection) -> Result<Self, DbErr> {
        ActiveModel::from(self.clone()).insert(db).await
    }
}

#[cfg(test)]
impl Model {
    /// Token by id, provided it has not expired yet
    pub async fn find_active(db: &DatabaseConnection, id: Uuid) -> Result<Option<Self>, DbErr> {
        use chrono::Utc;
        use sea_orm::Condition;

        use crate::entities::tokens::{Column, Entity};

        Entity::find()
            .filter(Column::Id.eq(id))
            .filter(
                Condition::any()
                    .add(Column::ExpiredAt.gt(Utc::now().naive_utc()))
                    .add(Column::ExpiredAt.is_null()),
            )
            .one(db)
            .await
    }
}
