use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{users, users_roles};
use crate::errors::Error;
use crate::security::PasswordHasher;

/// `(id, name, email, mobile)`
pub const DEMO_USERS: [(i32, &str, &str, &str); 6] = [
    (1, "SuperAdmin", "admin@gmail.com", "7980657255"),
    (2, "User", "demo@gmail.com", "8758566854"),
    (3, "Dishen", "dishen@gmail.com", "8758566854"),
    (4, "Darsh", "darsh@gmail.com", "8758566854"),
    (5, "Deep", "deep@gmail.com", "8758566854"),
    (6, "D", "d@gmail.com", "8758566854"),
];

fn ids() -> impl Iterator<Item = i32> {
    DEMO_USERS.iter().map(|(id, ..)| *id)
}

/// Insert the demo users, replacing any rows that hold their ids
///
/// The password is hashed once and shared by every account.
pub async fn up(db: &DatabaseConnection, hasher: &PasswordHasher, password: &str) -> Result<(), Error> {
    down(db).await?;

    let hash = hasher.hash(password)?;
    let models = DEMO_USERS.iter().map(|(id, name, email, mobile)| users::ActiveModel {
        id: Set(*id),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password: Set(hash.clone()),
        mobile: Set(Some(mobile.to_string())),
        ..Default::default()
    });

    users::Entity::insert_many(models).exec(db).await?;

    Ok(())
}

/// Delete the demo users and whatever role assignments still point at them
pub async fn down(db: &DatabaseConnection) -> Result<(), Error> {
    users_roles::Entity::delete_many()
        .filter(users_roles::Column::UserId.is_in(ids()))
        .exec(db)
        .await?;

    users::Entity::delete_many()
        .filter(users::Column::Id.is_in(ids()))
        .exec(db)
        .await?;

    Ok(())
}
