use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{roles, users_roles};
use crate::errors::Error;

/// `(id, name)`
pub const DEMO_ROLES: [(i32, &str); 2] = [(1, "superadmin"), (2, "user")];

/// `(user_id, role_id)`: the first demo user is the super admin
pub const DEMO_ASSIGNMENTS: [(i32, i32); 6] = [(1, 1), (2, 2), (3, 2), (4, 2), (5, 2), (6, 2)];

fn ids() -> impl Iterator<Item = i32> {
    DEMO_ROLES.iter().map(|(id, _)| *id)
}

/// Insert the demo roles and assign them; the demo users must exist
pub async fn up(db: &DatabaseConnection) -> Result<(), Error> {
    let models = DEMO_ROLES.iter().map(|(id, name)| roles::ActiveModel {
        id: Set(*id),
        name: Set(name.to_string()),
        ..Default::default()
    });
    roles::Entity::insert_many(models).exec(db).await?;

    let assignments = DEMO_ASSIGNMENTS
        .iter()
        .map(|(user_id, role_id)| users_roles::ActiveModel {
            user_id: Set(Some(*user_id)),
            role_id: Set(Some(*role_id)),
            ..Default::default()
        });
    users_roles::Entity::insert_many(assignments).exec(db).await?;

    Ok(())
}

/// Remove the demo roles along with every assignment that uses them
pub async fn down(db: &DatabaseConnection) -> Result<(), Error> {
    users_roles::Entity::delete_many()
        .filter(users_roles::Column::RoleId.is_in(ids()))
        .exec(db)
        .await?;

    roles::Entity::delete_many()
        .filter(roles::Column::Id.is_in(ids()))
        .exec(db)
        .await?;

    Ok(())
}
