pub use sea_orm_migration::prelude::*;

mod m20211122_000001_create_users;
mod m20211122_000002_create_roles;
mod m20211123_155249_create_users_roles;
mod m20211130_000001_create_tokens;

pub use m20211122_000001_create_users::User;
pub use m20211122_000002_create_roles::Role;
pub use m20211123_155249_create_users_roles::UsersRoles;
pub use m20211130_000001_create_tokens::Token;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20211122_000001_create_users::Migration),
            Box::new(m20211122_000002_create_roles::Migration),
            Box::new(m20211123_155249_create_users_roles::Migration),
            Box::new(m20211130_000001_create_tokens::Migration),
        ]
    }
}
