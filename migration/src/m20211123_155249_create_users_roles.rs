use sea_orm_migration::prelude::*;

use crate::{m20211122_000001_create_users::User, m20211122_000002_create_roles::Role};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys keep the database default referential action: no cascade.
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(UsersRoles::Table)
                    .col(
                        ColumnDef::new(UsersRoles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UsersRoles::RoleId).integer().null())
                    .col(ColumnDef::new(UsersRoles::UserId).integer().null())
                    .col(
                        ColumnDef::new(UsersRoles::CreatedAt)
                            .timestamp()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UsersRoles::UpdatedAt)
                            .timestamp()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_roles_role_id")
                            .from(UsersRoles::Table, UsersRoles::RoleId)
                            .to(Role::Table, Role::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_roles_user_id")
                            .from(UsersRoles::Table, UsersRoles::UserId)
                            .to(User::Table, User::Id),
                    )
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(UsersRoles::Table)
                    .col(UsersRoles::UserId)
                    .name("idx_users_roles_user_id")
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(UsersRoles::Table)
                    .col(UsersRoles::RoleId)
                    .name("idx_users_roles_role_id")
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(UsersRoles::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UsersRoles {
    #[sea_orm(iden = "users_roles")]
    Table,
    Id,
    RoleId,
    UserId,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}
