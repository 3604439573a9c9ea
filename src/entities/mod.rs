//! sea-orm entities for the tables created by `gatehouse-migration`.

pub mod roles;
pub mod tokens;
pub mod users;
pub mod users_roles;
