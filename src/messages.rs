//! Fixed, client-facing outcome messages.

pub const LOGIN_SUCCESSFUL: &str = "Login Successful";
pub const WRONG_CREDENTIALS: &str = "Wrong credentials";
pub const ENTER_NECESSARY_FIELDS: &str = "Please enter the necessary fields";
pub const VALIDATION_FAILED: &str = "Validation Failed";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
