mod bulk_delete_users;
mod reset_password;

pub use bulk_delete_users::*;
pub use reset_password::*;
