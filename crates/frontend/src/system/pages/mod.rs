pub mod forbidden;
pub mod login;
