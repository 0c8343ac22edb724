pub mod result;
pub mod role;
pub mod signin;
pub mod user;
