pub mod authz;
pub mod result;
