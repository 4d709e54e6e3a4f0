pub mod access_token;

pub use access_token::{generate_access_token, is_valid_access_token};
