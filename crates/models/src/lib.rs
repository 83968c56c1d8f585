pub mod errors;
pub mod db;
pub mod slug;
pub mod product;
