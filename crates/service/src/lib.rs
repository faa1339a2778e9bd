pub mod candidate;
pub mod db;
pub mod errors;

mod test_support;
