pub mod attachment;
pub mod issue;
pub mod project;
pub mod user;
