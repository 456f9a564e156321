pub mod config;
pub mod id;
pub mod modal;
pub mod search;
pub mod storage;
pub mod table;
pub mod validation;
