pub mod database;
pub mod repositories;
pub mod search;
pub mod security;
pub mod storage;
pub mod time;
