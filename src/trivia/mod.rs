//! Trivia question API: question and category CRUD, search, pagination,
//! and quiz play.

pub mod models;
pub mod openapi;
pub mod routes;
pub mod storage;
