//! 用户管理

pub mod handler;
pub mod model;
pub mod routes;
pub mod service;
pub mod store;
