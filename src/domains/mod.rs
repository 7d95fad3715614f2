//! Domains module containing business logic organized by bounded contexts.

pub mod storage;
pub mod tools;
