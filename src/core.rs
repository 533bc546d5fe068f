pub mod catalog;
pub mod command;
pub mod domain;
pub mod repository;
