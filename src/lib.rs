#![recursion_limit="128"]

#[macro_use] extern crate error_chain;
#[macro_use] extern crate log;

pub mod schema;
pub mod models;
pub mod forum;
pub mod db;
pub mod config;
pub mod errors;
