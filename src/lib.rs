#![allow(non_snake_case)]

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod util;
