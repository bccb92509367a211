pub mod email;
pub mod model;
pub mod rest;
pub mod service;

mod tests;
