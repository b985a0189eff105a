// HTTP API: form submission and health endpoints

pub mod handlers;
pub mod models;
pub mod routes;
