//! FlavorForge Backend
//!
//! A thin HTTP relay that turns a structured recipe request (ingredients,
//! cuisines, constraints) into three AI-generated fusion recipes, each
//! annotated with a food image obtained through a fallback chain, backed by
//! the Google Gemini generative API.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
