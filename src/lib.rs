//! NutriLens Library
//!
//! Meal health scoring, food log persistence and weekly summaries.

pub mod build_info;
pub mod config;
pub mod db;
pub mod mcp;
pub mod models;
pub mod scoring;
pub mod summary;
pub mod tools;
