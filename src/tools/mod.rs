//! NutriLens tools module
//!
//! Tool logic behind the MCP server, independent of the transport.

pub mod meals;
pub mod status;
pub mod validation;
pub mod weekly;
