//! # Jira API Endpoints
//!
//! Endpoint implementations used by weekplan: JQL search and the current
//! user lookup.

pub mod myself;
pub mod search;
