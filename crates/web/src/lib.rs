//! Memorycards web library.
//!
//! Server-rendered flashcards site: public browsing of card sets, session
//! authenticated two-step set creation, signup and login.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod validator;
