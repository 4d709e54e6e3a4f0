//! ClassMind API - Backend for university AI tutoring agents
//!
//! This crate provides the REST API for ClassMind, enabling:
//! - Professor agent creation, updates, soft deletion and activation
//! - Role-based ownership checks for professors, university admins and super admins
//! - Access tokens that let embedded widgets chat with an agent

pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
