//! taskdeck - Multi-user Task Management Backend
//!
//! Users create tasks, organize them with categories and tags, attach
//! subtasks, and authenticate with issued bearer tokens. The core is an
//! ownership-scoped CRUD and relationship-management layer over SQLite:
//! referential integrity between entities, per-user uniqueness, and
//! bidirectional attach/detach of tag↔task and category↔task pairs.
//!
//! # Module Organization
//!
//! - `api`: HTTP handlers using axum (thin translation layer)
//! - `auth`: token issuance/validation and identity storage
//! - `color`: hex color validation and normalization
//! - `config`: configuration loading from `taskdeck.toml`
//! - `db`: SQLite schema, pragmas, constraint classification
//! - `error`: error types and result aliases
//! - `model`: domain entities and the task status enum
//! - `repo`: per-entity data access contracts
//! - `service`: business rules over the repositories

pub mod api;
pub mod auth;
pub mod color;
pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod repo;
pub mod service;

pub use error::{Error, Result};
