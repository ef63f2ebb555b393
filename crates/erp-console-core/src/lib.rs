//! # ERP Console Core
//!
//! Shared types for the ERP administration console.
//!
//! This crate provides:
//! - Configuration loading and validation (JSON5 format)
//! - The declarative navigation table and its derived views
//! - Bearer token and session context types

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod navigation;
pub mod session;

pub use config::{Config, ConfigError};
pub use navigation::{Badge, Icon, NavEntry, NavigationTable, SidebarConfig, SidebarItem};
pub use session::{BearerToken, SessionContext};
