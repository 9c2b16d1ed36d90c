//! # API crate — client for the partners REST backend
//!
//! This crate is the data-access layer the frontends call. The backend itself
//! is an existing external service; everything here is the client side of it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`PartnersApi`] — HTTP client for the partner collection (list, multipart create, delete) |
//! | [`config`] | Resolution of the externally supplied API base URL |
//! | [`models`] | Wire models ([`Partner`], [`PartnerImage`]) and the staged upload payload ([`ImageUpload`]) |

pub mod client;
pub mod config;
pub mod models;

pub use client::{ApiError, PartnersApi};
pub use models::{ImageUpload, Partner, PartnerImage};
