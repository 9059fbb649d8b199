//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id) and the password policy
//! - Text canonicalisation used for duplicate detection
//! - Secret generation and decoding

pub mod crypto;
pub mod password;
pub mod text;
