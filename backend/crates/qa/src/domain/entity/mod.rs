//! Entity Module

pub mod answer;
pub mod question;
