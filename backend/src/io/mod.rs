//! # IO Module
//!
//! Interface layer exposing the novena service over HTTP: server-rendered
//! HTML pages for people and a small JSON API for scripts.

pub mod rest;

pub use rest::*;
