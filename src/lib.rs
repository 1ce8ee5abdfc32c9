//! DNS Controller
//!
//! A library for resolving and validating the configuration of a DNS
//! record manager that talks to providers such as Cloudflare.

pub mod config;
