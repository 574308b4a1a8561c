//! Divorce Templates - template content for divorce, dissolution and
//! judicial separation case documents.
//!
//! Each document type has a mapper that reads the case and produces the flat
//! placeholder dictionary its template is filled from. A renderer port hands
//! that dictionary to the document rendering service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
