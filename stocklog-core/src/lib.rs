#![warn(missing_docs)]
//! Domain types and storage ports for the stocklog inventory service.
//!
//! The service records inventory movements (purchases and sales) for named
//! products, maintains a running stock level per product, and enforces a
//! monthly purchase cap. This crate holds everything that is independent of
//! any particular storage engine or transport: the record types, the pure
//! validation and arithmetic rules, and the traits a storage backend
//! implements.

/// Core domain models.
///
/// These are plain data structures with minimal behavior attached; the
/// storage and HTTP adapters translate to and from them at their own
/// boundaries.
pub mod models;

/// Interface traits implemented by storage backends.
///
/// These are the "ports" in the hexagonal layout: they define the contract
/// between the movement-registration logic and whatever engine persists
/// products, history, and stock, without naming an implementation.
pub mod ports;

/// Pure request-validation rules: strict date parsing, movement operation
/// checks, and the monthly purchase cap.
pub mod validation;
