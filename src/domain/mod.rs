//! Domain Layer
//!
//! Build recipes, freshness rules, and judge submission types, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - The build recipe
//! - `value_objects/` - Immutable value types (Invocation, Freshness, SubmissionSource)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system, processes, or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
