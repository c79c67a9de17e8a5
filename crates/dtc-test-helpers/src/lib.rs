//! Shared test utilities for the DTC workspace.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Assertion macros for floats and keystroke sequences
//! - [`mock`] - A recording [`Transport`](dtc_upload::Transport)
//! - [`fixtures`] - Sample aircraft configurations
//! - [`prelude`] - Convenience re-exports
//!
//! Add it as a dev-dependency and import the prelude:
//!
//! ```rust,ignore
//! use dtc_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assertions;
pub mod must;
pub mod prelude;

#[cfg(feature = "mock")]
#[cfg_attr(docsrs, doc(cfg(feature = "mock")))]
pub mod mock;

#[cfg(feature = "fixtures")]
#[cfg_attr(docsrs, doc(cfg(feature = "fixtures")))]
pub mod fixtures;

pub use must::*;
