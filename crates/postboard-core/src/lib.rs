//! # Postboard Core
//!
//! The domain layer of Postboard: the post entity, form validation, the
//! persistence ports and the controller that ties them together.
//! This crate performs no I/O of its own; storage arrives through [`ports`].

pub mod controller;
pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use controller::{FormMode, PostController, PostForm, SubmitOutcome};
pub use domain::{Post, PostId};
pub use error::{Field, FieldError, StoreError, ValidationErrors};
