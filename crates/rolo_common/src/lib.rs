//! Rolo shared library
//!
//! Record model, contact book, JSON store, and display helpers used by the
//! `rolo` binary.

pub mod book;
pub mod contact;
pub mod display;
pub mod error;
pub mod store;

pub use book::ContactBook;
pub use contact::Contact;
pub use error::RoloError;
pub use store::ContactStore;
