//! IEC 61850 SCL model elements with EMF-style change notification.
//!
//! The main type is [`repr::ExtRef`], an SCL `ExtRef` element. Records are observable: they own a
//! [`notify::Notifier`] to which [`notify::Adapter`]s can be attached, and expose their features
//! reflectively through [`traits::EObject`].

#![forbid(unsafe_code)]

#[macro_use]
pub mod prelude;

pub mod base;
pub mod notify;
pub mod repr;
pub mod traits;
