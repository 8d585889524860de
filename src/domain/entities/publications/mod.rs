//! Publications Entity Module

pub mod publication;

pub use publication::Publication;
