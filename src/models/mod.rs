// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod common;
pub mod excursion;
pub mod message;
pub mod page;
pub mod response;
pub mod review;
pub mod tour;

pub use common::*;
pub use excursion::*;
pub use message::*;
pub use page::*;
pub use response::*;
pub use review::*;
pub use tour::*;
