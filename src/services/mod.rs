// src/services/mod.rs

pub mod router;

pub use router::ChatRouter;
