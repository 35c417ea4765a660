// src/sources/mod.rs
pub mod replay;
pub mod source_trait;
pub mod uniform;
