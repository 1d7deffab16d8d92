//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod github_model;
pub mod repository_model;
