//! Process-level services shared by the binaries.

pub mod logger;
