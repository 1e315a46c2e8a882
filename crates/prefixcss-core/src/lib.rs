pub mod ast;
pub mod emitter;
pub mod generators;
pub mod loader;
pub mod prefixer;
pub mod tables;

pub use tables::PrefixTables;
