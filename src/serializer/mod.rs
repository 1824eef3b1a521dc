pub mod dialect_config;
pub use dialect_config::*;

pub mod binds;
pub use binds::*;

pub mod table_aliases;
pub use table_aliases::*;

pub mod serializable;
pub use serializable::*;
