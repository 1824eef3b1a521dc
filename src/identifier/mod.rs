pub mod ident;
pub use ident::*;

pub mod sql_table;
pub use sql_table::*;

pub mod table_identifier;
pub use table_identifier::*;

pub mod column_identifier;
pub use column_identifier::*;
