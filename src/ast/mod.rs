pub mod literal;
pub use literal::*;

pub mod operators;
pub use operators::*;

pub mod expression;
pub use expression::*;

pub mod join;
pub use join::*;

pub mod data_type;
pub use data_type::*;

pub mod foreign_key;
pub use foreign_key::*;

pub mod column_definition;
pub use column_definition::*;

pub mod table_constraint;
pub use table_constraint::*;

pub mod create_table;
pub use create_table::*;

pub mod create_index;
pub use create_index::*;

pub mod delete;
pub use delete::*;

pub mod statement;
pub use statement::*;
