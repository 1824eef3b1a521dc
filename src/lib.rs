//! Composable SQL syntax nodes that render to text plus an ordered list of
//! bound values, with per-scope table alias substitution.
//!
//! ```
//! use sqlnode::{column, identifier, join, render, table, Expression, JoinMethod};
//!
//! let moons = table(identifier("moons"));
//! let planets = table(identifier("planets"));
//!
//! let predicate = Expression::column(column(Some(moons.clone()), identifier("planet_id")))
//!     .eq(Expression::column(column(Some(planets), identifier("id"))));
//! let clause = join(JoinMethod::Inner, moons, predicate, Some(identifier("m")));
//!
//! assert_eq!(render(&clause).sql, "INNER JOIN moons AS m ON m.planet_id = planets.id");
//! ```

pub mod sql_error;
pub use sql_error::*;

pub mod serializer;
pub use serializer::*;

pub mod identifier;
pub use identifier::*;

pub mod ast;
pub use ast::*;
