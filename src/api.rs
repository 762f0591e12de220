mod declaration;
mod schema;

pub use declaration::*;
pub use schema::*;
