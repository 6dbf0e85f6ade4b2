mod lookup;
mod register;
mod routes;

pub use lookup::*;
pub use register::*;
pub use routes::*;
