mod customers;
mod health_check;

pub mod pages;

pub use customers::*;
pub use health_check::*;
