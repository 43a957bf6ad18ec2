pub mod dom;
pub mod escape;
