pub mod backend;
pub mod translator;
