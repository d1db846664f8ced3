pub mod generate;
pub mod ico;
pub mod inspect;
