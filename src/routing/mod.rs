pub mod guard;
pub mod probe;
pub mod table;
