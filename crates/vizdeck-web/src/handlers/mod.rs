pub mod deck;
pub mod page;
