pub mod categories;
pub mod items;
