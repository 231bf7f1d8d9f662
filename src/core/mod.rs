pub mod basket;
pub mod catalog;
pub mod history;
pub mod normalize;
pub mod trends;
