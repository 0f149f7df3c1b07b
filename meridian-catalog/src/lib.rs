pub mod product;

pub use product::{Product, ProductAttribute, ProductType};
