pub mod attributes;
pub mod profile;

pub use attributes::{AttributeValue, ProfileAttribute};
pub use profile::{MemberAttributes, MemberProfile};
