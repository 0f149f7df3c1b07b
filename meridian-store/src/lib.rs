pub mod app_config;
pub mod memory;
pub mod seed;

pub use memory::{
    InMemoryCampaignStore, InMemoryCatalogStore, InMemoryDisplayOfferStore, InMemoryProfileStore,
};
pub use seed::{SeedData, SeedError};
