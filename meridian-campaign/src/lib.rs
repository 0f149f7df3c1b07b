pub mod models;
pub mod rules;

pub use models::{Campaign, CampaignProduct, CampaignSection, CampaignStatus, CampaignType};
pub use rules::{Operator, Rule, RuleClause};
