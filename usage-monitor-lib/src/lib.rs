pub mod appliance;
pub mod fuzzy;
pub mod topic;
