pub mod analysis;
pub mod pre_test;
pub mod question;
pub mod solutions;
pub mod topic_selection;
pub mod upload;
