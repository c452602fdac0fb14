pub mod doc;
pub mod ls;
pub mod search;
