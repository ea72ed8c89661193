pub mod media;
pub mod portfolio;
pub mod site;
