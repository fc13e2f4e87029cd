pub mod completion;
pub mod email;
pub mod google;
