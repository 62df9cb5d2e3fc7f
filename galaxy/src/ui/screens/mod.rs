pub mod home;

pub use home::HomeAction;
