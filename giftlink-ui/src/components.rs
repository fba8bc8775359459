pub mod detail;
pub mod login;
pub mod not_found;

pub use detail::GiftDetail;
pub use login::Login;
pub use not_found::NotFound;
