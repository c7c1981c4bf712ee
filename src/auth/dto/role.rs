//!
//! All roles used within the marketplace backend
//!

use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum Role {
    #[strum(serialize = "seller")]
    Seller,
    #[strum(serialize = "admin")]
    Admin,
    #[strum(serialize = "customer")]
    Customer,
}
