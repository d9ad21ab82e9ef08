use serde::{Deserialize, Serialize};

/// Represents a registered store user.
///
/// `password` is the plaintext value the demo store hands out. Never reuse this
/// shape against a real service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub username: String,
    pub password: String,
    pub name: UserName,
    pub address: Address,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserName {
    pub firstname: String,
    pub lastname: String,
}

/// Postal address. `number` is the house number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub street: String,
    pub number: u32,
    pub zipcode: String,
}
