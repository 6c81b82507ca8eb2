use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A supplier of purchased goods. No lifecycle beyond create/delete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Vendor {
    pub fn new(name: impl Into<String>, phone: Option<String>, email: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone,
            email,
        }
    }
}

/// A buyer of sold goods. No lifecycle beyond create/delete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Customer {
    pub fn new(name: impl Into<String>, phone: Option<String>, email: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone,
            email,
        }
    }
}
