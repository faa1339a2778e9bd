pub mod memory;
pub mod repository;
pub mod service;

use models::candidate;
use serde::{Deserialize, Serialize};

/// Create/replace payload: every field but the id. The store assigns the id
/// on insert and the URL path supplies it on replace, so an id embedded in
/// an incoming body is dropped at deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInput {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub age: i32,
    pub blood_group: String,
    pub address: String,
}

impl CandidateInput {
    pub fn into_model(self, id: i32) -> candidate::Model {
        candidate::Model {
            id,
            full_name: self.full_name,
            mobile: self.mobile,
            email: self.email,
            age: self.age,
            blood_group: self.blood_group,
            address: self.address,
        }
    }
}
