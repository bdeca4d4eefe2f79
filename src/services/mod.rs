// Service exports
pub mod firestore;

pub use firestore::{build_structured_query, decode_profile, FirestoreClient, FirestoreError};
