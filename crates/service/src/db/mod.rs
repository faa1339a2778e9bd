pub mod candidate_store;
