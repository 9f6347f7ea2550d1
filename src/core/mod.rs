pub mod profile;
pub mod store;

pub use profile::{Profile, ProfileError, ProfileField, ViewMode};
pub use store::{service_names, ServiceEntry, ServiceList, ServiceSource, Store, StoreError};
