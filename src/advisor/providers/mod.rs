mod offline;
mod remote;

pub use offline::OfflineAdvisor;
pub use remote::RemoteAdvisor;
