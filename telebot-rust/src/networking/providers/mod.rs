pub mod net_provider_reqwest;

pub use net_provider_reqwest::NetworkProviderReqwest;
