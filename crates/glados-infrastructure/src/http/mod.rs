mod client;
mod endpoints;
mod mirror;
mod transport;

pub use client::GladosClient;
pub use endpoints::{
    extract_domain, EndpointConfig, CHECK_IN_PATH, DEFAULT_MIRRORS, POINTS_PATH, STATUS_PATH,
    USER_AGENT,
};
pub use mirror::MirrorRequester;
pub use transport::{HttpTransport, OutgoingRequest, ReqwestTransport, TransportResponse};

#[cfg(test)]
pub use transport::MockHttpTransport;
