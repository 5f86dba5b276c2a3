//! Concrete PostgreSQL repository implementations.

pub mod access_point;
pub mod account;
pub mod device_session;

pub use access_point::AccessPointRepository;
pub use account::AccountRepository;
pub use device_session::DeviceSessionRepository;
