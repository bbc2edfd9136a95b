// Mock implementations for transport-level testing

pub mod mock_transport;

pub use mock_transport::MockTransport;
