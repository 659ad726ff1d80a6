//! fixture drivers
//! - `HttpFixture` talks to the real fixture over its local http interface
//! - `DummyFixture` simulates trip thresholds for dry runs and tests

pub mod traits;
pub mod http_fixture;
pub mod dummy_fixture;
