pub mod fixtures;
pub mod tracing;
pub mod upstream;

pub use fixtures::{analyze_args, fixture_path, read_fixture};
pub use self::tracing::{CapturedEvent, init_test_tracing};
pub use upstream::{Upstream, start_stalling_upstream, start_upstream};
