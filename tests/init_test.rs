// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Library initialization. Kept in its own test binary because it installs
//! the process-wide error reporter.

use std::sync::Arc;

use niihau_lib::error::{set_error_reporter, TracingErrorReporter};

#[test]
fn test_init_installs_error_reporter() {
    niihau_lib::init();

    // The reporter slot is taken, so a second install is refused
    assert!(!set_error_reporter(Arc::new(TracingErrorReporter)));

    // Repeated initialization is harmless
    niihau_lib::init();
}
