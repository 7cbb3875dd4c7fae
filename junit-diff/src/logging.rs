// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Logging setup. Logs always go to stderr, stdout carries the report.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "junit_diff=warn";
const VERBOSE_FILTER: &str = "junit_diff=debug";

/// Installs the global subscriber. `RUST_LOG` wins over the default filter,
/// `verbose` wins over both. Only the first call in a process has an effect.
pub fn init(verbose: bool) {
    let filter = match verbose {
        true => EnvFilter::new(VERBOSE_FILTER),
        false => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
