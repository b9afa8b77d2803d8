/*! Integration tests for autoviv.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - node: Tests for Node construction, access, prune, copy and merging
 * - plain: Tests for conversion to and from plain data
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("autoviv=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
