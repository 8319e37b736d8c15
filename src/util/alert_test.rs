#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn show_is_noop_but_callable() {
    show("Error fetching vessel details.");
    show("");
}
