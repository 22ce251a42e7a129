// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Shared between crates through `include!`, so it must only contain items.

/// Every dependency in the crate's manifest must have its own `## name`
/// section in `DEPS.md`, and `DEPS.md` must not mention removed ones.
#[test]
fn check_deps_documented() {
    use std::collections::BTreeSet;

    let manifest = std::fs::read_to_string("Cargo.toml").expect("Cargo.toml must exist");
    let manifest = manifest
        .parse::<toml::Table>()
        .expect("Cargo.toml should not be malformed");

    let listed = ["dependencies", "build-dependencies", "dev-dependencies"]
        .into_iter()
        .filter_map(|section| manifest.get(section).and_then(toml::Value::as_table))
        .flat_map(|table| table.keys().cloned())
        .collect::<BTreeSet<_>>();

    let markdown = std::fs::read_to_string("DEPS.md").expect("DEPS.md must exist");
    let documented = markdown
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .map(|dep| dep.trim().to_string())
        .collect::<BTreeSet<_>>();

    let undocumented = listed.difference(&documented).collect::<Vec<_>>();
    let stale = documented.difference(&listed).collect::<Vec<_>>();

    assert!(
        undocumented.is_empty(),
        "some Cargo.toml dependencies are not in DEPS.md: {undocumented:?}"
    );
    assert!(
        stale.is_empty(),
        "DEPS.md lists dependencies no longer present in Cargo.toml: {stale:?}"
    );
}
