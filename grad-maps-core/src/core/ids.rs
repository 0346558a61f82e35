//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::cell::Cell;

/// Generator for ids unique within one owner (e.g. one map)
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: Cell<u64>,
}

impl IdGenerator {
    pub fn new() -> IdGenerator {
        IdGenerator::default()
    }

    pub fn next_id(&self, prefix: &str) -> String {
        let id = self.next.get();
        self.next.set(id + 1);
        format!("{}-{}", prefix, id)
    }
}

#[test]
fn test_unique_ids() {
    let ids = IdGenerator::new();
    assert_eq!(ids.next_id("grad-elevation-control"), "grad-elevation-control-0");
    assert_eq!(ids.next_id("grad-elevation-control"), "grad-elevation-control-1");
    assert_eq!(ids.next_id("other"), "other-2");
}
