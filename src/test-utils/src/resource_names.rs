// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rand::{
    Rng,
    distr::{Distribution, Uniform},
};

/// Prefix for resources whose names are random but short.
///
/// The cleanup helpers only consider resources starting with this prefix.
pub const PREFIX: &str = "rust-samples-";

const JOB_ID_LENGTH: usize = 63;

const REALM_ID_LENGTH: usize = 63;

const NODE_SUFFIX_LENGTH: usize = 8;

/// A random Batch job id.
///
/// Job ids must start with a lowercase letter, contain only lowercase letters,
/// digits and hyphens, and be at most 63 characters long.
pub fn random_job_id() -> String {
    let id = LowercaseAlphanumeric.random_string(JOB_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

/// A random Game Servers realm or cluster id.
pub fn random_realm_id() -> String {
    let id = LowercaseAlphanumeric.random_string(REALM_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

/// A random TPU node id starting with `prefix`.
///
/// The tests clean up stale nodes by prefix, so each test uses its own.
pub fn random_node_id(prefix: &str) -> String {
    let id = LowercaseAlphanumeric.random_string(NODE_SUFFIX_LENGTH);
    format!("{prefix}{id}")
}

/// A unique id for Parameter Manager, Secret Manager or KMS resources.
///
/// These services accept hyphenated UUIDs, which makes it easy to correlate
/// leaked resources with the test run that created them.
pub fn random_uuid_id(kind: &str) -> String {
    format!("test-{kind}-{}", uuid::Uuid::new_v4())
}

const LOWERCASE_ALPHANUMERIC_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseAlphanumeric;

impl LowercaseAlphanumeric {
    /// Create a string with `n` characters from the character set.
    pub fn random_string(&self, n: usize) -> String {
        rand::rng()
            .sample_iter(self)
            .take(n)
            .map(char::from)
            .collect()
    }
}

impl Distribution<u8> for LowercaseAlphanumeric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let u = Uniform::new(0, LOWERCASE_ALPHANUMERIC_CHARSET.len())
            .expect("hard-coded uniform distribution is initialized successfully")
            .sample(rng);
        LOWERCASE_ALPHANUMERIC_CHARSET[u]
    }
}
