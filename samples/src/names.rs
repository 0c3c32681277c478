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

//! Resource names used by the samples.
//!
//! Google Cloud identifies resources with hierarchical paths such as
//! `projects/my-project/locations/global/parameters/my-parameter`. The samples
//! build these paths with the types in this module, which keeps the formatting
//! in one place and lets the tests parse the names returned by the service.

use std::fmt;
use std::str::FromStr;

/// The location of resources that are not tied to a region.
pub const GLOBAL: &str = "global";

/// Errors parsing a resource name.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum NameError {
    #[error("expected a resource name starting with `projects/`, got `{0}`")]
    MissingProject(String),
    #[error("expected `{expected}` at segment {index} in `{name}`")]
    UnexpectedSegment {
        name: String,
        index: usize,
        expected: &'static str,
    },
    #[error("the resource name `{0}` has an empty segment")]
    EmptySegment(String),
    #[error("the resource name `{name}` has {got} segments, expected {want}")]
    WrongLength {
        name: String,
        got: usize,
        want: usize,
    },
}

/// A project and location, formatted as `projects/{p}/locations/{l}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationName {
    project: String,
    location: String,
}

impl LocationName {
    pub fn new<P: Into<String>, L: Into<String>>(project: P, location: L) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
        }
    }

    /// The `global` location in `project`.
    pub fn global<P: Into<String>>(project: P) -> Self {
        Self::new(project, GLOBAL)
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Regional resources are served by locational endpoints.
    pub fn is_regional(&self) -> bool {
        self.location != GLOBAL
    }

    /// The name of a child resource, e.g. `child("jobs", "my-job")`.
    pub fn child(&self, collection: &str, id: &str) -> String {
        format!("{self}/{collection}/{id}")
    }

    pub fn parameter<T: Into<String>>(&self, parameter_id: T) -> ParameterName {
        ParameterName {
            parent: self.clone(),
            parameter: parameter_id.into(),
        }
    }
}

impl fmt::Display for LocationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "projects/{}/locations/{}", self.project, self.location)
    }
}

/// `projects/{p}/locations/{l}/parameters/{id}`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterName {
    parent: LocationName,
    parameter: String,
}

impl ParameterName {
    pub fn new(project: &str, location: &str, parameter_id: &str) -> Self {
        LocationName::new(project, location).parameter(parameter_id)
    }

    pub fn parent(&self) -> &LocationName {
        &self.parent
    }

    pub fn parameter_id(&self) -> &str {
        &self.parameter
    }

    pub fn version<T: Into<String>>(&self, version_id: T) -> ParameterVersionName {
        ParameterVersionName {
            parent: self.clone(),
            version: version_id.into(),
        }
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/parameters/{}", self.parent, self.parameter)
    }
}

impl FromStr for ParameterName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = split(s, &["projects", "locations", "parameters"])?;
        Ok(LocationName::new(segments[0], segments[1]).parameter(segments[2]))
    }
}

/// `projects/{p}/locations/{l}/parameters/{id}/versions/{v}`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterVersionName {
    parent: ParameterName,
    version: String,
}

impl ParameterVersionName {
    pub fn new(project: &str, location: &str, parameter_id: &str, version_id: &str) -> Self {
        ParameterName::new(project, location, parameter_id).version(version_id)
    }

    pub fn parent(&self) -> &ParameterName {
        &self.parent
    }

    pub fn version_id(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for ParameterVersionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/versions/{}", self.parent, self.version)
    }
}

impl FromStr for ParameterVersionName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = split(s, &["projects", "locations", "parameters", "versions"])?;
        Ok(ParameterName::new(segments[0], segments[1], segments[2]).version(segments[3]))
    }
}

/// The name of a Secret Manager secret.
///
/// Global secrets do not have a location segment.
pub fn secret_name(location: &LocationName, secret_id: &str) -> String {
    if location.is_regional() {
        location.child("secrets", secret_id)
    } else {
        format!("projects/{}/secrets/{secret_id}", location.project())
    }
}

/// The parent for Secret Manager `CreateSecret` requests.
pub fn secret_parent(location: &LocationName) -> String {
    if location.is_regional() {
        location.to_string()
    } else {
        format!("projects/{}", location.project())
    }
}

/// `projects/{p}/locations/{l}/keyRings/{r}/cryptoKeys/{k}`
pub fn crypto_key_name(location: &LocationName, key_ring_id: &str, key_id: &str) -> String {
    format!("{}/cryptoKeys/{key_id}", location.child("keyRings", key_ring_id))
}

// Splits `name` into the ids that follow each of `collections`.
fn split<'a>(name: &'a str, collections: &[&'static str]) -> Result<Vec<&'a str>, NameError> {
    if !name.starts_with("projects/") {
        return Err(NameError::MissingProject(name.to_string()));
    }
    let segments = name.split('/').collect::<Vec<_>>();
    if segments.len() != 2 * collections.len() {
        return Err(NameError::WrongLength {
            name: name.to_string(),
            got: segments.len(),
            want: 2 * collections.len(),
        });
    }
    let mut ids = Vec::with_capacity(collections.len());
    for (i, expected) in collections.iter().enumerate() {
        if segments[2 * i] != *expected {
            return Err(NameError::UnexpectedSegment {
                name: name.to_string(),
                index: 2 * i,
                expected,
            });
        }
        let id = segments[2 * i + 1];
        if id.is_empty() {
            return Err(NameError::EmptySegment(name.to_string()));
        }
        ids.push(id);
    }
    Ok(ids)
}
