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

// [START cloud_game_servers_realm_get]
use crate::gameservers::GameServices;
use crate::gameservers::model::Realm;

pub async fn sample(
    client: &GameServices,
    project_id: &str,
    location: &str,
    realm_id: &str,
) -> anyhow::Result<Realm> {
    let realm = client
        .get_realm(format!(
            "projects/{project_id}/locations/{location}/realms/{realm_id}"
        ))
        .await?;
    println!("Realm name: {}", realm.name);
    println!("Realm description: {}", realm.description);
    println!("Realm time zone: {}", realm.time_zone);

    Ok(realm)
}
// [END cloud_game_servers_realm_get]
