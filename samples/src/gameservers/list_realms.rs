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

// [START cloud_game_servers_realm_list]
use crate::gameservers::GameServices;
use crate::gameservers::model::Realm;

pub async fn sample(
    client: &GameServices,
    project_id: &str,
    location: &str,
) -> anyhow::Result<Vec<Realm>> {
    let realms = client
        .list_realms(format!("projects/{project_id}/locations/{location}"))
        .await?;
    println!("Realms:");
    for realm in &realms {
        println!("\tRealm name: {}", realm.name);
        println!("\tRealm description: {}", realm.description);
        println!("\tRealm time zone: {}", realm.time_zone);
    }

    Ok(realms)
}
// [END cloud_game_servers_realm_list]
