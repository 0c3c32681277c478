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

// [START cloud_game_servers_realm_create]
use crate::gameservers::GameServices;
use crate::gameservers::model::Realm;

/// # Parameters
/// - `project_id`: the id of a Google Cloud project. For example: `my-project`.
/// - `location`: `global` or a region. For example: `us-central1`.
/// - `realm_id`: the id for the new realm.
pub async fn sample(
    client: &GameServices,
    project_id: &str,
    location: &str,
    realm_id: &str,
) -> anyhow::Result<Realm> {
    let realm = Realm::new()
        .set_time_zone("US/Pacific")
        .set_description("My Game Server realm");
    let operation = client
        .create_realm(
            format!("projects/{project_id}/locations/{location}"),
            realm_id,
            realm,
        )
        .await?;
    let realm = client.until_done(operation).await?.response_as::<Realm>()?;
    println!("Realm created: {}", realm.name);
    println!("\tRealm time zone: {}", realm.time_zone);

    Ok(realm)
}
// [END cloud_game_servers_realm_create]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameservers::tests::{MockGameServices, done};

    #[tokio::test]
    async fn create() -> anyhow::Result<()> {
        let mut mock = MockGameServices::new();
        mock.expect_create_realm()
            .withf(|r| {
                r.parent == "projects/p/locations/us-central1"
                    && r.realm_id == "my-realm"
                    && r.realm.as_ref().is_some_and(|r| r.time_zone == "US/Pacific")
            })
            .return_once(|r| {
                let realm = r
                    .realm
                    .unwrap_or_default()
                    .set_name("projects/p/locations/us-central1/realms/my-realm");
                Ok(done(&realm))
            });
        let client = GameServices::from_stub(mock);

        let got = sample(&client, "p", "us-central1", "my-realm").await?;
        assert_eq!(got.name, "projects/p/locations/us-central1/realms/my-realm");
        assert_eq!(got.time_zone, "US/Pacific");
        Ok(())
    }
}
