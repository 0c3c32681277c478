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

// [START parametermanager_list_params]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::Parameter;

pub async fn sample(
    client: &ParameterManager,
    project_id: &str,
    location: &str,
) -> anyhow::Result<Vec<Parameter>> {
    let mut parameters = Vec::new();
    let mut items = client
        .list_parameters()
        .set_parent(format!("projects/{project_id}/locations/{location}"))
        .by_item();
    while let Some(parameter) = items.next().await.transpose()? {
        println!(
            "Found parameter {} with format {:?}",
            parameter.name, parameter.format
        );
        parameters.push(parameter);
    }

    Ok(parameters)
}
// [END parametermanager_list_params]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parametermanager::tests::MockParameterManager;
    use google_cloud_gax::response::Response;
    use google_cloud_parametermanager_v1::model::ListParametersResponse;

    #[tokio::test]
    async fn pages() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockParameterManager::new();
        mock.expect_list_parameters()
            .withf(|r, _| r.page_token.is_empty())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(
                    ListParametersResponse::new()
                        .set_parameters([Parameter::new().set_name("p1")])
                        .set_next_page_token("page-2"),
                ))
            });
        mock.expect_list_parameters()
            .withf(|r, _| r.page_token == "page-2")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(
                    ListParametersResponse::new().set_parameters([Parameter::new().set_name("p2")]),
                ))
            });
        let client = ParameterManager::from_stub(mock);

        let got = sample(&client, "p", "global").await?;
        let names = got.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["p1", "p2"]);
        Ok(())
    }
}
