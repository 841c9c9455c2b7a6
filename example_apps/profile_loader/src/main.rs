// Copyright 2015-2023 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error;
use std::time::Duration;

use futures::{pin_mut, StreamExt};
use swimos_result::errors::{ConditionNotSatisfied, NotFinished};
use swimos_result::future::{
    result_stream, with_concurrent_result, ApiResultStreamExt, ResultScope, ScopeClosed,
};
use swimos_result::{ApiResult, ApiResultIterExt};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LATENCY: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
enum ProfileError {
    #[error("No user with ID {0}.")]
    UnknownUser(u32),
    #[error(transparent)]
    Scope(#[from] ScopeClosed),
    #[error(transparent)]
    NotFinished(#[from] NotFinished),
    #[error(transparent)]
    Condition(#[from] ConditionNotSatisfied),
}

#[derive(Clone, Debug)]
struct Profile {
    id: u32,
    name: String,
    friends: Vec<u32>,
}

async fn fetch_profile(id: u32) -> Result<Profile, ProfileError> {
    tokio::time::sleep(LATENCY).await;
    match id {
        1 => Ok(Profile {
            id,
            name: "Ada".to_string(),
            friends: vec![2, 3],
        }),
        2 => Ok(Profile {
            id,
            name: "Grace".to_string(),
            friends: vec![1],
        }),
        3 => Ok(Profile {
            id,
            name: "Edsger".to_string(),
            friends: vec![],
        }),
        _ => Err(ProfileError::UnknownUser(id)),
    }
}

fn describe(result: ApiResult<String, ProfileError>) -> String {
    result.fold_with_loading(
        |name| format!("Loaded {name}."),
        |err| format!("Failed: {err}"),
        || "Loading...".to_string(),
    )
}

/// Load a profile and all of its friends concurrently.
async fn load_with_friends(
    id: u32,
) -> Result<ApiResult<Vec<Profile>, ProfileError>, Box<dyn Error>> {
    let result = with_concurrent_result(|scope: ResultScope<ProfileError>| async move {
        let profile = fetch_profile(id).await?;
        let mut handles = vec![];
        for friend in profile.friends.clone() {
            handles.push(scope.spawn(fetch_profile(friend))?);
        }
        let friends = futures::future::join_all(handles).await;
        let mut all = vec![profile];
        all.extend(friends.into_iter().flatten());
        Ok::<_, ProfileError>(all)
    })
    .await?;
    Ok(result)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::new("")
        .add_directive("profile_loader=info".parse()?)
        .add_directive("swimos_result_future=debug".parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let updates = result_stream(fetch_profile(1)).map_results(|profile| profile.name);
    pin_mut!(updates);
    while let Some(update) = updates.next().await {
        info!("{}", describe(update));
    }

    let names = futures::future::join_all([1, 4, 2].map(fetch_profile))
        .await
        .into_iter()
        .map(ApiResult::from)
        .map_results(|profile| profile.name)
        .merge();
    info!("{}", describe(names.map(|names| names.join(", "))));

    let friends = load_with_friends(1)
        .await?
        .error_if_empty()
        .map_values(|profile| format!("{} ({})", profile.name, profile.id))
        .on_error(|err| warn!(error = %err, "Could not load the friends of a user."));
    info!("{}", describe(friends.map(|names| names.join(", "))));

    let missing = load_with_friends(7).await?;
    info!("{}", describe(missing.map(|profiles| profiles.len().to_string())));
    Ok(())
}
