//! Built-in scenario suites, one group per resource kind.
//!
//! Thin call sites over the `check` and `data` layers. The negative and
//! boundary scenarios are identical across kinds, so they live here
//! parameterized by [`Resource`]; everything shape-specific stays in the
//! per-resource modules.

pub mod albums;
pub mod comments;
pub mod photos;
pub mod posts;
pub mod todos;
pub mod users;

use serde_json::json;

use crate::check;
use crate::data;
use crate::domain::Resource;
use crate::error::Error;
use crate::http::ApiClient;
use crate::runner::RunReport;

pub const GROUPS: [&str; 6] = ["posts", "comments", "albums", "photos", "todos", "users"];

/// Run one named group into the report.
pub async fn run_group(
    name: &str,
    client: &ApiClient,
    report: &mut RunReport,
) -> Result<(), Error> {
    match name {
        "posts" => posts::run(client, report).await,
        "comments" => comments::run(client, report).await,
        "albums" => albums::run(client, report).await,
        "photos" => photos::run(client, report).await,
        "todos" => todos::run(client, report).await,
        "users" => users::run(client, report).await,
        other => return Err(Error::UnknownGroup(other.to_string())),
    }
    Ok(())
}

/// Run every group in declaration order.
pub async fn run_all(client: &ApiClient, report: &mut RunReport) {
    posts::run(client, report).await;
    comments::run(client, report).await;
    albums::run(client, report).await;
    photos::run(client, report).await;
    todos::run(client, report).await;
    users::run(client, report).await;
}

/// A lookup past the seeded range misses with 404.
pub(crate) async fn get_missing_returns_404(
    client: &ApiClient,
    resource: Resource,
) -> Result<(), Error> {
    let resp = client
        .get(&format!("{}/{}", resource.path(), data::INVALID_ID))
        .await?;
    check::assert_not_found(&resp)
}

/// The service answers DELETE with 200 even for ids that never existed.
pub(crate) async fn delete_missing_returns_200(
    client: &ApiClient,
    resource: Resource,
) -> Result<(), Error> {
    let resp = client
        .delete(&format!("{}/{}", resource.path(), data::INVALID_ID))
        .await?;
    check::assert_deleted(&resp)
}

/// The first and last seeded records both resolve with their own id.
pub(crate) async fn boundary_ids_resolve(
    client: &ApiClient,
    resource: Resource,
) -> Result<(), Error> {
    let first = client.get(&format!("{}/1", resource.path())).await?;
    check::assert_status(&first, 200)?;
    check::assert_data(&first, &json!({ "id": 1 }))?;

    let last_id = resource.collection_size();
    let last = client
        .get(&format!("{}/{}", resource.path(), last_id))
        .await?;
    check::assert_status(&last, 200)?;
    check::assert_data(&last, &json!({ "id": last_id }))
}
