use serde_json::json;

use super::{boundary_ids_resolve, delete_missing_returns_200, get_missing_returns_404};
use crate::check::{self, JsonType, Shape};
use crate::data::{self, AlbumOverrides};
use crate::domain::{Album, Resource};
use crate::error::Error;
use crate::http::ApiClient;
use crate::runner::RunReport;

const SCHEMA: &[(&str, JsonType)] = &[
    ("id", JsonType::Number),
    ("userId", JsonType::Number),
    ("title", JsonType::String),
];

pub async fn run(client: &ApiClient, report: &mut RunReport) {
    report.run_step("albums", "list all albums", list_all(client)).await;
    report.run_step("albums", "get album by id", get_by_id(client)).await;
    report
        .run_step("albums", "filter albums by user", filter_by_user(client))
        .await;
    report.run_step("albums", "create album", create(client)).await;
    report
        .run_step("albums", "create album with empty title", create_empty_title(client))
        .await;
    report.run_step("albums", "update album", update(client)).await;
    report.run_step("albums", "delete album", delete(client)).await;
    report.run_step("albums", "get missing album", missing(client)).await;
    report
        .run_step("albums", "delete missing album", delete_missing(client))
        .await;
    report.run_step("albums", "boundary ids", boundaries(client)).await;
}

async fn list_all(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get("/albums").await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_content_type(&resp)?;
    check::assert_json_array(&resp)?;
    check::assert_base_resource_array(&resp)?;
    check::assert_schema(&resp, SCHEMA, Shape::Many)
}

async fn get_by_id(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get("/albums/1").await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_object(&resp)?;
    check::assert_base_resource_fields(&resp)?;
    check::assert_schema(&resp, SCHEMA, Shape::One)?;
    check::assert_data(&resp, &json!({ "id": 1 }))
}

async fn filter_by_user(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get_query("/albums", &[("userId", "1".to_string())]).await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_array(&resp)?;
    check::assert_array_filtered_by_field(&resp, "userId", &json!(1))
}

async fn create(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_album(AlbumOverrides::default());
    let resp = client.post("/albums", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn create_empty_title(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_album(AlbumOverrides {
        title: Some(String::new()),
        ..Default::default()
    });
    let resp = client.post("/albums", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn update(client: &ApiClient) -> Result<(), Error> {
    let updated = Album {
        id: 1,
        user_id: 1,
        title: "Updated Album".to_string(),
    };
    let resp = client.put("/albums/1", &updated).await?;
    check::assert_updated_resource(&resp, &updated)
}

async fn delete(client: &ApiClient) -> Result<(), Error> {
    let resp = client.delete("/albums/1").await?;
    check::assert_deleted(&resp)
}

async fn missing(client: &ApiClient) -> Result<(), Error> {
    get_missing_returns_404(client, Resource::Albums).await
}

async fn delete_missing(client: &ApiClient) -> Result<(), Error> {
    delete_missing_returns_200(client, Resource::Albums).await
}

async fn boundaries(client: &ApiClient) -> Result<(), Error> {
    boundary_ids_resolve(client, Resource::Albums).await
}
