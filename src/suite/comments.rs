use serde_json::json;

use super::{boundary_ids_resolve, delete_missing_returns_200, get_missing_returns_404};
use crate::check::{self, JsonType, Shape};
use crate::data::{self, CommentOverrides};
use crate::domain::{Comment, Resource};
use crate::error::Error;
use crate::http::ApiClient;
use crate::runner::RunReport;

const SCHEMA: &[(&str, JsonType)] = &[
    ("id", JsonType::Number),
    ("postId", JsonType::Number),
    ("name", JsonType::String),
    ("email", JsonType::String),
    ("body", JsonType::String),
];

pub async fn run(client: &ApiClient, report: &mut RunReport) {
    report.run_step("comments", "list all comments", list_all(client)).await;
    report.run_step("comments", "get comment by id", get_by_id(client)).await;
    report
        .run_step("comments", "filter comments by post", filter_by_post(client))
        .await;
    report.run_step("comments", "create comment", create(client)).await;
    report
        .run_step("comments", "create comment with special characters", create_special(client))
        .await;
    report.run_step("comments", "update comment", update(client)).await;
    report.run_step("comments", "delete comment", delete(client)).await;
    report.run_step("comments", "get missing comment", missing(client)).await;
    report
        .run_step("comments", "update missing comment", update_missing(client))
        .await;
    report
        .run_step("comments", "delete missing comment", delete_missing(client))
        .await;
    report.run_step("comments", "boundary ids", boundaries(client)).await;
}

async fn list_all(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get("/comments").await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_content_type(&resp)?;
    check::assert_json_array(&resp)?;
    check::assert_base_resource_array(&resp)?;
    check::assert_schema(&resp, SCHEMA, Shape::Many)
}

async fn get_by_id(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get("/comments/1").await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_object(&resp)?;
    check::assert_base_resource_fields(&resp)?;
    check::assert_schema(&resp, SCHEMA, Shape::One)?;
    check::assert_data(&resp, &json!({ "id": 1, "postId": 1 }))
}

async fn filter_by_post(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get_query("/comments", &[("postId", "1".to_string())]).await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_array(&resp)?;
    check::assert_array_filtered_by_field(&resp, "postId", &json!(1))
}

async fn create(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_comment(CommentOverrides::default());
    let resp = client.post("/comments", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn create_special(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_comment(CommentOverrides {
        name: Some(data::special_characters().to_string()),
        body: Some(data::special_characters().to_string()),
        ..Default::default()
    });
    let resp = client.post("/comments", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn update(client: &ApiClient) -> Result<(), Error> {
    let updated = Comment {
        id: 1,
        post_id: 1,
        name: "Updated Comment".to_string(),
        email: "updated@example.com".to_string(),
        body: "Updated comment body".to_string(),
    };
    let resp = client.put("/comments/1", &updated).await?;
    check::assert_updated_resource(&resp, &updated)
}

async fn delete(client: &ApiClient) -> Result<(), Error> {
    let resp = client.delete("/comments/1").await?;
    check::assert_deleted(&resp)
}

async fn missing(client: &ApiClient) -> Result<(), Error> {
    get_missing_returns_404(client, Resource::Comments).await
}

async fn update_missing(client: &ApiClient) -> Result<(), Error> {
    let body = Comment {
        id: data::INVALID_ID,
        post_id: 1,
        name: "Updated Comment".to_string(),
        email: "updated@example.com".to_string(),
        body: "Updated comment body".to_string(),
    };
    let resp = client
        .put(&format!("/comments/{}", data::INVALID_ID), &body)
        .await?;
    check::assert_server_error(&resp)
}

async fn delete_missing(client: &ApiClient) -> Result<(), Error> {
    delete_missing_returns_200(client, Resource::Comments).await
}

async fn boundaries(client: &ApiClient) -> Result<(), Error> {
    boundary_ids_resolve(client, Resource::Comments).await
}
