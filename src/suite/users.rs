use serde_json::json;

use super::{boundary_ids_resolve, delete_missing_returns_200, get_missing_returns_404};
use crate::check::{self, JsonType, Shape};
use crate::data::{self, UserOverrides};
use crate::domain::{Resource, User};
use crate::error::Error;
use crate::http::ApiClient;
use crate::runner::RunReport;

const SCHEMA: &[(&str, JsonType)] = &[
    ("id", JsonType::Number),
    ("name", JsonType::String),
    ("username", JsonType::String),
    ("email", JsonType::String),
    ("phone", JsonType::String),
    ("website", JsonType::String),
];

pub async fn run(client: &ApiClient, report: &mut RunReport) {
    report.run_step("users", "list all users", list_all(client)).await;
    report.run_step("users", "get user by id", get_by_id(client)).await;
    report.run_step("users", "create user", create(client)).await;
    report
        .run_step("users", "create user with special characters", create_special(client))
        .await;
    report
        .run_step("users", "create user with empty website", create_empty_website(client))
        .await;
    report.run_step("users", "update user", update(client)).await;
    report.run_step("users", "delete user", delete(client)).await;
    report.run_step("users", "get missing user", missing(client)).await;
    report
        .run_step("users", "delete missing user", delete_missing(client))
        .await;
    report.run_step("users", "boundary ids", boundaries(client)).await;
}

async fn list_all(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get("/users").await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_content_type(&resp)?;
    check::assert_json_array(&resp)?;
    check::assert_base_resource_array(&resp)?;
    check::assert_schema(&resp, SCHEMA, Shape::Many)
}

async fn get_by_id(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get("/users/1").await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_object(&resp)?;
    check::assert_base_resource_fields(&resp)?;
    check::assert_schema(&resp, SCHEMA, Shape::One)?;
    check::assert_data(&resp, &json!({ "id": 1 }))
}

async fn create(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_user(UserOverrides::default());
    let resp = client.post("/users", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn create_special(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_user(UserOverrides {
        name: Some(data::special_characters().to_string()),
        username: Some(data::special_characters().to_string()),
        ..Default::default()
    });
    let resp = client.post("/users", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn create_empty_website(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_user(UserOverrides {
        website: Some(String::new()),
        ..Default::default()
    });
    let resp = client.post("/users", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn update(client: &ApiClient) -> Result<(), Error> {
    let updated = User {
        id: 1,
        name: "Updated John Doe".to_string(),
        username: "updatedjohndoe".to_string(),
        email: "updated.john.doe@example.com".to_string(),
        phone: "1-770-736-8031 x56442".to_string(),
        website: "updated-hildegard.org".to_string(),
    };
    let resp = client.put("/users/1", &updated).await?;
    check::assert_updated_resource(&resp, &updated)
}

async fn delete(client: &ApiClient) -> Result<(), Error> {
    let resp = client.delete("/users/1").await?;
    check::assert_deleted(&resp)
}

async fn missing(client: &ApiClient) -> Result<(), Error> {
    get_missing_returns_404(client, Resource::Users).await
}

async fn delete_missing(client: &ApiClient) -> Result<(), Error> {
    delete_missing_returns_200(client, Resource::Users).await
}

async fn boundaries(client: &ApiClient) -> Result<(), Error> {
    boundary_ids_resolve(client, Resource::Users).await
}
