use serde_json::json;

use super::{boundary_ids_resolve, delete_missing_returns_200, get_missing_returns_404};
use crate::api::ResourceApi;
use crate::check::{self, JsonType, Shape};
use crate::data::{self, TodoOverrides};
use crate::domain::{Resource, Todo};
use crate::error::Error;
use crate::http::ApiClient;
use crate::runner::RunReport;

const SCHEMA: &[(&str, JsonType)] = &[
    ("id", JsonType::Number),
    ("userId", JsonType::Number),
    ("title", JsonType::String),
    ("completed", JsonType::Boolean),
];

pub async fn run(client: &ApiClient, report: &mut RunReport) {
    report.run_step("todos", "list all todos", list_all(client)).await;
    report.run_step("todos", "get todo by id", get_by_id(client)).await;
    report.run_step("todos", "filter todos by user", filter_by_user(client)).await;
    report
        .run_step("todos", "filter completed todos", filter_completed(client))
        .await;
    report
        .run_step("todos", "filter pending todos", filter_pending(client))
        .await;
    report.run_step("todos", "create todo", create(client)).await;
    report
        .run_step("todos", "create completed todo", create_completed(client))
        .await;
    report.run_step("todos", "update todo", update(client)).await;
    report.run_step("todos", "delete todo", delete(client)).await;
    report.run_step("todos", "get missing todo", missing(client)).await;
    report
        .run_step("todos", "update missing todo", update_missing(client))
        .await;
    report
        .run_step("todos", "delete missing todo", delete_missing(client))
        .await;
    report.run_step("todos", "boundary ids", boundaries(client)).await;
    report
        .run_step("todos", "completion filter via typed helpers", typed_completion(client))
        .await;
}

async fn list_all(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get("/todos").await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_content_type(&resp)?;
    check::assert_json_array(&resp)?;
    check::assert_base_resource_array(&resp)?;
    check::assert_schema(&resp, SCHEMA, Shape::Many)
}

async fn get_by_id(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get("/todos/1").await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_object(&resp)?;
    check::assert_base_resource_fields(&resp)?;
    check::assert_schema(&resp, SCHEMA, Shape::One)?;
    check::assert_data(&resp, &json!({ "id": 1 }))
}

async fn filter_by_user(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get_query("/todos", &[("userId", "1".to_string())]).await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_array(&resp)?;
    check::assert_array_filtered_by_field(&resp, "userId", &json!(1))
}

async fn filter_completed(client: &ApiClient) -> Result<(), Error> {
    let resp = client
        .get_query("/todos", &[("completed", "true".to_string())])
        .await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_array(&resp)?;
    check::assert_array_filtered_by_field(&resp, "completed", &json!(true))
}

async fn filter_pending(client: &ApiClient) -> Result<(), Error> {
    let resp = client
        .get_query("/todos", &[("completed", "false".to_string())])
        .await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_array(&resp)?;
    check::assert_array_filtered_by_field(&resp, "completed", &json!(false))
}

async fn create(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_todo(TodoOverrides::default());
    let resp = client.post("/todos", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn create_completed(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_todo(TodoOverrides {
        completed: Some(true),
        ..Default::default()
    });
    let resp = client.post("/todos", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn update(client: &ApiClient) -> Result<(), Error> {
    let updated = Todo {
        id: 1,
        user_id: 1,
        title: "Updated Todo".to_string(),
        completed: true,
    };
    let resp = client.put("/todos/1", &updated).await?;
    check::assert_updated_resource(&resp, &updated)
}

async fn delete(client: &ApiClient) -> Result<(), Error> {
    let resp = client.delete("/todos/1").await?;
    check::assert_deleted(&resp)
}

async fn missing(client: &ApiClient) -> Result<(), Error> {
    get_missing_returns_404(client, Resource::Todos).await
}

async fn update_missing(client: &ApiClient) -> Result<(), Error> {
    let body = Todo {
        id: data::INVALID_ID,
        user_id: 1,
        title: "Updated Todo".to_string(),
        completed: true,
    };
    let resp = client
        .put(&format!("/todos/{}", data::INVALID_ID), &body)
        .await?;
    check::assert_server_error(&resp)
}

async fn delete_missing(client: &ApiClient) -> Result<(), Error> {
    delete_missing_returns_200(client, Resource::Todos).await
}

async fn boundaries(client: &ApiClient) -> Result<(), Error> {
    boundary_ids_resolve(client, Resource::Todos).await
}

async fn typed_completion(client: &ApiClient) -> Result<(), Error> {
    let api = ResourceApi::new(client);
    for todo in api.todos_by_completion(true).await? {
        if !todo.completed {
            return Err(Error::ValueMismatch {
                field: "completed".to_string(),
                expected: json!(true),
                actual: json!(todo.completed),
            });
        }
    }
    Ok(())
}
