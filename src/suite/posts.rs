use serde_json::json;

use super::{boundary_ids_resolve, delete_missing_returns_200, get_missing_returns_404};
use crate::api::ResourceApi;
use crate::check::{self, JsonType, Shape};
use crate::data::{self, PostOverrides};
use crate::domain::{Post, Resource};
use crate::error::Error;
use crate::http::ApiClient;
use crate::runner::RunReport;

const SCHEMA: &[(&str, JsonType)] = &[
    ("id", JsonType::Number),
    ("title", JsonType::String),
    ("body", JsonType::String),
    ("userId", JsonType::Number),
];

pub async fn run(client: &ApiClient, report: &mut RunReport) {
    report.run_step("posts", "list all posts", list_all(client)).await;
    report.run_step("posts", "get post by id", get_by_id(client)).await;
    report.run_step("posts", "filter posts by user", filter_by_user(client)).await;
    report.run_step("posts", "create post", create(client)).await;
    report
        .run_step("posts", "create post with large payload", create_large(client))
        .await;
    report
        .run_step("posts", "create post with special characters", create_special(client))
        .await;
    report
        .run_step("posts", "create post with empty title", create_empty_title(client))
        .await;
    report.run_step("posts", "update post", update(client)).await;
    report
        .run_step("posts", "update post with large payload", update_large(client))
        .await;
    report
        .run_step("posts", "patch is tolerated", patch_is_tolerated(client))
        .await;
    report.run_step("posts", "delete post", delete(client)).await;
    report.run_step("posts", "get missing post", missing(client)).await;
    report
        .run_step("posts", "update missing post", update_missing(client))
        .await;
    report
        .run_step("posts", "delete missing post", delete_missing(client))
        .await;
    report.run_step("posts", "boundary ids", boundaries(client)).await;
    report
        .run_step("posts", "crud via typed helpers", typed_helpers(client))
        .await;
}

async fn list_all(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get("/posts").await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_content_type(&resp)?;
    check::assert_headers(&resp, &[("content-type", "application/json")])?;
    check::assert_json_array(&resp)?;
    check::assert_base_resource_array(&resp)?;
    check::assert_schema(&resp, SCHEMA, Shape::Many)
}

async fn get_by_id(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get("/posts/1").await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_content_type(&resp)?;
    check::assert_json_object(&resp)?;
    check::assert_base_resource_fields(&resp)?;
    check::assert_schema(&resp, SCHEMA, Shape::One)?;
    check::assert_data(&resp, &json!({ "id": 1 }))
}

async fn filter_by_user(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get_query("/posts", &[("userId", "1".to_string())]).await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_array(&resp)?;
    check::assert_array_filtered_by_field(&resp, "userId", &json!(1))
}

async fn create(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_post(PostOverrides::default());
    let resp = client.post("/posts", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn create_large(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_post(PostOverrides {
        title: Some(data::large_payload(1000)),
        body: Some(data::large_payload(5000)),
        ..Default::default()
    });
    let resp = client.post("/posts", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn create_special(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_post(PostOverrides {
        title: Some(data::special_characters().to_string()),
        body: Some(data::special_characters().to_string()),
        ..Default::default()
    });
    let resp = client.post("/posts", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn create_empty_title(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_post(PostOverrides {
        title: Some(String::new()),
        body: Some("Body with empty title".to_string()),
        ..Default::default()
    });
    let resp = client.post("/posts", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn update(client: &ApiClient) -> Result<(), Error> {
    let updated = Post {
        id: 1,
        title: "Updated Post Title".to_string(),
        body: "Updated Post Body".to_string(),
        user_id: 1,
    };
    let resp = client.put("/posts/1", &updated).await?;
    check::assert_updated_resource(&resp, &updated)
}

async fn update_large(client: &ApiClient) -> Result<(), Error> {
    let updated = Post {
        id: 1,
        title: data::large_payload(1000),
        body: data::large_payload(5000),
        user_id: 1,
    };
    let resp = client.put("/posts/1", &updated).await?;
    check::assert_updated_resource(&resp, &updated)
}

// The service answers PATCH with 200 rather than 405.
async fn patch_is_tolerated(client: &ApiClient) -> Result<(), Error> {
    let resp = client.patch("/posts/1", &json!({ "title": "Patched Title" })).await?;
    check::assert_status(&resp, 200)
}

async fn delete(client: &ApiClient) -> Result<(), Error> {
    let resp = client.delete("/posts/1").await?;
    check::assert_deleted(&resp)
}

async fn missing(client: &ApiClient) -> Result<(), Error> {
    get_missing_returns_404(client, Resource::Posts).await
}

// Updating past the seeded range makes the service blow up with 500, not 404.
async fn update_missing(client: &ApiClient) -> Result<(), Error> {
    let body = Post {
        id: data::INVALID_ID,
        title: "Updated Post Title".to_string(),
        body: "Updated Post Body".to_string(),
        user_id: 1,
    };
    let resp = client
        .put(&format!("/posts/{}", data::INVALID_ID), &body)
        .await?;
    check::assert_server_error(&resp)
}

async fn delete_missing(client: &ApiClient) -> Result<(), Error> {
    delete_missing_returns_200(client, Resource::Posts).await
}

async fn boundaries(client: &ApiClient) -> Result<(), Error> {
    boundary_ids_resolve(client, Resource::Posts).await
}

async fn typed_helpers(client: &ApiClient) -> Result<(), Error> {
    let api = ResourceApi::new(client);

    let payload = data::test_post(PostOverrides::default());
    let created = api.create_post(&payload).await?;
    if created.id <= 0 {
        return Err(Error::NonPositiveId { actual: created.id });
    }

    let fetched = api.post_by_id(1).await?;
    if fetched.id != 1 {
        return Err(Error::ValueMismatch {
            field: "id".to_string(),
            expected: json!(1),
            actual: json!(fetched.id),
        });
    }

    for post in api.posts_by_user(1).await? {
        if post.user_id != 1 {
            return Err(Error::ValueMismatch {
                field: "userId".to_string(),
                expected: json!(1),
                actual: json!(post.user_id),
            });
        }
    }
    Ok(())
}
