use serde_json::json;

use super::{boundary_ids_resolve, delete_missing_returns_200, get_missing_returns_404};
use crate::check::{self, JsonType, Shape};
use crate::data::{self, PhotoOverrides};
use crate::domain::{Photo, Resource};
use crate::error::Error;
use crate::http::ApiClient;
use crate::runner::RunReport;

const SCHEMA: &[(&str, JsonType)] = &[
    ("id", JsonType::Number),
    ("albumId", JsonType::Number),
    ("title", JsonType::String),
    ("url", JsonType::String),
    ("thumbnailUrl", JsonType::String),
];

pub async fn run(client: &ApiClient, report: &mut RunReport) {
    report.run_step("photos", "list all photos", list_all(client)).await;
    report.run_step("photos", "get photo by id", get_by_id(client)).await;
    report
        .run_step("photos", "filter photos by album", filter_by_album(client))
        .await;
    report.run_step("photos", "create photo", create(client)).await;
    report
        .run_step("photos", "create photo with large title", create_large_title(client))
        .await;
    report.run_step("photos", "update photo", update(client)).await;
    report.run_step("photos", "delete photo", delete(client)).await;
    report.run_step("photos", "get missing photo", missing(client)).await;
    report
        .run_step("photos", "delete missing photo", delete_missing(client))
        .await;
    report.run_step("photos", "boundary ids", boundaries(client)).await;
}

async fn list_all(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get("/photos").await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_content_type(&resp)?;
    check::assert_json_array(&resp)?;
    check::assert_base_resource_array(&resp)?;
    check::assert_schema(&resp, SCHEMA, Shape::Many)
}

async fn get_by_id(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get("/photos/1").await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_object(&resp)?;
    check::assert_base_resource_fields(&resp)?;
    check::assert_schema(&resp, SCHEMA, Shape::One)
}

async fn filter_by_album(client: &ApiClient) -> Result<(), Error> {
    let resp = client.get_query("/photos", &[("albumId", "1".to_string())]).await?;
    check::assert_status(&resp, 200)?;
    check::assert_json_array(&resp)?;
    check::assert_array_filtered_by_field(&resp, "albumId", &json!(1))
}

async fn create(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_photo(PhotoOverrides::default());
    let resp = client.post("/photos", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn create_large_title(client: &ApiClient) -> Result<(), Error> {
    let payload = data::test_photo(PhotoOverrides {
        title: Some(data::large_payload(1000)),
        ..Default::default()
    });
    let resp = client.post("/photos", &payload).await?;
    check::assert_created_resource(&resp, &payload)
}

async fn update(client: &ApiClient) -> Result<(), Error> {
    let updated = Photo {
        id: 1,
        album_id: 1,
        title: "Updated Photo".to_string(),
        url: "https://via.placeholder.com/600/updated".to_string(),
        thumbnail_url: "https://via.placeholder.com/150/updated".to_string(),
    };
    let resp = client.put("/photos/1", &updated).await?;
    check::assert_updated_resource(&resp, &updated)
}

async fn delete(client: &ApiClient) -> Result<(), Error> {
    let resp = client.delete("/photos/1").await?;
    check::assert_deleted(&resp)
}

async fn missing(client: &ApiClient) -> Result<(), Error> {
    get_missing_returns_404(client, Resource::Photos).await
}

async fn delete_missing(client: &ApiClient) -> Result<(), Error> {
    delete_missing_returns_200(client, Resource::Photos).await
}

async fn boundaries(client: &ApiClient) -> Result<(), Error> {
    boundary_ids_resolve(client, Resource::Photos).await
}
