//! Structural checks over received responses.
//!
//! Each check inspects an [`ApiResponse`] and returns at the first mismatch
//! with an error naming what diverged. There is no aggregation and no
//! recovery: a failed check fails the enclosing scenario, and whether the
//! run continues is the runner's decision. None of these functions perform
//! I/O; they operate on response values that have already been received,
//! so they are safe to call from any number of concurrent scenarios.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::http::ApiResponse;

/// Expected runtime type of a JSON field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Number,
    String,
    Boolean,
    Array,
    Object,
}

impl JsonType {
    pub fn name(&self) -> &'static str {
        match self {
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Boolean => "boolean",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (JsonType::Number, Value::Number(_))
                | (JsonType::String, Value::String(_))
                | (JsonType::Boolean, Value::Bool(_))
                | (JsonType::Array, Value::Array(_))
                | (JsonType::Object, Value::Object(_))
        )
    }
}

/// Declared cardinality of a response body.
///
/// Callers state up front whether they expect a single record or a
/// collection; the body is never shape-sniffed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    One,
    Many,
}

/// Runtime type name of a decoded JSON value.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn assert_status(resp: &ApiResponse, expected: u16) -> Result<(), Error> {
    if resp.status != expected {
        return Err(Error::StatusMismatch {
            expected,
            actual: resp.status,
        });
    }
    Ok(())
}

/// The `content-type` header must contain `application/json`; parameters
/// such as `charset=utf-8` are allowed after it.
pub fn assert_json_content_type(resp: &ApiResponse) -> Result<(), Error> {
    header_contains(resp, "content-type", "application/json")
}

/// Each expected pair requires the named header to be present and its value
/// to contain the expected substring.
pub fn assert_headers(resp: &ApiResponse, expected: &[(&str, &str)]) -> Result<(), Error> {
    for (header, value) in expected {
        header_contains(resp, header, value)?;
    }
    Ok(())
}

fn header_contains(resp: &ApiResponse, name: &str, expected: &str) -> Result<(), Error> {
    let actual = resp
        .header(name)
        .ok_or_else(|| Error::MissingHeader(name.to_string()))?;
    if !actual.contains(expected) {
        return Err(Error::HeaderMismatch {
            header: name.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

fn decode_array(resp: &ApiResponse) -> Result<Vec<Value>, Error> {
    match resp.json()? {
        Value::Array(items) => Ok(items),
        other => Err(Error::NotAnArray {
            actual: json_type_name(&other),
        }),
    }
}

fn decode_object(resp: &ApiResponse) -> Result<Map<String, Value>, Error> {
    match resp.json()? {
        Value::Object(map) => Ok(map),
        other => Err(Error::NotAnObject {
            actual: json_type_name(&other),
        }),
    }
}

/// The body must decode to a non-empty JSON array.
///
/// An empty array fails this check. Where an empty result is legitimate,
/// reach for [`assert_array_filtered_by_field`] or decode the body
/// directly instead.
pub fn assert_json_array(resp: &ApiResponse) -> Result<(), Error> {
    let items = decode_array(resp)?;
    if items.is_empty() {
        return Err(Error::EmptyArray);
    }
    Ok(())
}

/// The body must decode to a JSON object. `null` does not qualify.
pub fn assert_json_object(resp: &ApiResponse) -> Result<(), Error> {
    decode_object(resp)?;
    Ok(())
}

fn check_id(item: &Map<String, Value>) -> Result<(), Error> {
    let id = item.get("id").ok_or_else(|| Error::MissingField {
        field: "id".to_string(),
    })?;
    match id {
        Value::Number(n) => match n.as_i64() {
            Some(id) if id > 0 => Ok(()),
            Some(id) => Err(Error::NonPositiveId { actual: id }),
            None => Err(Error::TypeMismatch {
                field: "id".to_string(),
                expected: "integer",
                actual: "number",
            }),
        },
        other => Err(Error::TypeMismatch {
            field: "id".to_string(),
            expected: "integer",
            actual: json_type_name(other),
        }),
    }
}

/// The body must be an object carrying a positive integer `id`.
pub fn assert_base_resource_fields(resp: &ApiResponse) -> Result<(), Error> {
    check_id(&decode_object(resp)?)
}

/// Every element of the body array must carry a positive integer `id`.
pub fn assert_base_resource_array(resp: &ApiResponse) -> Result<(), Error> {
    for item in decode_array(resp)? {
        match item {
            Value::Object(map) => check_id(&map)?,
            other => {
                return Err(Error::NotAnObject {
                    actual: json_type_name(&other),
                })
            }
        }
    }
    Ok(())
}

/// Check every item of the body against a declared field/type schema.
///
/// With [`Shape::One`] the body must be a single object; with
/// [`Shape::Many`] it must be an array and every element is checked. Each
/// schema entry requires the field to be present, non-null, and of the
/// declared type.
pub fn assert_schema(
    resp: &ApiResponse,
    schema: &[(&str, JsonType)],
    shape: Shape,
) -> Result<(), Error> {
    let items = match shape {
        Shape::One => vec![Value::Object(decode_object(resp)?)],
        Shape::Many => decode_array(resp)?,
    };

    for item in &items {
        for (field, expected) in schema {
            let value = item.get(*field).ok_or_else(|| Error::MissingField {
                field: (*field).to_string(),
            })?;
            if value.is_null() {
                return Err(Error::NullField {
                    field: (*field).to_string(),
                });
            }
            if !expected.matches(value) {
                return Err(Error::TypeMismatch {
                    field: (*field).to_string(),
                    expected: expected.name(),
                    actual: json_type_name(value),
                });
            }
        }
    }
    Ok(())
}

/// Every field of `expected` must equal the corresponding body field.
///
/// `expected` serializes to a JSON object, so both typed records and
/// `json!` partials work. Fields the body carries beyond `expected` are
/// ignored.
pub fn assert_data<T: Serialize>(resp: &ApiResponse, expected: &T) -> Result<(), Error> {
    let expected = serde_json::to_value(expected)?;
    let expected = match expected {
        Value::Object(map) => map,
        other => {
            return Err(Error::NotAnObject {
                actual: json_type_name(&other),
            })
        }
    };

    let body = decode_object(resp)?;
    for (field, want) in &expected {
        let got = body.get(field).ok_or_else(|| Error::MissingField {
            field: field.clone(),
        })?;
        if got != want {
            return Err(Error::ValueMismatch {
                field: field.clone(),
                expected: want.clone(),
                actual: got.clone(),
            });
        }
    }
    Ok(())
}

/// A created resource: 201, an object body with a service-assigned positive
/// `id`, and every field of the create request echoed back. The identity is
/// not part of the comparison since the caller never sent one.
pub fn assert_created_resource<T: Serialize>(resp: &ApiResponse, expected: &T) -> Result<(), Error> {
    assert_status(resp, 201)?;
    assert_json_object(resp)?;
    assert_base_resource_fields(resp)?;
    assert_data(resp, expected)
}

/// An updated resource: 200 and the full record, identity included, echoed
/// back.
pub fn assert_updated_resource<T: Serialize>(resp: &ApiResponse, expected: &T) -> Result<(), Error> {
    assert_status(resp, 200)?;
    assert_json_object(resp)?;
    assert_data(resp, expected)
}

/// The service answers DELETE with 200 rather than 204, including for ids
/// that never existed.
pub fn assert_deleted(resp: &ApiResponse) -> Result<(), Error> {
    assert_status(resp, 200)
}

pub fn assert_not_found(resp: &ApiResponse) -> Result<(), Error> {
    assert_status(resp, 404)
}

pub fn assert_server_error(resp: &ApiResponse) -> Result<(), Error> {
    assert_status(resp, 500)
}

pub fn assert_method_not_allowed(resp: &ApiResponse) -> Result<(), Error> {
    assert_status(resp, 405)
}

pub fn assert_bad_request(resp: &ApiResponse) -> Result<(), Error> {
    assert_status(resp, 400)
}

/// Every element of the body array must carry `field` equal to `expected`.
///
/// This verifies the filter predicate for the elements the service
/// returned; it cannot tell whether the service withheld matching records.
/// An empty array passes.
pub fn assert_array_filtered_by_field(
    resp: &ApiResponse,
    field: &str,
    expected: &Value,
) -> Result<(), Error> {
    for item in decode_array(resp)? {
        let got = item.get(field).ok_or_else(|| Error::MissingField {
            field: field.to_string(),
        })?;
        if got != expected {
            return Err(Error::ValueMismatch {
                field: field.to_string(),
                expected: expected.clone(),
                actual: got.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::domain::CreateAlbum;

    fn response(status: u16, body: &str) -> ApiResponse {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            "application/json; charset=utf-8".to_string(),
        );
        ApiResponse {
            status,
            status_text: String::new(),
            headers,
            body: body.to_string(),
            duration_ms: 0,
            size_bytes: body.len(),
        }
    }

    const POST_SCHEMA: &[(&str, JsonType)] = &[
        ("id", JsonType::Number),
        ("title", JsonType::String),
        ("body", JsonType::String),
        ("userId", JsonType::Number),
    ];

    #[test]
    fn status_match_and_mismatch() {
        let resp = response(200, "{}");
        assert!(assert_status(&resp, 200).is_ok());
        assert!(matches!(
            assert_status(&resp, 201),
            Err(Error::StatusMismatch {
                expected: 201,
                actual: 200
            })
        ));
    }

    #[test]
    fn content_type_substring_match() {
        let resp = response(200, "{}");
        assert!(assert_json_content_type(&resp).is_ok());

        let mut plain = response(200, "{}");
        plain
            .headers
            .insert("content-type".to_string(), "text/html".to_string());
        assert!(matches!(
            assert_json_content_type(&plain),
            Err(Error::HeaderMismatch { .. })
        ));

        let mut missing = response(200, "{}");
        missing.headers.clear();
        assert!(matches!(
            assert_json_content_type(&missing),
            Err(Error::MissingHeader(_))
        ));
    }

    #[test]
    fn headers_check_uses_substring_per_pair() {
        let resp = response(200, "{}");
        assert!(assert_headers(&resp, &[("content-type", "application/json")]).is_ok());
        assert!(assert_headers(&resp, &[("Content-Type", "charset=utf-8")]).is_ok());
        assert!(matches!(
            assert_headers(&resp, &[("content-type", "text/xml")]),
            Err(Error::HeaderMismatch { .. })
        ));
    }

    #[test]
    fn json_array_requires_non_empty_sequence() {
        assert!(assert_json_array(&response(200, r#"[{"id": 1}]"#)).is_ok());
        assert!(matches!(
            assert_json_array(&response(200, "[]")),
            Err(Error::EmptyArray)
        ));
        assert!(matches!(
            assert_json_array(&response(200, r#"{"id": 1}"#)),
            Err(Error::NotAnArray { actual: "object" })
        ));
    }

    #[test]
    fn json_object_rejects_arrays_and_null() {
        assert!(assert_json_object(&response(200, r#"{"id": 1}"#)).is_ok());
        assert!(matches!(
            assert_json_object(&response(200, "[]")),
            Err(Error::NotAnObject { actual: "array" })
        ));
        assert!(matches!(
            assert_json_object(&response(200, "null")),
            Err(Error::NotAnObject { actual: "null" })
        ));
    }

    #[test]
    fn base_resource_fields_require_positive_integer_id() {
        assert!(assert_base_resource_fields(&response(200, r#"{"id": 1}"#)).is_ok());
        assert!(matches!(
            assert_base_resource_fields(&response(200, r#"{"name": "x"}"#)),
            Err(Error::MissingField { .. })
        ));
        assert!(matches!(
            assert_base_resource_fields(&response(200, r#"{"id": "1"}"#)),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            assert_base_resource_fields(&response(200, r#"{"id": 0}"#)),
            Err(Error::NonPositiveId { actual: 0 })
        ));
        assert!(matches!(
            assert_base_resource_fields(&response(200, r#"{"id": 1.5}"#)),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn base_resource_array_checks_every_element() {
        let resp = response(200, r#"[{"id": 1}, {"id": 2}]"#);
        assert!(assert_base_resource_array(&resp).is_ok());

        let bad = response(200, r#"[{"id": 1}, {"id": -3}]"#);
        assert!(matches!(
            assert_base_resource_array(&bad),
            Err(Error::NonPositiveId { actual: -3 })
        ));
    }

    #[test]
    fn schema_passes_on_conforming_object() {
        let resp = response(
            200,
            r#"{"id": 1, "title": "t", "body": "b", "userId": 1}"#,
        );
        assert!(assert_schema(&resp, POST_SCHEMA, Shape::One).is_ok());
    }

    #[test]
    fn schema_is_idempotent_on_same_response() {
        let resp = response(
            200,
            r#"{"id": 1, "title": "t", "body": "b", "userId": 1}"#,
        );
        let first = assert_schema(&resp, POST_SCHEMA, Shape::One).is_ok();
        let second = assert_schema(&resp, POST_SCHEMA, Shape::One).is_ok();
        assert_eq!(first, second);
    }

    #[test]
    fn schema_reports_missing_field_type_mismatch_and_null() {
        let missing = response(200, r#"{"id": 1, "title": "t", "userId": 1}"#);
        assert!(matches!(
            assert_schema(&missing, POST_SCHEMA, Shape::One),
            Err(Error::MissingField { field }) if field == "body"
        ));

        let wrong_type = response(
            200,
            r#"{"id": 1, "title": 7, "body": "b", "userId": 1}"#,
        );
        assert!(matches!(
            assert_schema(&wrong_type, POST_SCHEMA, Shape::One),
            Err(Error::TypeMismatch { expected: "string", actual: "number", .. })
        ));

        let null_field = response(
            200,
            r#"{"id": 1, "title": null, "body": "b", "userId": 1}"#,
        );
        assert!(matches!(
            assert_schema(&null_field, POST_SCHEMA, Shape::One),
            Err(Error::NullField { field }) if field == "title"
        ));
    }

    #[test]
    fn schema_shape_is_explicit_not_sniffed() {
        let object = response(
            200,
            r#"{"id": 1, "title": "t", "body": "b", "userId": 1}"#,
        );
        assert!(matches!(
            assert_schema(&object, POST_SCHEMA, Shape::Many),
            Err(Error::NotAnArray { actual: "object" })
        ));

        let array = response(
            200,
            r#"[{"id": 1, "title": "t", "body": "b", "userId": 1}]"#,
        );
        assert!(matches!(
            assert_schema(&array, POST_SCHEMA, Shape::One),
            Err(Error::NotAnObject { actual: "array" })
        ));
        assert!(assert_schema(&array, POST_SCHEMA, Shape::Many).is_ok());
    }

    #[test]
    fn data_compares_only_expected_fields() {
        let resp = response(200, r#"{"id": 101, "userId": 1, "title": "Test Album"}"#);
        assert!(assert_data(&resp, &json!({"title": "Test Album"})).is_ok());
        assert!(matches!(
            assert_data(&resp, &json!({"title": "Other"})),
            Err(Error::ValueMismatch { field, .. }) if field == "title"
        ));
        assert!(matches!(
            assert_data(&resp, &json!({"absent": 1})),
            Err(Error::MissingField { .. })
        ));
    }

    #[test]
    fn created_resource_requires_201_id_and_echoed_fields() {
        let expected = CreateAlbum {
            user_id: 1,
            title: "Test Album".to_string(),
        };

        let created = response(201, r#"{"id": 101, "userId": 1, "title": "Test Album"}"#);
        assert!(assert_created_resource(&created, &expected).is_ok());

        let wrong_status = response(200, r#"{"id": 101, "userId": 1, "title": "Test Album"}"#);
        assert!(matches!(
            assert_created_resource(&wrong_status, &expected),
            Err(Error::StatusMismatch { .. })
        ));

        let no_id = response(201, r#"{"userId": 1, "title": "Test Album"}"#);
        assert!(matches!(
            assert_created_resource(&no_id, &expected),
            Err(Error::MissingField { .. })
        ));

        let changed = response(201, r#"{"id": 101, "userId": 2, "title": "Test Album"}"#);
        assert!(matches!(
            assert_created_resource(&changed, &expected),
            Err(Error::ValueMismatch { .. })
        ));
    }

    #[test]
    fn updated_resource_requires_200_and_full_record() {
        let resp = response(
            200,
            r#"{"id": 1, "title": "Updated", "body": "Body", "userId": 1}"#,
        );
        let expected = json!({"id": 1, "title": "Updated", "body": "Body", "userId": 1});
        assert!(assert_updated_resource(&resp, &expected).is_ok());

        let wrong_id = json!({"id": 2, "title": "Updated", "body": "Body", "userId": 1});
        assert!(matches!(
            assert_updated_resource(&resp, &wrong_id),
            Err(Error::ValueMismatch { field, .. }) if field == "id"
        ));
    }

    #[test]
    fn status_wrappers_cover_service_codes() {
        assert!(assert_deleted(&response(200, "{}")).is_ok());
        assert!(assert_not_found(&response(404, "{}")).is_ok());
        assert!(assert_server_error(&response(500, "{}")).is_ok());
        assert!(assert_method_not_allowed(&response(405, "{}")).is_ok());
        assert!(assert_bad_request(&response(400, "{}")).is_ok());
        assert!(assert_deleted(&response(204, "")).is_err());
    }

    #[test]
    fn server_error_response_fails_ok_status_check() {
        let resp = response(500, "{}");
        assert!(assert_server_error(&resp).is_ok());
        assert!(matches!(
            assert_status(&resp, 200),
            Err(Error::StatusMismatch {
                expected: 200,
                actual: 500
            })
        ));
    }

    #[test]
    fn filtered_array_rejects_single_counterexample() {
        let resp = response(200, r#"[{"userId": 1}, {"userId": 2}]"#);
        assert!(matches!(
            assert_array_filtered_by_field(&resp, "userId", &json!(1)),
            Err(Error::ValueMismatch { .. })
        ));

        let all_match = response(200, r#"[{"userId": 1}, {"userId": 1}]"#);
        assert!(assert_array_filtered_by_field(&all_match, "userId", &json!(1)).is_ok());
    }

    #[test]
    fn filtered_array_accepts_empty_and_boolean_values() {
        assert!(assert_array_filtered_by_field(&response(200, "[]"), "completed", &json!(true))
            .is_ok());

        let todos = response(200, r#"[{"completed": true}, {"completed": false}]"#);
        assert!(matches!(
            assert_array_filtered_by_field(&todos, "completed", &json!(true)),
            Err(Error::ValueMismatch { .. })
        ));
    }

    #[test]
    fn single_post_passes_full_check_chain() {
        let resp = response(
            200,
            r#"{"id": 1, "title": "sunt aut facere", "body": "quia et suscipit", "userId": 1}"#,
        );
        assert!(assert_status(&resp, 200).is_ok());
        assert!(assert_json_content_type(&resp).is_ok());
        assert!(assert_json_object(&resp).is_ok());
        assert!(assert_base_resource_fields(&resp).is_ok());
        assert!(assert_schema(&resp, POST_SCHEMA, Shape::One).is_ok());
    }

    #[test]
    fn decode_failure_propagates_from_checks() {
        let resp = response(200, "<html>");
        assert!(matches!(assert_json_object(&resp), Err(Error::Decode(_))));
        assert!(matches!(assert_json_array(&resp), Err(Error::Decode(_))));
    }
}
