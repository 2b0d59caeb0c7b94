//! Request Body Validators
//!
//! Key-presence checks over the raw JSON object, run before any data access.
//! A validator either passes or yields the terminal rejection.

use serde_json::Value;

use crate::domain::entities::{NewPost, NewUser, UserChanges};
use crate::error::{UsersError, UsersResult};
use kernel::id::UserId;

/// Request body as received
pub type JsonObject = serde_json::Map<String, Value>;

/// Gate for user create/update bodies
pub fn validate_user(body: &JsonObject) -> UsersResult<()> {
    if body.is_empty() {
        return Err(UsersError::MissingUserData);
    }

    if !body.contains_key("name") {
        return Err(UsersError::MissingNameField);
    }

    Ok(())
}

/// Gate for post bodies
///
/// Both `text` and `user_id` must be present even though `user_id` is
/// replaced by the path id afterwards.
pub fn validate_post(body: &JsonObject) -> UsersResult<()> {
    if body.is_empty() {
        return Err(UsersError::MissingPostData);
    }

    if body.contains_key("text") && body.contains_key("user_id") {
        Ok(())
    } else {
        Err(UsersError::MissingTextField)
    }
}

fn string_field(body: &JsonObject, field: &'static str) -> UsersResult<String> {
    match body.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        _ => Err(UsersError::FieldNotString(field)),
    }
}

/// Validate and extract a user to insert. Only `name` is kept.
pub fn new_user(body: &JsonObject) -> UsersResult<NewUser> {
    validate_user(body)?;
    Ok(NewUser {
        name: string_field(body, "name")?,
    })
}

pub fn user_changes(body: &JsonObject) -> UsersResult<UserChanges> {
    validate_user(body)?;
    Ok(UserChanges {
        name: string_field(body, "name")?,
    })
}

/// Validate and extract a post owned by `owner`
pub fn new_post(body: &JsonObject, owner: UserId) -> UsersResult<NewPost> {
    validate_post(body)?;
    Ok(NewPost {
        text: string_field(body, "text")?,
        user_id: owner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_validate_user_rejects_empty_body() {
        let err = validate_user(&JsonObject::new()).unwrap_err();
        assert!(matches!(err, UsersError::MissingUserData));
        assert_eq!(err.to_string(), "Missing user data.");
    }

    #[test]
    fn test_validate_user_requires_name_key() {
        for body in [json!({ "nickname": "al" }), json!({ "id": 3 }), json!({ "Name": "x" })] {
            let err = validate_user(&object(body)).unwrap_err();
            assert_eq!(err.to_string(), "Missing required name field");
        }
    }

    #[test]
    fn test_validate_user_passes_with_name() {
        assert!(validate_user(&object(json!({ "name": "Alice" }))).is_ok());
        assert!(validate_user(&object(json!({ "name": "Alice", "extra": true }))).is_ok());
    }

    #[test]
    fn test_validate_post_rejects_empty_body() {
        let err = validate_post(&JsonObject::new()).unwrap_err();
        assert_eq!(err.to_string(), "Missing post data.");
    }

    #[test]
    fn test_validate_post_requires_text_and_user_id() {
        for body in [
            json!({ "text": "hello" }),
            json!({ "user_id": 1 }),
            json!({ "body": "hello" }),
        ] {
            let err = validate_post(&object(body)).unwrap_err();
            assert!(matches!(err, UsersError::MissingTextField));
            assert_eq!(err.to_string(), "Missing required text field");
        }

        assert!(validate_post(&object(json!({ "text": "hi", "user_id": null }))).is_ok());
    }

    #[test]
    fn test_new_user_keeps_only_name() {
        let user = new_user(&object(json!({ "name": "Alice", "id": 99 }))).unwrap();
        assert_eq!(user.name, "Alice");
    }

    #[test]
    fn test_new_user_rejects_non_string_name() {
        let err = new_user(&object(json!({ "name": 12 }))).unwrap_err();
        assert_eq!(err.to_string(), "Field name must be a string");
    }

    #[test]
    fn test_new_post_takes_owner_from_argument() {
        let post = new_post(
            &object(json!({ "text": "hello", "user_id": 777 })),
            UserId::new(4),
        )
        .unwrap();
        assert_eq!(post.user_id, UserId::new(4));
        assert_eq!(post.text, "hello");
    }

    #[test]
    fn test_user_changes_runs_validator_first() {
        let err = user_changes(&JsonObject::new()).unwrap_err();
        assert!(matches!(err, UsersError::MissingUserData));
    }
}
