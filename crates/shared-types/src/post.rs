use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "validation")]
use validator::{Validate, ValidationError};

use crate::form::{FieldErrors, FormField, FormModel};

pub const TITLE_REQUIRED: &str = "Enter a title";
pub const CATEGORIES_REQUIRED: &str = "Enter some categories";
pub const CONTENT_REQUIRED: &str = "Enter some content please";

/// Fields of the new-post form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostField {
    Title,
    Categories,
    Content,
}

impl PostField {
    pub fn label(self) -> &'static str {
        match self {
            PostField::Title => "Title",
            PostField::Categories => "Categories",
            PostField::Content => "Post Content",
        }
    }

    pub fn required_message(self) -> &'static str {
        match self {
            PostField::Title => TITLE_REQUIRED,
            PostField::Categories => CATEGORIES_REQUIRED,
            PostField::Content => CONTENT_REQUIRED,
        }
    }
}

impl FormField for PostField {
    const ALL: &'static [Self] = &[PostField::Title, PostField::Categories, PostField::Content];

    fn name(self) -> &'static str {
        match self {
            PostField::Title => "title",
            PostField::Categories => "categories",
            PostField::Content => "content",
        }
    }
}

/// Values edited by the new-post form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFormValues {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub categories: String,
    #[serde(default)]
    pub content: String,
}

impl PostFormValues {
    pub fn new(
        title: impl Into<String>,
        categories: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            categories: categories.into(),
            content: content.into(),
        }
    }
}

/// Required-field check for the new-post form: one error per empty field.
pub fn validate_post(values: &PostFormValues) -> FieldErrors<PostField> {
    let mut errors = FieldErrors::new();
    for field in PostField::ALL {
        if values.value(*field).is_empty() {
            errors.insert(*field, field.required_message());
        }
    }
    errors
}

impl FormModel for PostFormValues {
    type Field = PostField;

    fn value(&self, field: PostField) -> &str {
        match field {
            PostField::Title => &self.title,
            PostField::Categories => &self.categories,
            PostField::Content => &self.content,
        }
    }

    fn set_value(&mut self, field: PostField, value: String) {
        match field {
            PostField::Title => self.title = value,
            PostField::Categories => self.categories = value,
            PostField::Content => self.content = value,
        }
    }

    fn validate(&self) -> FieldErrors<PostField> {
        validate_post(self)
    }
}

/// A stored blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub categories: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for creating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreatePostRequest {
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "require_title"))
    )]
    pub title: String,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "require_categories"))
    )]
    pub categories: String,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "require_content"))
    )]
    pub content: String,
}

#[cfg(feature = "validation")]
fn require(field: PostField, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let err = ValidationError::new("required")
            .with_message(std::borrow::Cow::Borrowed(field.required_message()));
        return Err(err);
    }
    Ok(())
}

#[cfg(feature = "validation")]
fn require_title(value: &str) -> Result<(), ValidationError> {
    require(PostField::Title, value)
}

#[cfg(feature = "validation")]
fn require_categories(value: &str) -> Result<(), ValidationError> {
    require(PostField::Categories, value)
}

#[cfg(feature = "validation")]
fn require_content(value: &str) -> Result<(), ValidationError> {
    require(PostField::Content, value)
}

impl CreatePostRequest {
    /// Trim surrounding whitespace so blank-only input fails the required check.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            categories: self.categories.trim().to_string(),
            content: self.content.trim().to_string(),
        }
    }
}

impl From<PostFormValues> for CreatePostRequest {
    fn from(values: PostFormValues) -> Self {
        Self {
            title: values.title,
            categories: values.categories,
            content: values.content,
        }
    }
}
