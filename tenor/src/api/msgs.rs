use std::collections::HashMap;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[allow(dead_code)]
pub struct SearchResponse
{
    pub results: Vec<GifObject>,
    pub next: Option<String>,
    pub locale: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[allow(dead_code)]
pub struct GifObject
{
    pub id: String,
    pub title: Option<String>,
    #[serde(default)]
    pub media_formats: HashMap<String, MediaObject>,
    pub created: Option<f64>,
    pub content_description: Option<String>,
    pub itemurl: Option<String>,
    pub url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub flags: Option<Vec<String>>,
    pub hasaudio: Option<bool>,
}

#[derive(Deserialize, Debug, Clone)]
#[allow(dead_code)]
pub struct MediaObject
{
    pub url: String,
    pub duration: Option<f64>,
    pub preview: Option<String>,
    pub dims: Option<Vec<i64>>,
    pub size: Option<u64>,
}

#[derive(Deserialize, Debug, Clone)]
#[allow(dead_code)]
pub struct TermsResponse
{
    pub results: Vec<String>,
    pub locale: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[allow(dead_code)]
pub struct CategoriesResponse
{
    pub tags: Vec<CategoryTag>,
    pub locale: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[allow(dead_code)]
pub struct CategoryTag
{
    pub searchterm: String,
    pub path: String,
    pub image: String,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
#[allow(dead_code)]
pub struct ShareResponse
{
    pub status: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ErrorEnvelope
{
    pub error: ErrorBody,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ErrorBody
{
    pub code: ErrorCode,
    pub message: String,
}

// The remote service has been seen returning both numeric and
// string error codes

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ErrorCode
{
    Num(i64),
    Text(String),
}

impl std::fmt::Display for ErrorCode
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error>
    {
        match self
        {
            ErrorCode::Num(num) =>
            {
                write!(f, "{}", num)
            },
            ErrorCode::Text(text) =>
            {
                write!(f, "{}", text)
            },
        }
    }
}
