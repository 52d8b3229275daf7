use snafu::Snafu;
use snafu::IntoError;

use super::msgs::ErrorCode;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TenorApiError
{
    #[snafu(display("curl error: {:?}", source))]
    CurlError{ source: curl::Error },
    #[snafu(display("JSON error: {:?}", source))]
    JsonError{ source: serde_json::Error },
    #[snafu(display("Tenor API error {}: {}", code, message))]
    RemoteError{ code: ErrorCode, message: String },
}

impl From<curl::Error> for TenorApiError
{
    fn from(source: curl::Error) -> Self
    {
        CurlSnafu{}.into_error(source)
    }
}

impl From<serde_json::Error> for TenorApiError
{
    fn from(source: serde_json::Error) -> Self
    {
        JsonSnafu{}.into_error(source)
    }
}
