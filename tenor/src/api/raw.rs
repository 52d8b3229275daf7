use curl::easy::Easy;
use serde::de::DeserializeOwned;

use super::err::RemoteSnafu;
use super::msgs::ErrorEnvelope;
use super::TenorApiError;

pub(crate) fn http_get(url: &str) -> Result<(u32, Vec<u8>), TenorApiError>
{
    let mut data = Vec::new();
    let mut handle = Easy::new();
    handle.url(url)?;

    {
        let mut transfer = handle.transfer();
        transfer.write_function(|new_data| {
            data.extend_from_slice(new_data);
            Ok(new_data.len())
        })?;
        transfer.perform()?;
    }

    let status = handle.response_code()?;

    Ok((status, data))
}

pub(crate) fn decode_response<T: DeserializeOwned>(status: u32, data: &[u8]) -> Result<T, TenorApiError>
{
    // Success versus error is decided by the HTTP status alone -
    // the body is decoded either way

    if status < 200 || status >= 300
    {
        let envelope = serde_json::from_slice::<ErrorEnvelope>(data)?;

        return RemoteSnafu
        {
            code: envelope.error.code,
            message: envelope.error.message,
        }.fail();
    }

    let body = serde_json::from_slice::<T>(data)?;

    Ok(body)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use super::super::msgs::{ErrorCode, SearchResponse, ShareResponse};

    #[test]
    pub fn test_success_body_decodes_as_envelope()
    {
        let body = br#"{"results":[],"next":""}"#;

        let response = decode_response::<SearchResponse>(200, body).unwrap();

        assert!(response.results.is_empty());
        assert_eq!(response.next, Some("".to_owned()));
        assert_eq!(response.locale, None);
    }

    #[test]
    pub fn test_result_items_decode()
    {
        let body = br#"{
            "results": [
                {
                    "id": "16989471141791455574",
                    "title": "",
                    "media_formats": {
                        "gif": {
                            "url": "https://media.tenor.com/a/b.gif",
                            "duration": 1.5,
                            "dims": [498, 278],
                            "size": 1404619
                        }
                    },
                    "created": 1612452380.0,
                    "content_description": "excited dog",
                    "itemurl": "https://tenor.com/view/b",
                    "url": "https://tenor.com/b",
                    "hasaudio": false
                }
            ],
            "next": "CAgQvq2vhZ..."
        }"#;

        let response = decode_response::<SearchResponse>(200, body).unwrap();

        assert_eq!(response.results.len(), 1);

        let gif = &response.results[0];
        assert_eq!(gif.id, "16989471141791455574");
        assert_eq!(gif.hasaudio, Some(false));

        let media = gif.media_formats.get("gif").unwrap();
        assert_eq!(media.url, "https://media.tenor.com/a/b.gif");
        assert_eq!(media.duration, Some(1.5));
        assert_eq!(media.dims, Some(vec![498, 278]));
        assert_eq!(media.size, Some(1404619));
    }

    #[test]
    pub fn test_error_status_decodes_as_error_envelope()
    {
        let body = br#"{"error":{"code":"BAD_REQUEST","message":"x"}}"#;

        let err = decode_response::<SearchResponse>(400, body).unwrap_err();

        match err
        {
            TenorApiError::RemoteError{code, message} =>
            {
                assert_eq!(code, ErrorCode::Text("BAD_REQUEST".to_owned()));
                assert_eq!(message, "x");
            },
            other =>
            {
                panic!("unexpected error: {:?}", other);
            },
        }
    }

    #[test]
    pub fn test_numeric_error_code()
    {
        let body = br#"{"error":{"code":429,"message":"quota exceeded"}}"#;

        let err = decode_response::<SearchResponse>(429, body).unwrap_err();

        match err
        {
            TenorApiError::RemoteError{code, message} =>
            {
                assert_eq!(code, ErrorCode::Num(429));
                assert_eq!(message, "quota exceeded");
            },
            other =>
            {
                panic!("unexpected error: {:?}", other);
            },
        }
    }

    #[test]
    pub fn test_malformed_body_is_a_json_error()
    {
        let err = decode_response::<SearchResponse>(200, b"not json").unwrap_err();

        match err
        {
            TenorApiError::JsonError{..} =>
            {
            },
            other =>
            {
                panic!("unexpected error: {:?}", other);
            },
        }
    }

    #[test]
    pub fn test_share_status_envelope()
    {
        let response = decode_response::<ShareResponse>(200, br#"{"status": true}"#).unwrap();

        assert_eq!(response.status, true);
    }
}
