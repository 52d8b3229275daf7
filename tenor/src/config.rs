#[derive(Debug, Clone)]
pub struct ClientConfig
{
    pub key: String,
    pub client_key: Option<String>,
    pub country: Option<String>,
    pub locale: Option<String>,
}

impl ClientConfig
{
    pub fn new<T: Into<String>>(key: T) -> Self
    {
        ClientConfig
        {
            key: key.into(),
            client_key: None,
            country: None,
            locale: None,
        }
    }
}
