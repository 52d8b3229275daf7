use std::collections::BTreeMap;

// Parameters whose caller-facing name differs from the name the
// remote API expects on the wire. Every other name passes through
// unchanged. This table never changes at runtime.

const RENAME_TABLE: &[(&str, &str)] = &[
    ("aspect_ratio_range", "ar_range"),
    ("content_filter", "contentfilter"),
    ("kind", "type"),
    ("position", "pos"),
    ("random_order", "random"),
    ("search_filter", "searchfilter"),
    ("search_term", "q"),
];

#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue
{
    Str(String),
    Num(i64),
    Flag(bool),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Params
{
    values: BTreeMap<&'static str, ParamValue>,
}

impl Params
{
    pub fn new() -> Self
    {
        Params
        {
            values: BTreeMap::new(),
        }
    }

    pub fn key<T: Into<String>>(self, value: T) -> Self
    {
        self.set("key", ParamValue::Str(value.into()))
    }

    pub fn client_key<T: Into<String>>(self, value: T) -> Self
    {
        self.set("client_key", ParamValue::Str(value.into()))
    }

    pub fn country<T: Into<String>>(self, value: T) -> Self
    {
        self.set("country", ParamValue::Str(value.into()))
    }

    pub fn locale<T: Into<String>>(self, value: T) -> Self
    {
        self.set("locale", ParamValue::Str(value.into()))
    }

    pub fn search_term<T: Into<String>>(self, value: T) -> Self
    {
        self.set("search_term", ParamValue::Str(value.into()))
    }

    pub fn content_filter<T: Into<String>>(self, value: T) -> Self
    {
        self.set("content_filter", ParamValue::Str(value.into()))
    }

    pub fn search_filter<T: Into<String>>(self, value: T) -> Self
    {
        self.set("search_filter", ParamValue::Str(value.into()))
    }

    pub fn media_filter<T: Into<String>>(self, value: T) -> Self
    {
        self.set("media_filter", ParamValue::Str(value.into()))
    }

    pub fn aspect_ratio_range<T: Into<String>>(self, value: T) -> Self
    {
        self.set("aspect_ratio_range", ParamValue::Str(value.into()))
    }

    pub fn position<T: Into<String>>(self, value: T) -> Self
    {
        self.set("position", ParamValue::Str(value.into()))
    }

    pub fn random_order(self, value: bool) -> Self
    {
        self.set("random_order", ParamValue::Flag(value))
    }

    pub fn limit(self, value: i64) -> Self
    {
        self.set("limit", ParamValue::Num(value))
    }

    pub fn ids(self, values: Vec<String>) -> Self
    {
        self.set("ids", ParamValue::List(values))
    }

    pub fn id<T: Into<String>>(self, value: T) -> Self
    {
        self.set("id", ParamValue::Str(value.into()))
    }

    pub fn kind<T: Into<String>>(self, value: T) -> Self
    {
        self.set("kind", ParamValue::Str(value.into()))
    }

    fn set(mut self, name: &'static str, value: ParamValue) -> Self
    {
        self.values.insert(name, value);
        self
    }

    pub fn merge(mut self, overrides: Params) -> Self
    {
        for (name, value) in overrides.values
        {
            self.values.insert(name, value);
        }

        self
    }

    pub fn normalize(self) -> Self
    {
        let mut values = BTreeMap::new();

        for (name, value) in self.values
        {
            values.insert(wire_name(name), value);
        }

        Params{ values }
    }

    pub fn to_query_string(&self) -> String
    {
        let mut query = String::new();

        for (name, value) in &self.values
        {
            // Empty strings, zero, false and empty lists never reach
            // the wire - the remote defaults then apply.

            if value.is_falsy()
            {
                continue;
            }

            if !query.is_empty()
            {
                query.push('&');
            }

            query.push_str(name);
            query.push('=');
            query.push_str(&value.to_wire_string());
        }

        query
    }
}

impl ParamValue
{
    fn is_falsy(&self) -> bool
    {
        match self
        {
            ParamValue::Str(text) =>
            {
                text.is_empty()
            },
            ParamValue::Num(num) =>
            {
                *num == 0
            },
            ParamValue::Flag(flag) =>
            {
                !flag
            },
            ParamValue::List(items) =>
            {
                items.is_empty()
            },
        }
    }

    fn to_wire_string(&self) -> String
    {
        match self
        {
            ParamValue::Str(text) =>
            {
                urlencoding::encode(text).into_owned()
            },
            ParamValue::Num(num) =>
            {
                num.to_string()
            },
            ParamValue::Flag(flag) =>
            {
                flag.to_string()
            },
            ParamValue::List(items) =>
            {
                // A list serializes as a single parameter with its
                // items comma-joined, each item encoded on its own

                let encoded: Vec<String> = items
                    .iter()
                    .map(|item| urlencoding::encode(item).into_owned())
                    .collect();

                encoded.join(",")
            },
        }
    }
}

fn wire_name(name: &'static str) -> &'static str
{
    for (idiomatic, wire) in RENAME_TABLE
    {
        if *idiomatic == name
        {
            return wire;
        }
    }

    name
}
