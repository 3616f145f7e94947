use crate::page::null_as_default;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PersonImage {
    pub id: i32,
    pub image_url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i32,
    pub full_name: String,
    pub identifier: Option<String>,
    pub date_of_incident: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub bio: Option<String>,
    pub context: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<PersonImage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hashtags: Vec<String>,
}

impl Person {
    pub fn first_image_url(&self) -> Option<&str> {
        self.images.first().map(|i| i.image_url.as_str())
    }

    /// "City, Country" with whichever parts are known.
    pub fn location(&self) -> Option<String> {
        match (self.city.as_deref(), self.country.as_deref()) {
            (Some(city), Some(country)) => Some(format!("{city}, {country}")),
            (Some(one), None) | (None, Some(one)) => Some(one.to_string()),
            (None, None) => None,
        }
    }
}
