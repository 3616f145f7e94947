use crate::person::Person;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub person: Option<Person>,
}
