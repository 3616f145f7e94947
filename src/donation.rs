use crate::person::Person;
use serde::Deserialize;

/// Something the app asks the reader to act on.
pub trait CallToAction {
    fn title(&self) -> &str;
    fn body(&self) -> Option<&str>;
    fn image_path(&self) -> Option<&str>;
    fn tag(&self) -> Option<String>;
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DonationType {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Donation {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub person: Option<Person>,
    #[serde(rename = "type")]
    pub kind: Option<DonationType>,
    #[serde(rename = "banner_img_url")]
    pub banner_image_path: Option<String>,
}

impl CallToAction for Donation {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn image_path(&self) -> Option<&str> {
        self.banner_image_path.as_deref()
    }

    fn tag(&self) -> Option<String> {
        self.kind.as_ref().map(|k| k.kind.to_uppercase())
    }
}
