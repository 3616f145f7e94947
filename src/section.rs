use crate::{news::News, person::Person};

/// One block of a person's detail view, carrying what it displays.
#[derive(Debug, Clone, PartialEq)]
pub enum PersonSection {
    Photo { image_url: Option<String> },
    Info {
        full_name: String,
        location: Option<String>,
        date_of_incident: Option<String>,
    },
    Story(Option<String>),
    Outcome(Option<String>),
    News(Vec<News>),
    Medias(Vec<News>),
    Hashtags(Vec<String>),
}

impl PersonSection {
    /// The sections for `person`, in display order.
    pub fn for_person(person: &Person, news: Vec<News>, medias: Vec<News>) -> Vec<PersonSection> {
        vec![
            PersonSection::Photo {
                image_url: person.first_image_url().map(str::to_string),
            },
            PersonSection::Info {
                full_name: person.full_name.clone(),
                location: person.location(),
                date_of_incident: person.date_of_incident.clone(),
            },
            PersonSection::Story(person.bio.clone()),
            PersonSection::Outcome(person.context.clone()),
            PersonSection::News(news),
            PersonSection::Medias(medias),
            PersonSection::Hashtags(person.hashtags.clone()),
        ]
    }

    pub fn identifier(&self) -> &'static str {
        match self {
            PersonSection::Photo { .. } => "PersonCellType_Photo",
            PersonSection::Info { .. } => "PersonCellType_Info",
            PersonSection::Story(_) => "PersonCellType_Story",
            PersonSection::Outcome(_) => "PersonCellType_Outcome",
            PersonSection::News(_) => "PersonCellType_News",
            PersonSection::Medias(_) => "PersonCellType_Media",
            PersonSection::Hashtags(_) => "PersonCellType_Hashtags",
        }
    }
}
