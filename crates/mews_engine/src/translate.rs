use mews_core::{Cat, Sex};
use serde::Deserialize;
use serde_json::Value;

use crate::raw::{Breeds, OneOrMany, Options, Photo, RawPetRecord};

const SIZE_LABELS: &[(&str, &str)] = &[("S", "Small"), ("M", "Medium"), ("L", "Large")];

const OPTION_LABELS: &[(&str, &str)] = &[
    ("altered", "Spayed/Neutered"),
    ("noDogs", "No Dogs"),
    ("noKids", "No Kids"),
    ("specialNeeds", "Special Needs"),
    ("noClaws", "Declawed"),
];

const THUMBNAIL_SIZE: &str = "fpm";
const THUMBNAIL_PHOTO_ID: &str = "1";
const FULL_SIZE: &str = "x";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("record has no id")]
    MissingId,
    #[error("record shape not understood: {0}")]
    Shape(String),
}

/// Reads one raw record out of the payload.
pub fn parse_record(value: &Value) -> Result<RawPetRecord, TranslateError> {
    RawPetRecord::deserialize(value).map_err(|err| TranslateError::Shape(err.to_string()))
}

/// Flattens a raw record into a [`Cat`].
///
/// Every field except the id has a defined fallback, so the only failure is
/// a record without an id.
pub fn translate(raw: &RawPetRecord) -> Result<Cat, TranslateError> {
    let id = raw.id.as_str();
    if id.trim().is_empty() {
        return Err(TranslateError::MissingId);
    }

    let mut cat = Cat::new(id);
    cat.name = raw.name.as_str().to_string();
    cat.description = raw.description.as_str().to_string();
    cat.sex = Sex::from_code(raw.sex.as_str());
    cat.age = raw.age.as_str().to_string();
    cat.size = lookup(SIZE_LABELS, raw.size.as_str()).unwrap_or("").to_string();
    cat.breed = breed_line(raw.breeds.as_ref());

    let photos = photos(raw);
    cat.thumbnail = thumbnail(photos);
    cat.pics = full_size_pics(photos);
    cat.options = option_labels(raw.options.as_ref());
    Ok(cat)
}

fn lookup(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, label)| *label)
}

/// A list gets one trailing space per entry; a lone breed stands as is, or
/// as a single space when it has no text.
fn breed_line(breeds: Option<&Breeds>) -> String {
    match breeds.and_then(|breeds| breeds.breed.as_ref()) {
        Some(OneOrMany::Many(list)) => list
            .iter()
            .map(|breed| format!("{} ", breed.as_str()))
            .collect(),
        Some(OneOrMany::One(breed)) if !breed.as_str().is_empty() => breed.as_str().to_string(),
        _ => " ".to_string(),
    }
}

fn photos(raw: &RawPetRecord) -> &[Photo] {
    raw.media
        .as_ref()
        .and_then(|media| media.photos.as_ref())
        .map(|photos| photos.photo.as_slice())
        .unwrap_or(&[])
}

fn thumbnail(photos: &[Photo]) -> String {
    photos
        .iter()
        .find(|photo| {
            photo.size.as_deref() == Some(THUMBNAIL_SIZE)
                && photo.id.as_deref() == Some(THUMBNAIL_PHOTO_ID)
        })
        .and_then(|photo| photo.url.clone())
        .unwrap_or_default()
}

fn full_size_pics(photos: &[Photo]) -> Vec<String> {
    photos
        .iter()
        .filter(|photo| photo.size.as_deref() == Some(FULL_SIZE))
        .map(|photo| photo.url.clone().unwrap_or_default())
        .collect()
}

fn option_labels(options: Option<&Options>) -> String {
    let labels: Vec<&str> = options
        .map(|options| options.option.as_slice())
        .unwrap_or(&[])
        .iter()
        .filter_map(|option| lookup(OPTION_LABELS, option.as_str()))
        .collect();
    labels.join(", ")
}
