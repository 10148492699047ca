//! Site document loading: parse a JSON content file into a [`Site`] and
//! validate it before any view touches it.

use thiserror::Error;

use crate::model::Site;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed site document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid site content: {0}")]
    Invalid(String),
}

/// Parse and validate a site content document.
pub fn load_site(data: &[u8]) -> Result<Site, ContentError> {
    let site: Site = serde_json::from_slice(data)?;
    validate(&site)?;
    Ok(site)
}

fn validate(site: &Site) -> Result<(), ContentError> {
    if site.title.trim().is_empty() {
        return Err(ContentError::Invalid("title is empty".into()));
    }
    if site.projects.is_empty() {
        return Err(ContentError::Invalid("portfolio has no projects".into()));
    }
    let mut ids: Vec<u64> = site.projects.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.len() != site.projects.len() {
        return Err(ContentError::Invalid("duplicate project ids".into()));
    }
    if site.services.is_empty() {
        return Err(ContentError::Invalid("no services defined".into()));
    }
    for t in &site.testimonials {
        if !(1..=5).contains(&t.rating) {
            return Err(ContentError::Invalid(format!(
                "testimonial rating out of range for {}: {}",
                t.name, t.rating
            )));
        }
    }
    Ok(())
}
