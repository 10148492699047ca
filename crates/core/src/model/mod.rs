pub mod section;
pub mod site;

pub use section::{Section, SectionRegistry};
pub use site::{About, ContactInfo, Hero, Project, Service, Site, Stat, Testimonial};
