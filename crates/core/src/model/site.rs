use serde::{Deserialize, Serialize};

/// A portfolio entry rendered as one card in the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
}

/// A bookable service with its feature list and pricing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub image: String,
    pub features: Vec<String>,
    pub price: String,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub image: String,
    pub quote: String,
    /// Star rating, 1..=5.
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub bio: String,
    pub image: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub heading: String,
    pub subheading: String,
    pub image: String,
    pub cta_label: String,
    /// Section the hero call-to-action navigates to.
    pub cta_target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub socials: Vec<String>,
}

/// The entire static content of the page. The views contain no decision
/// logic beyond "for each item, render a card"; everything they show
/// lives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub title: String,
    pub hero: Hero,
    pub projects: Vec<Project>,
    pub about: About,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub contact: ContactInfo,
}

impl Site {
    /// The stock "Lens & Light" photography site.
    pub fn builtin() -> Self {
        Self {
            title: "Lens & Light".into(),
            hero: Hero {
                heading: "Capturing Moments, Creating Stories".into(),
                subheading: "Professional photography that tells your unique story".into(),
                image: "https://images.unsplash.com/photo-1452587925148-ce544e77e70d".into(),
                cta_label: "View Portfolio".into(),
                cta_target: "portfolio".into(),
            },
            projects: vec![
                Project {
                    id: 1,
                    title: "Urban Landscapes".into(),
                    category: "Photography".into(),
                    image: "https://images.unsplash.com/photo-1449824913935-59a10b8d2000".into(),
                    description: "Exploring the beauty of modern architecture".into(),
                },
                Project {
                    id: 2,
                    title: "Wedding Stories".into(),
                    category: "Weddings".into(),
                    image: "https://images.unsplash.com/photo-1519741497674-611481863552".into(),
                    description: "Capturing love stories through timeless moments".into(),
                },
                Project {
                    id: 3,
                    title: "Portrait Series".into(),
                    category: "Portraits".into(),
                    image: "https://images.unsplash.com/photo-1531746020798-e6953c6e8e04".into(),
                    description: "Personal portraits that tell your story".into(),
                },
            ],
            about: About {
                heading: "About Me".into(),
                bio: "Passionate photographer with a keen eye for capturing life's precious \
                      moments. Every shot tells a unique story, crafted with creativity and \
                      attention to detail."
                    .into(),
                image: "https://images.unsplash.com/photo-1554048612-b6a482bc67e5".into(),
                stats: vec![
                    Stat {
                        number: "8+".into(),
                        label: "Years Experience".into(),
                    },
                    Stat {
                        number: "500+".into(),
                        label: "Photo Sessions".into(),
                    },
                    Stat {
                        number: "50+".into(),
                        label: "Wedding Events".into(),
                    },
                ],
            },
            services: vec![
                Service {
                    title: "Wedding Photography".into(),
                    description: "Capturing the magic of your special day with timeless \
                                  elegance and authenticity."
                        .into(),
                    image: "https://images.unsplash.com/photo-1519741497674-611481863552".into(),
                    features: vec![
                        "Engagement Sessions".into(),
                        "Full Day Coverage".into(),
                        "Digital Gallery".into(),
                        "Premium Album".into(),
                    ],
                    price: "Starting at $2,500".into(),
                    popular: false,
                },
                Service {
                    title: "Portrait Sessions".into(),
                    description: "Professional portraits that reflect your personality and \
                                  tell your unique story."
                        .into(),
                    image: "https://images.unsplash.com/photo-1516035069371-29a1b244cc32".into(),
                    features: vec![
                        "Indoor/Outdoor".into(),
                        "Multiple Outfits".into(),
                        "Retouching".into(),
                        "Digital Delivery".into(),
                    ],
                    price: "Starting at $500".into(),
                    popular: true,
                },
                Service {
                    title: "Event Coverage".into(),
                    description: "Dynamic event photography that captures the energy and \
                                  excitement of your occasion."
                        .into(),
                    image: "https://images.unsplash.com/photo-1475721027785-f74eccf877e2".into(),
                    features: vec![
                        "Corporate Events".into(),
                        "Social Gatherings".into(),
                        "Quick Turnaround".into(),
                        "Online Gallery".into(),
                    ],
                    price: "Starting at $1,000".into(),
                    popular: false,
                },
            ],
            testimonials: vec![
                Testimonial {
                    name: "Sarah & James".into(),
                    role: "Wedding Couple".into(),
                    image: "https://images.unsplash.com/photo-1583939003579-730e3918a45a".into(),
                    quote: "Our wedding photos are absolutely stunning! They captured every \
                            special moment perfectly, and the attention to detail was amazing."
                        .into(),
                    rating: 5,
                },
                Testimonial {
                    name: "Emily Chen".into(),
                    role: "Portrait Client".into(),
                    image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330".into(),
                    quote: "The portrait session was so fun and comfortable. The photos truly \
                            reflect my personality, and I couldn't be happier with the results!"
                        .into(),
                    rating: 5,
                },
                Testimonial {
                    name: "Michael Rodriguez".into(),
                    role: "Corporate Event Manager".into(),
                    image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e".into(),
                    quote: "Professional, punctual, and produced amazing photos of our \
                            corporate event. Will definitely hire again!"
                        .into(),
                    rating: 5,
                },
            ],
            contact: ContactInfo {
                phone: "+1 (555) 123-4567".into(),
                email: "contact@lensandlight.com".into(),
                location: "123 Photography Lane, Artistic District, CA 90210".into(),
                socials: vec!["Instagram".into(), "Facebook".into(), "Twitter".into()],
            },
        }
    }
}
