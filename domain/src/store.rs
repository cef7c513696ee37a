//! The process-wide content store.

use crate::adapters::memory_repo::{InMemoryCollection, InMemoryDocument};
use crate::model::*;
use crate::{seed, Document, Repository};

/// Every collection and document the portal serves, behind the storage
/// ports. A process builds one `SiteStore` and shares it through an `Arc`.
pub struct SiteStore {
    pub branches: Box<dyn Repository<Branch>>,
    pub services: Box<dyn Repository<ServiceContent>>,
    pub pricing_plans: Box<dyn Repository<PricingPlan>>,
    pub testimonials: Box<dyn Repository<Testimonial>>,
    pub blog_posts: Box<dyn Repository<BlogPost>>,
    pub users: Box<dyn Repository<UserProfile>>,
    pub appointments: Box<dyn Repository<Appointment>>,
    pub hero: Box<dyn Document<HeroContent>>,
    pub about: Box<dyn Document<AboutContent>>,
    pub contact_info: Box<dyn Document<ContactInfo>>,
}

impl SiteStore {
    /// Empty collections and blank documents.
    pub fn empty() -> Self {
        Self {
            branches: Box::new(InMemoryCollection::new()),
            services: Box::new(InMemoryCollection::new()),
            pricing_plans: Box::new(InMemoryCollection::new()),
            testimonials: Box::new(InMemoryCollection::new()),
            blog_posts: Box::new(InMemoryCollection::new()),
            users: Box::new(InMemoryCollection::new()),
            appointments: Box::new(InMemoryCollection::new()),
            hero: Box::new(InMemoryDocument::new(HeroContent::default())),
            about: Box::new(InMemoryDocument::new(AboutContent::default())),
            contact_info: Box::new(InMemoryDocument::new(ContactInfo::default())),
        }
    }

    /// Store pre-filled with the studio's demo content.
    pub fn seeded() -> Self {
        Self {
            branches: Box::new(InMemoryCollection::from_records(seed::branches())),
            services: Box::new(InMemoryCollection::from_records(seed::services())),
            pricing_plans: Box::new(InMemoryCollection::from_records(seed::pricing_plans())),
            testimonials: Box::new(InMemoryCollection::from_records(seed::testimonials())),
            blog_posts: Box::new(InMemoryCollection::from_records(seed::blog_posts())),
            users: Box::new(InMemoryCollection::from_records(seed::users())),
            appointments: Box::new(InMemoryCollection::from_records(seed::appointments())),
            hero: Box::new(InMemoryDocument::new(seed::hero())),
            about: Box::new(InMemoryDocument::new(seed::about())),
            contact_info: Box::new(InMemoryDocument::new(seed::contact_info())),
        }
    }
}
