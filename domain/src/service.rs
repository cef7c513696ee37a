use std::sync::Arc;

use crate::auth::SessionUser;
use crate::dashboard::{self, AdminOverview, MemberDashboard};
use crate::model::*;
use crate::patch::Patch;
use crate::slug::slugify;
use crate::store::SiteStore;
use crate::validate::{validate_appointment_patch, validate_new_appointment, validate_testimonial};
use crate::{Clock, CoreError, Document, IdGenerator, Record, RecordId, Repository};

/// Category value meaning "no category filter" on the blog page.
pub const ALL_CATEGORIES: &str = "Tümü";

/// Default session length when a booking does not name one.
const DEFAULT_SESSION_MINUTES: u32 = 20;

/// Upper bound on id draws before create gives up.
const MAX_ID_ATTEMPTS: usize = 100;

/// Which records a listing returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Active records only, sorted by their display order.
    Public,
    /// Every record in insertion order, as the admin panel shows them.
    All,
}

/// Application service over the site store: listings for the public pages
/// and create/update/delete for the admin panel.
///
/// Generic over the id generator and clock so tests stay deterministic.
pub struct ContentService<G: IdGenerator, C: Clock> {
    store: Arc<SiteStore>,
    ids: G,
    clock: C,
}

fn scoped<T>(
    mut items: Vec<T>,
    scope: Scope,
    is_active: impl Fn(&T) -> bool,
    order: impl Fn(&T) -> i32,
) -> Vec<T> {
    if scope == Scope::Public {
        items.retain(|t| is_active(t));
        items.sort_by_key(|t| order(t));
    }
    items
}

fn update_record<T: Record>(
    repo: &dyn Repository<T>,
    id: &RecordId,
    patch: impl Patch<T>,
) -> Result<T, CoreError> {
    let mut record = repo.get(id)?.ok_or(CoreError::NotFound(T::KIND))?;
    patch.apply_to(&mut record);
    repo.replace(record.clone())?;
    Ok(record)
}

fn update_document<T>(doc: &dyn Document<T>, patch: impl Patch<T>) -> Result<T, CoreError>
where
    T: Clone,
{
    let mut value = doc.load()?;
    patch.apply_to(&mut value);
    doc.save(value.clone())?;
    Ok(value)
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl<G: IdGenerator, C: Clock> ContentService<G, C> {
    pub fn new(store: Arc<SiteStore>, ids: G, clock: C) -> Self {
        Self { store, ids, clock }
    }

    /// Assign a fresh id and append the record; retries on collision.
    fn insert_new<T: Record>(&self, repo: &dyn Repository<T>, mut record: T) -> Result<T, CoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !id.is_assigned() {
                break;
            }
            if repo.get(&id)?.is_none() {
                record.set_id(id);
                repo.insert(record.clone())?;
                return Ok(record);
            }
        }
        Err(CoreError::Repository(format!(
            "failed to generate unique {} id",
            T::KIND
        )))
    }

    // ---- branches ----

    pub fn branches(&self, scope: Scope) -> Result<Vec<Branch>, CoreError> {
        let mut items = self.store.branches.list()?;
        if scope == Scope::Public {
            items.retain(|b| b.is_active);
        }
        Ok(items)
    }

    pub fn create_branch(&self, branch: Branch) -> Result<Branch, CoreError> {
        self.insert_new(self.store.branches.as_ref(), branch)
    }

    pub fn update_branch(&self, id: &RecordId, patch: BranchPatch) -> Result<Branch, CoreError> {
        update_record(self.store.branches.as_ref(), id, patch)
    }

    pub fn delete_branch(&self, id: &RecordId) -> Result<(), CoreError> {
        self.store.branches.remove(id)
    }

    // ---- homepage documents ----

    pub fn hero(&self) -> Result<HeroContent, CoreError> {
        self.store.hero.load()
    }

    pub fn update_hero(&self, patch: HeroPatch) -> Result<HeroContent, CoreError> {
        update_document(self.store.hero.as_ref(), patch)
    }

    pub fn about(&self) -> Result<AboutContent, CoreError> {
        self.store.about.load()
    }

    pub fn update_about(&self, patch: AboutPatch) -> Result<AboutContent, CoreError> {
        update_document(self.store.about.as_ref(), patch)
    }

    pub fn contact_info(&self) -> Result<ContactInfo, CoreError> {
        self.store.contact_info.load()
    }

    pub fn update_contact_info(&self, patch: ContactInfoPatch) -> Result<ContactInfo, CoreError> {
        update_document(self.store.contact_info.as_ref(), patch)
    }

    // ---- services ----

    pub fn services(&self, scope: Scope) -> Result<Vec<ServiceContent>, CoreError> {
        let items = self.store.services.list()?;
        Ok(scoped(items, scope, |s| s.is_active, |s| s.order))
    }

    pub fn create_service(&self, service: ServiceContent) -> Result<ServiceContent, CoreError> {
        self.insert_new(self.store.services.as_ref(), service)
    }

    pub fn update_service(
        &self,
        id: &RecordId,
        patch: ServicePatch,
    ) -> Result<ServiceContent, CoreError> {
        update_record(self.store.services.as_ref(), id, patch)
    }

    pub fn delete_service(&self, id: &RecordId) -> Result<(), CoreError> {
        self.store.services.remove(id)
    }

    // ---- pricing ----

    pub fn pricing_plans(&self, scope: Scope) -> Result<Vec<PricingPlan>, CoreError> {
        let items = self.store.pricing_plans.list()?;
        Ok(scoped(items, scope, |p| p.is_active, |p| p.order))
    }

    pub fn create_pricing_plan(&self, plan: PricingPlan) -> Result<PricingPlan, CoreError> {
        self.insert_new(self.store.pricing_plans.as_ref(), plan)
    }

    pub fn update_pricing_plan(
        &self,
        id: &RecordId,
        patch: PricingPlanPatch,
    ) -> Result<PricingPlan, CoreError> {
        update_record(self.store.pricing_plans.as_ref(), id, patch)
    }

    pub fn delete_pricing_plan(&self, id: &RecordId) -> Result<(), CoreError> {
        self.store.pricing_plans.remove(id)
    }

    // ---- testimonials ----

    pub fn testimonials(&self, scope: Scope) -> Result<Vec<Testimonial>, CoreError> {
        let items = self.store.testimonials.list()?;
        Ok(scoped(items, scope, |t| t.is_active, |t| t.order))
    }

    pub fn create_testimonial(&self, testimonial: Testimonial) -> Result<Testimonial, CoreError> {
        validate_testimonial(&testimonial)?;
        self.insert_new(self.store.testimonials.as_ref(), testimonial)
    }

    pub fn update_testimonial(
        &self,
        id: &RecordId,
        patch: TestimonialPatch,
    ) -> Result<Testimonial, CoreError> {
        let repo = self.store.testimonials.as_ref();
        let mut record = repo.get(id)?.ok_or(CoreError::NotFound(Testimonial::KIND))?;
        patch.apply_to(&mut record);
        validate_testimonial(&record)?;
        repo.replace(record.clone())?;
        Ok(record)
    }

    pub fn delete_testimonial(&self, id: &RecordId) -> Result<(), CoreError> {
        self.store.testimonials.remove(id)
    }

    // ---- blog ----

    /// Published, active posts, newest first.
    pub fn published_posts(&self) -> Result<Vec<BlogPost>, CoreError> {
        let mut posts = self.store.blog_posts.list()?;
        posts.retain(BlogPost::is_public);
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(posts)
    }

    pub fn all_posts(&self) -> Result<Vec<BlogPost>, CoreError> {
        self.store.blog_posts.list()
    }

    pub fn post_by_slug(&self, slug: &str) -> Result<BlogPost, CoreError> {
        self.published_posts()?
            .into_iter()
            .find(|p| p.slug == slug)
            .ok_or(CoreError::NotFound(BlogPost::KIND))
    }

    /// Filter published posts by exact category and a case-insensitive term
    /// matched against title, excerpt and tags. `None`, an empty string or
    /// [`ALL_CATEGORIES`] disables the category filter.
    pub fn search_posts(
        &self,
        category: Option<&str>,
        term: Option<&str>,
    ) -> Result<Vec<BlogPost>, CoreError> {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);
        let term = term
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());

        let mut posts = self.published_posts()?;
        posts.retain(|p| {
            let category_ok = category.map_or(true, |c| p.category == c);
            let term_ok = term.as_deref().map_or(true, |t| {
                contains_ci(&p.title, t)
                    || contains_ci(&p.excerpt, t)
                    || p.tags.iter().any(|tag| contains_ci(tag, t))
            });
            category_ok && term_ok
        });
        Ok(posts)
    }

    pub fn create_post(&self, mut post: BlogPost) -> Result<BlogPost, CoreError> {
        post.slug = slugify(&post.title);
        post.views = 0;
        post.likes = 0;
        post.comments = 0;
        self.insert_new(self.store.blog_posts.as_ref(), post)
    }

    /// Merge `patch` into a post. A new title without an explicit slug
    /// regenerates the slug.
    pub fn update_post(
        &self,
        id: &RecordId,
        mut patch: BlogPostPatch,
    ) -> Result<BlogPost, CoreError> {
        if patch.slug.is_none() {
            patch.slug = patch.title.as_deref().map(slugify);
        }
        update_record(self.store.blog_posts.as_ref(), id, patch)
    }

    pub fn delete_post(&self, id: &RecordId) -> Result<(), CoreError> {
        self.store.blog_posts.remove(id)
    }

    // ---- users ----

    pub fn users(&self) -> Result<Vec<UserProfile>, CoreError> {
        self.store.users.list()
    }

    pub fn create_user(&self, user: UserProfile) -> Result<UserProfile, CoreError> {
        self.insert_new(self.store.users.as_ref(), user)
    }

    pub fn update_user(
        &self,
        id: &RecordId,
        patch: UserProfilePatch,
    ) -> Result<UserProfile, CoreError> {
        update_record(self.store.users.as_ref(), id, patch)
    }

    pub fn delete_user(&self, id: &RecordId) -> Result<(), CoreError> {
        self.store.users.remove(id)
    }

    // ---- appointments ----

    pub fn appointments(&self) -> Result<Vec<Appointment>, CoreError> {
        self.store.appointments.list()
    }

    /// Book a new appointment. It starts out scheduled and is stamped with
    /// today's date.
    pub fn create_appointment(&self, input: NewAppointment) -> Result<Appointment, CoreError> {
        validate_new_appointment(&input)?;
        let date = input.date.ok_or_else(|| CoreError::invalid("date", "is required"))?;
        let appointment = Appointment {
            id: RecordId::default(),
            user_id: input.user_id,
            user_name: input.user_name.trim().to_string(),
            user_phone: input.user_phone.trim().to_string(),
            branch_id: input.branch_id,
            branch_name: input.branch_name,
            service_id: input.service_id,
            service_name: input.service_name,
            coach_id: input.coach_id,
            coach_name: input.coach_name,
            date,
            time: input.time,
            duration: input.duration.unwrap_or(DEFAULT_SESSION_MINUTES),
            price: input.price,
            status: AppointmentStatus::Scheduled,
            notes: input.notes,
            created_at: self.clock.today(),
        };
        self.insert_new(self.store.appointments.as_ref(), appointment)
    }

    pub fn update_appointment(
        &self,
        id: &RecordId,
        patch: AppointmentPatch,
    ) -> Result<Appointment, CoreError> {
        validate_appointment_patch(&patch)?;
        update_record(self.store.appointments.as_ref(), id, patch)
    }

    pub fn cancel_appointment(&self, id: &RecordId) -> Result<Appointment, CoreError> {
        self.update_appointment(
            id,
            AppointmentPatch {
                status: Some(AppointmentStatus::Cancelled),
                ..Default::default()
            },
        )
    }

    // ---- dashboards ----

    pub fn member_dashboard(&self, user: &SessionUser) -> Result<MemberDashboard, CoreError> {
        dashboard::member_dashboard(&self.store, user)
    }

    pub fn admin_overview(&self) -> Result<AdminOverview, CoreError> {
        dashboard::admin_overview(&self.store)
    }
}
