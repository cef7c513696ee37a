//! Content and membership records of the portal.
//!
//! Field names follow the camelCase JSON the admin panel exchanges. Records
//! carry no invariants beyond field presence: references such as
//! `Testimonial::branch_id` are plain ids and are never checked or cascaded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::patch::patch_struct;
use crate::{Record, RecordId};

fn default_true() -> bool {
    true
}

macro_rules! impl_record {
    ($ty:ty, $kind:literal) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> &RecordId {
                &self.id
            }

            fn set_id(&mut self, id: RecordId) {
                self.id = id;
            }
        }
    };
}

// ============ Shared pieces ============

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub weekdays: String,
    pub saturday: String,
    pub sunday: String,
}

// ============ Branch ============

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub manager: String,
    pub capacity: u32,
    pub working_hours: WorkingHours,
    /// Ids of the services offered at this branch.
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub opening_date: NaiveDate,
    #[serde(default)]
    pub image: String,
}

impl_record!(Branch, "branch");

patch_struct! {
    pub struct BranchPatch for Branch {
        name: String,
        address: String,
        phone: String,
        email: String,
        manager: String,
        capacity: u32,
        working_hours: WorkingHours,
        services: Vec<String>,
        is_active: bool,
        opening_date: NaiveDate,
        image: String,
    }
}

// ============ Homepage copy ============

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
    pub background_image: String,
    pub is_active: bool,
}

patch_struct! {
    pub struct HeroPatch for HeroContent {
        title: String,
        subtitle: String,
        description: String,
        button_text: String,
        button_link: String,
        background_image: String,
        is_active: bool,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutStats {
    pub experience: String,
    pub clients: String,
    pub success: String,
    pub branches: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub features: Vec<String>,
    pub image: String,
    pub stats: AboutStats,
    pub is_active: bool,
}

patch_struct! {
    pub struct AboutPatch for AboutContent {
        title: String,
        subtitle: String,
        description: String,
        features: Vec<String>,
        image: String,
        stats: AboutStats,
        is_active: bool,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    pub youtube: String,
    pub whatsapp: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub id: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub working_hours: WorkingHours,
    pub social_media: SocialLinks,
}

patch_struct! {
    pub struct ContactInfoPatch for ContactInfo {
        address: String,
        phone: String,
        email: String,
        working_hours: WorkingHours,
        social_media: SocialLinks,
    }
}

// ============ Services & pricing ============

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceContent {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    pub price: u32,
    /// Session length in minutes.
    pub duration: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub available_branches: Vec<String>,
}

impl_record!(ServiceContent, "service");

patch_struct! {
    pub struct ServicePatch for ServiceContent {
        name: String,
        description: String,
        short_description: String,
        price: u32,
        duration: u32,
        features: Vec<String>,
        image: String,
        category: String,
        is_active: bool,
        order: i32,
        available_branches: Vec<String>,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    pub price: u32,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub available_branches: Vec<String>,
}

impl_record!(PricingPlan, "pricing plan");

patch_struct! {
    pub struct PricingPlanPatch for PricingPlan {
        name: String,
        price: u32,
        period: String,
        description: String,
        features: Vec<String>,
        is_popular: bool,
        is_active: bool,
        order: i32,
        available_branches: Vec<String>,
    }
}

// ============ Testimonials ============

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub content: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    #[serde(default)]
    pub image: String,
    pub branch_id: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
    pub date: NaiveDate,
}

impl_record!(Testimonial, "testimonial");

patch_struct! {
    pub struct TestimonialPatch for Testimonial {
        name: String,
        role: String,
        content: String,
        rating: u8,
        image: String,
        branch_id: String,
        is_active: bool,
        order: i32,
        date: NaiveDate,
    }
}

// ============ Blog ============

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(default)]
    pub id: RecordId,
    pub title: String,
    /// Derived from the title when the post is created.
    #[serde(default)]
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub author_image: String,
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published_at: NaiveDate,
    pub status: PostStatus,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
}

impl_record!(BlogPost, "blog post");

impl BlogPost {
    pub fn is_public(&self) -> bool {
        self.status == PostStatus::Published && self.is_active
    }
}

patch_struct! {
    pub struct BlogPostPatch for BlogPost {
        title: String,
        slug: String,
        excerpt: String,
        content: String,
        author: String,
        author_image: String,
        image: String,
        category: String,
        tags: Vec<String>,
        published_at: NaiveDate,
        status: PostStatus,
        views: u32,
        likes: u32,
        comments: u32,
        is_active: bool,
        is_featured: bool,
    }
}

// ============ Users & memberships ============

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Suspended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileRole {
    User,
    Coach,
    Admin,
    BranchManager,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Active,
    Expired,
    Cancelled,
    Suspended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMembership {
    pub id: String,
    pub user_id: String,
    pub plan_id: String,
    pub plan_name: String,
    pub branch_id: String,
    pub branch_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: MembershipStatus,
    pub remaining_sessions: u32,
    pub total_sessions: u32,
    pub price: u32,
    pub payment_status: PaymentStatus,
    pub auto_renew: bool,
}

impl UserMembership {
    /// Share of the package already used, in percent.
    pub fn progress_percent(&self) -> f64 {
        if self.total_sessions == 0 {
            return 0.0;
        }
        let used = self.total_sessions.saturating_sub(self.remaining_sessions);
        f64::from(used) / f64::from(self.total_sessions) * 100.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relation: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalInfo {
    pub conditions: Vec<String>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
    pub notes: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub email: bool,
    pub sms: bool,
    pub whatsapp: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub preferred_coach: String,
    pub preferred_time: String,
    pub goals: Vec<String>,
    pub notifications: NotificationPrefs,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_info: Option<MedicalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership: Option<UserMembership>,
    pub join_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<NaiveDate>,
    pub status: AccountStatus,
    pub role: ProfileRole,
}

impl_record!(UserProfile, "user");

patch_struct! {
    pub struct UserProfilePatch for UserProfile {
        name: String,
        email: String,
        phone: String,
        date_of_birth: Option<NaiveDate>,
        gender: Option<Gender>,
        address: Option<String>,
        preferred_branch: Option<String>,
        emergency_contact: Option<EmergencyContact>,
        medical_info: Option<MedicalInfo>,
        preferences: Option<Preferences>,
        membership: Option<UserMembership>,
        join_date: NaiveDate,
        last_login: Option<NaiveDate>,
        status: AccountStatus,
        role: ProfileRole,
    }
}

// ============ Appointments ============

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: RecordId,
    pub user_id: String,
    pub user_name: String,
    pub user_phone: String,
    pub branch_id: String,
    pub branch_name: String,
    pub service_id: String,
    pub service_name: String,
    pub coach_id: String,
    pub coach_name: String,
    pub date: NaiveDate,
    /// Slot start, `HH:MM`.
    pub time: String,
    pub duration: u32,
    pub price: u32,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: NaiveDate,
}

impl_record!(Appointment, "appointment");

/// Booking data submitted for a new appointment. Id, status and creation
/// date are assigned by the service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewAppointment {
    pub user_id: String,
    pub user_name: String,
    pub user_phone: String,
    pub branch_id: String,
    pub branch_name: String,
    pub service_id: String,
    pub service_name: String,
    pub coach_id: String,
    pub coach_name: String,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub duration: Option<u32>,
    pub price: u32,
    pub notes: Option<String>,
}

patch_struct! {
    pub struct AppointmentPatch for Appointment {
        user_id: String,
        user_name: String,
        user_phone: String,
        branch_id: String,
        branch_name: String,
        service_id: String,
        service_name: String,
        coach_id: String,
        coach_name: String,
        date: NaiveDate,
        time: String,
        duration: u32,
        price: u32,
        status: AppointmentStatus,
        notes: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::Patch;

    fn membership(total: u32, remaining: u32) -> UserMembership {
        UserMembership {
            id: "mem-x".into(),
            user_id: "1".into(),
            plan_id: "plan-1".into(),
            plan_name: "Başlangıç".into(),
            branch_id: "branch-1".into(),
            branch_name: "ParsFit™ Çankaya".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            status: MembershipStatus::Active,
            remaining_sessions: remaining,
            total_sessions: total,
            price: 299,
            payment_status: PaymentStatus::Paid,
            auto_renew: false,
        }
    }

    #[test]
    fn membership_progress() {
        assert_eq!(membership(8, 6).progress_percent(), 25.0);
        assert_eq!(membership(4, 0).progress_percent(), 100.0);
        assert_eq!(membership(0, 0).progress_percent(), 0.0);
    }

    #[test]
    fn patch_only_touches_provided_fields() {
        let mut hero = HeroContent {
            id: "hero-1".into(),
            title: "Old".into(),
            subtitle: "Sub".into(),
            ..Default::default()
        };
        HeroPatch {
            title: Some("New".into()),
            ..Default::default()
        }
        .apply_to(&mut hero);
        assert_eq!(hero.title, "New");
        assert_eq!(hero.subtitle, "Sub");
        assert_eq!(hero.id, "hero-1");
    }

    #[test]
    fn branch_json_uses_camel_case_and_defaults() {
        let raw = r#"{
            "name": "ParsFit™ Etimesgut",
            "address": "Ankara",
            "phone": "0312 000 00 00",
            "email": "etimesgut@parsfit.com",
            "manager": "Ali Veli",
            "capacity": 10,
            "workingHours": {"weekdays": "09:00 - 21:00", "saturday": "09:00 - 18:00", "sunday": "Kapalı"},
            "openingDate": "2024-06-01"
        }"#;
        let branch: Branch = serde_json::from_str(raw).unwrap();
        assert!(!branch.id.is_assigned());
        assert!(branch.is_active);
        assert!(branch.services.is_empty());

        let out = serde_json::to_value(&branch).unwrap();
        assert_eq!(out["openingDate"], "2024-06-01");
        assert_eq!(out["workingHours"]["sunday"], "Kapalı");
    }

    #[test]
    fn appointment_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::NoShow).unwrap(),
            "\"no-show\""
        );
        assert_eq!(
            serde_json::to_string(&ProfileRole::BranchManager).unwrap(),
            "\"branch_manager\""
        );
    }
}
