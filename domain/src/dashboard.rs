//! Read models for the member and admin dashboards.

use serde::Serialize;

use crate::auth::SessionUser;
use crate::model::{
    AccountStatus, Appointment, AppointmentStatus, Branch, PostStatus, UserProfile,
};
use crate::store::SiteStore;
use crate::CoreError;

/// Shown when a member's preferred branch no longer exists or is inactive.
pub const UNKNOWN_BRANCH: &str = "Bilinmeyen Şube";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDashboard {
    pub user: SessionUser,
    /// Profile whose email matches the session, if any.
    pub profile: Option<UserProfile>,
    pub appointments: Vec<Appointment>,
    pub upcoming_count: usize,
    pub completed_count: usize,
    /// Used share of the membership package, 0 to 100.
    pub membership_progress: f64,
    pub preferred_branch_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub branches: usize,
    pub services: usize,
    pub pricing_plans: usize,
    pub testimonials: usize,
    pub blog_posts: usize,
    pub users: usize,
    pub appointments: usize,
    pub active_members: usize,
    pub scheduled_appointments: usize,
    pub published_posts: usize,
}

fn branch_name(branches: &[Branch], id: Option<&str>) -> String {
    id.and_then(|id| branches.iter().find(|b| b.id.as_str() == id))
        .map(|b| b.name.clone())
        .unwrap_or_else(|| UNKNOWN_BRANCH.to_string())
}

pub fn member_dashboard(store: &SiteStore, user: &SessionUser) -> Result<MemberDashboard, CoreError> {
    let profile = store
        .users
        .list()?
        .into_iter()
        .find(|u| u.email == user.email);

    let mut appointments = store.appointments.list()?;
    appointments.retain(|a| a.user_id == user.id);

    let count = |status: AppointmentStatus| appointments.iter().filter(|a| a.status == status).count();
    let upcoming_count = count(AppointmentStatus::Scheduled);
    let completed_count = count(AppointmentStatus::Completed);

    let membership_progress = profile
        .as_ref()
        .and_then(|p| p.membership.as_ref())
        .map_or(0.0, |m| m.progress_percent());

    // members only see active branches
    let mut branches = store.branches.list()?;
    branches.retain(|b| b.is_active);
    let preferred_branch_name = branch_name(
        &branches,
        profile.as_ref().and_then(|p| p.preferred_branch.as_deref()),
    );

    Ok(MemberDashboard {
        user: user.clone(),
        profile,
        appointments,
        upcoming_count,
        completed_count,
        membership_progress,
        preferred_branch_name,
    })
}

pub fn admin_overview(store: &SiteStore) -> Result<AdminOverview, CoreError> {
    let users = store.users.list()?;
    let appointments = store.appointments.list()?;
    let posts = store.blog_posts.list()?;

    Ok(AdminOverview {
        branches: store.branches.len()?,
        services: store.services.len()?,
        pricing_plans: store.pricing_plans.len()?,
        testimonials: store.testimonials.len()?,
        blog_posts: posts.len(),
        users: users.len(),
        appointments: appointments.len(),
        active_members: users
            .iter()
            .filter(|u| u.status == AccountStatus::Active)
            .count(),
        scheduled_appointments: appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled)
            .count(),
        published_posts: posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
            .count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::login;
    use crate::model::UserProfilePatch;
    use crate::patch::Patch;
    use crate::{RecordId, Role};

    fn member(id: &str, email: &str) -> SessionUser {
        SessionUser {
            id: id.into(),
            name: "Üye".into(),
            email: email.into(),
            role: Role::User,
            phone: None,
            avatar: None,
        }
    }

    #[test]
    fn member_with_profile_and_membership() {
        let store = SiteStore::seeded();
        let dash = member_dashboard(&store, &member("1", "ayse@email.com")).unwrap();
        assert_eq!(dash.profile.as_ref().unwrap().name, "Ayşe Demir");
        assert_eq!(dash.appointments.len(), 1);
        assert_eq!(dash.upcoming_count, 1);
        assert_eq!(dash.completed_count, 0);
        assert_eq!(dash.membership_progress, 25.0);
        assert_eq!(dash.preferred_branch_name, "ParsFit™ Çankaya");
    }

    #[test]
    fn demo_account_without_profile() {
        let store = SiteStore::seeded();
        let demo = login("demo@parsfit.com", "demo123").unwrap();
        let dash = member_dashboard(&store, &demo).unwrap();
        assert!(dash.profile.is_none());
        // appointments match on user id alone
        assert_eq!(dash.completed_count, 1);
        assert_eq!(dash.membership_progress, 0.0);
        assert_eq!(dash.preferred_branch_name, UNKNOWN_BRANCH);
    }

    #[test]
    fn deleted_branch_falls_back() {
        let store = SiteStore::seeded();
        let mut ayse = store.users.get(&RecordId::new("1").unwrap()).unwrap().unwrap();
        UserProfilePatch {
            preferred_branch: Some(Some("branch-9".into())),
            ..Default::default()
        }
        .apply_to(&mut ayse);
        store.users.replace(ayse).unwrap();

        let dash = member_dashboard(&store, &member("1", "ayse@email.com")).unwrap();
        assert_eq!(dash.preferred_branch_name, UNKNOWN_BRANCH);
    }

    #[test]
    fn inactive_branch_falls_back() {
        let store = SiteStore::seeded();
        let mut cankaya = store
            .branches
            .get(&RecordId::new("branch-1").unwrap())
            .unwrap()
            .unwrap();
        cankaya.is_active = false;
        store.branches.replace(cankaya).unwrap();

        let dash = member_dashboard(&store, &member("1", "ayse@email.com")).unwrap();
        assert_eq!(dash.preferred_branch_name, UNKNOWN_BRANCH);
    }

    #[test]
    fn overview_counts() {
        let overview = admin_overview(&SiteStore::seeded()).unwrap();
        assert_eq!(overview.branches, 3);
        assert_eq!(overview.services, 4);
        assert_eq!(overview.users, 2);
        assert_eq!(overview.active_members, 2);
        assert_eq!(overview.scheduled_appointments, 1);
        assert_eq!(overview.published_posts, 3);

        assert_eq!(admin_overview(&SiteStore::empty()).unwrap(), AdminOverview::default());
    }
}
