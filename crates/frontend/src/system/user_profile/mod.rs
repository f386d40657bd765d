pub mod api;
pub mod ui;

use contracts::system::auth::SessionUser;
use contracts::system::user_profile::UserProfile;

pub const TAB_KEY: &str = "sys_user_profile";

/// The part of a profile kept with the session.
pub fn session_user(profile: &UserProfile) -> SessionUser {
    SessionUser {
        id: profile.id.clone(),
        name: profile.name.clone(),
        email: profile.email.clone(),
        role: profile.role,
        avatar: profile.avatar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_staff::aggregate::StaffRole;

    #[test]
    fn session_user_mirrors_the_profile() {
        let profile = UserProfile {
            id: "s-2".into(),
            name: "Lee Manager".into(),
            email: "lee@shop.test".into(),
            phone: Some("555-0101".into()),
            role: StaffRole::Manager,
            avatar: Some("lee.png".into()),
        };
        let user = session_user(&profile);
        assert_eq!(user.id, "s-2");
        assert_eq!(user.role, StaffRole::Manager);
        assert_eq!(user.avatar.as_deref(), Some("lee.png"));
        assert!(!user.is_admin());
    }
}
