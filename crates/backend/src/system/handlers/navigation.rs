use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use contracts::system::auth::UserRole;
use contracts::system::navigation::{visible_sections, VisibleSection};

#[derive(Debug, Default, Deserialize)]
pub struct NavigationParams {
    pub role: Option<String>,
}

/// GET /api/system/navigation?role=admin
///
/// An absent or unknown role gets the regular user's menu.
pub async fn sections(Query(params): Query<NavigationParams>) -> Json<Vec<VisibleSection>> {
    let role = params.role.as_deref().and_then(UserRole::parse);
    Json(visible_sections(role))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(sections: &[VisibleSection]) -> Vec<&str> {
        sections.iter().map(|s| s.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_admin_sees_analytics() {
        let Json(menu) = sections(Query(NavigationParams {
            role: Some("admin".into()),
        }))
        .await;
        assert!(titles(&menu).contains(&"Analytics"));
    }

    #[tokio::test]
    async fn test_unknown_role_is_regular_user() {
        let Json(menu) = sections(Query(NavigationParams {
            role: Some("superuser".into()),
        }))
        .await;
        assert!(!titles(&menu).contains(&"Analytics"));
        let Json(anonymous) = sections(Query(NavigationParams::default())).await;
        assert_eq!(menu, anonymous);
    }
}
