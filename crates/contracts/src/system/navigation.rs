//! Declarative sidebar table and the role filter applied to it.
//!
//! The same table drives the page guard ([`can_access`]), so a page hidden
//! from the sidebar is also refused when its address is typed directly.
//! This is a presentation gate only; nothing on the server relies on it.

use serde::{Deserialize, Serialize};

use super::auth::UserRole;

const ALL: &[UserRole] = &[UserRole::Admin, UserRole::User];
const ADMIN: &[UserRole] = &[UserRole::Admin];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub roles: &'static [UserRole],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub roles: &'static [UserRole],
    pub items: &'static [NavItem],
}

pub const MENU_SECTIONS: &[NavSection] = &[
    NavSection {
        title: "Overview",
        roles: ALL,
        items: &[
            NavItem { label: "Dashboard", href: "/dashboard", icon: "home", roles: ALL },
            NavItem { label: "Alerts", href: "/alerts", icon: "bell", roles: ALL },
        ],
    },
    NavSection {
        title: "Animal Management",
        roles: ALL,
        items: &[
            NavItem { label: "Animals", href: "/animals", icon: "paw", roles: ALL },
            NavItem { label: "Health Tracking", href: "/health", icon: "heart-pulse", roles: ALL },
            NavItem { label: "Conservation", href: "/conservation", icon: "bird", roles: ALL },
            NavItem { label: "Tracking Map", href: "/tracking", icon: "map", roles: ALL },
        ],
    },
    NavSection {
        title: "Visitor Experience",
        roles: ALL,
        items: &[
            NavItem { label: "Ticketing", href: "/tickets", icon: "ticket", roles: ALL },
            NavItem { label: "Education", href: "/education", icon: "book-open", roles: ALL },
            NavItem { label: "Sustainability", href: "/sustainability", icon: "globe", roles: ADMIN },
        ],
    },
    NavSection {
        title: "Operations",
        roles: ALL,
        items: &[
            NavItem { label: "Staff", href: "/staff", icon: "users", roles: ADMIN },
            NavItem { label: "Tasks", href: "/tasks", icon: "user-cog", roles: ALL },
            NavItem { label: "Security", href: "/security", icon: "shield-alert", roles: ADMIN },
            NavItem { label: "Schedule", href: "/schedule", icon: "calendar", roles: ALL },
        ],
    },
    NavSection {
        title: "Analytics",
        roles: ADMIN,
        items: &[NavItem { label: "Reports", href: "/reports", icon: "line-chart", roles: ADMIN }],
    },
    NavSection {
        title: "Settings",
        roles: ALL,
        items: &[NavItem { label: "Settings", href: "/settings", icon: "settings", roles: ALL }],
    },
];

/// Sidebar entry after filtering, owned so it can travel over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleItem {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleSection {
    pub title: String,
    pub items: Vec<VisibleItem>,
}

/// Without a session the menu is filtered as for a regular user.
pub fn effective_role(role: Option<UserRole>) -> UserRole {
    role.unwrap_or(UserRole::User)
}

/// Sections and items the role may see; sections left without items are
/// dropped rather than shown as empty headings.
pub fn filter_sections(sections: &[NavSection], role: Option<UserRole>) -> Vec<VisibleSection> {
    let role = effective_role(role);
    sections
        .iter()
        .filter(|section| section.roles.contains(&role))
        .filter_map(|section| {
            let items: Vec<VisibleItem> = section
                .items
                .iter()
                .filter(|item| item.roles.contains(&role))
                .map(|item| VisibleItem {
                    label: item.label.to_string(),
                    href: item.href.to_string(),
                    icon: item.icon.to_string(),
                })
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(VisibleSection {
                    title: section.title.to_string(),
                    items,
                })
            }
        })
        .collect()
}

/// [`filter_sections`] over the application menu.
pub fn visible_sections(role: Option<UserRole>) -> Vec<VisibleSection> {
    filter_sections(MENU_SECTIONS, role)
}

/// Whether a page may be shown to the role. Addresses that are not in the
/// menu (profile, login, ...) are open to everyone.
pub fn can_access_in(sections: &[NavSection], path: &str, role: Option<UserRole>) -> bool {
    let role = effective_role(role);
    let mut listed = false;
    for section in sections {
        for item in section.items.iter().filter(|item| item.href == path) {
            listed = true;
            if section.roles.contains(&role) && item.roles.contains(&role) {
                return true;
            }
        }
    }
    !listed
}

pub fn can_access(path: &str, role: Option<UserRole>) -> bool {
    can_access_in(MENU_SECTIONS, path, role)
}

/// Menu label for an address, used for page titles.
pub fn label_for(path: &str) -> Option<&'static str> {
    MENU_SECTIONS
        .iter()
        .flat_map(|section| section.items.iter())
        .find(|item| item.href == path)
        .map(|item| item.label)
}

/// `(section title, item label)` for an address in the menu.
pub fn breadcrumb(path: &str) -> Option<(&'static str, &'static str)> {
    MENU_SECTIONS.iter().find_map(|section| {
        section
            .items
            .iter()
            .find(|item| item.href == path)
            .map(|item| (section.title, item.label))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(sections: &[VisibleSection]) -> Vec<&str> {
        sections.iter().map(|s| s.title.as_str()).collect()
    }

    fn hrefs(sections: &[VisibleSection]) -> Vec<&str> {
        sections
            .iter()
            .flat_map(|s| s.items.iter().map(|i| i.href.as_str()))
            .collect()
    }

    #[test]
    fn test_admin_sees_everything() {
        let sections = visible_sections(Some(UserRole::Admin));
        assert_eq!(sections.len(), MENU_SECTIONS.len());
        let total: usize = MENU_SECTIONS.iter().map(|s| s.items.len()).sum();
        assert_eq!(hrefs(&sections).len(), total);
    }

    #[test]
    fn test_user_loses_admin_section_and_items() {
        let sections = visible_sections(Some(UserRole::User));
        assert!(!titles(&sections).contains(&"Analytics"));
        let hrefs = hrefs(&sections);
        assert!(!hrefs.contains(&"/reports"));
        assert!(!hrefs.contains(&"/staff"));
        assert!(!hrefs.contains(&"/security"));
        assert!(!hrefs.contains(&"/sustainability"));
        assert!(hrefs.contains(&"/animals"));
        assert!(hrefs.contains(&"/tasks"));
    }

    #[test]
    fn test_anonymous_filters_as_user() {
        assert_eq!(visible_sections(None), visible_sections(Some(UserRole::User)));
    }

    #[test]
    fn test_section_without_visible_items_is_suppressed() {
        const TREE: &[NavSection] = &[
            NavSection {
                title: "Open heading",
                roles: ALL,
                items: &[NavItem { label: "Secret", href: "/secret", icon: "lock", roles: ADMIN }],
            },
            NavSection {
                title: "Public",
                roles: ALL,
                items: &[NavItem { label: "Home", href: "/", icon: "home", roles: ALL }],
            },
        ];
        assert_eq!(titles(&filter_sections(TREE, Some(UserRole::User))), vec!["Public"]);
        assert_eq!(
            titles(&filter_sections(TREE, Some(UserRole::Admin))),
            vec!["Open heading", "Public"]
        );
    }

    #[test]
    fn test_guard_matches_sidebar() {
        for role in [UserRole::Admin, UserRole::User] {
            let visible = visible_sections(Some(role));
            let visible = hrefs(&visible);
            for section in MENU_SECTIONS {
                for item in section.items {
                    assert_eq!(
                        can_access(item.href, Some(role)),
                        visible.contains(&item.href),
                        "{} for {:?}",
                        item.href,
                        role
                    );
                }
            }
        }
    }

    #[test]
    fn test_unlisted_paths_are_open() {
        assert!(can_access("/profile", Some(UserRole::User)));
        assert!(can_access("/login", None));
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for("/health"), Some("Health Tracking"));
        assert_eq!(label_for("/nowhere"), None);
    }

    #[test]
    fn test_breadcrumb() {
        assert_eq!(breadcrumb("/tickets"), Some(("Visitor Experience", "Ticketing")));
        assert_eq!(breadcrumb("/login"), None);
    }
}
