//! Built-in console navigation.

use super::{Badge, Icon, NavEntry, SidebarConfig, SidebarItem};

fn paths(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| (*p).to_string()).collect()
}

pub(super) fn entries() -> Vec<NavEntry> {
    vec![
        NavEntry {
            id: "home".to_string(),
            path: "/".to_string(),
            label: "Home".to_string(),
            icon: Icon::Home,
            require_auth: false,
            roles: None,
            show_in_nav: true,
            show_in_sidebar: false,
            sidebar: None,
        },
        NavEntry {
            id: "dashboard".to_string(),
            path: "/dashboard".to_string(),
            label: "Dashboard".to_string(),
            icon: Icon::BarChart3,
            require_auth: true,
            roles: None,
            show_in_nav: true,
            show_in_sidebar: false,
            sidebar: None,
        },
        NavEntry {
            id: "system-management".to_string(),
            path: "/settings/account-management".to_string(),
            label: "System Management".to_string(),
            icon: Icon::Settings,
            require_auth: true,
            roles: Some(vec!["admin".to_string()]),
            // reachable from the sidebar only
            show_in_nav: false,
            show_in_sidebar: true,
            sidebar: Some(SidebarConfig {
                title: "System Management".to_string(),
                title_icon: Icon::Settings,
                items: vec![
                    SidebarItem::new("/settings/account-management", "Accounts", Icon::Users),
                    SidebarItem::new("/settings/role-management", "Roles", Icon::Settings),
                    SidebarItem::new(
                        "/settings/permission-management",
                        "Permissions",
                        Icon::Shield,
                    ),
                ],
                show_on_paths: paths(&[
                    "/settings/account-management",
                    "/settings/role-management",
                    "/settings/permission-management",
                ]),
            }),
        },
        NavEntry {
            id: "business-intelligence".to_string(),
            path: "/dashboard/analytics".to_string(),
            label: "Business Intelligence".to_string(),
            icon: Icon::BarChart3,
            require_auth: true,
            roles: None,
            show_in_nav: false,
            show_in_sidebar: true,
            sidebar: Some(SidebarConfig {
                title: "Business Intelligence".to_string(),
                title_icon: Icon::BarChart3,
                items: vec![
                    SidebarItem::new("/dashboard/analytics", "Analytics", Icon::BarChart3),
                    SidebarItem::new("/dashboard/reports", "Reports", Icon::FileText)
                        .with_badge(Badge::Text("New".to_string())),
                    SidebarItem::new("/dashboard/trends", "Trends", Icon::TrendingUp),
                ],
                show_on_paths: paths(&[
                    "/dashboard/analytics",
                    "/dashboard/reports",
                    "/dashboard/trends",
                ]),
            }),
        },
        NavEntry {
            id: "inventory".to_string(),
            path: "/dashboard/inventory".to_string(),
            label: "Inventory".to_string(),
            icon: Icon::Package,
            require_auth: true,
            roles: None,
            show_in_nav: false,
            show_in_sidebar: true,
            sidebar: Some(SidebarConfig {
                title: "Inventory".to_string(),
                title_icon: Icon::Package,
                items: vec![
                    SidebarItem::new("/dashboard/inventory", "Stock Overview", Icon::Package),
                    SidebarItem::new("/dashboard/products", "Products", Icon::ShoppingCart),
                ],
                show_on_paths: paths(&["/dashboard/inventory", "/dashboard/products"]),
            }),
        },
    ]
}
