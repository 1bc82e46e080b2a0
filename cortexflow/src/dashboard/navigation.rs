//! Navigation sidebar view model.
//!
//! The navigation list is a display constant: the active marker is fixed on
//! the Dashboard item, not derived from application state. Route handling
//! would be a router integration's responsibility and is out of scope.

/// One navigation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Statically marked active (display constant, see module docs).
    pub active: bool,
    /// Rendered with the destructive accent (the logout item).
    pub destructive: bool,
}

impl NavItem {
    const fn new(label: &'static str) -> Self {
        Self {
            label,
            active: false,
            destructive: false,
        }
    }

    const fn active(label: &'static str) -> Self {
        Self {
            label,
            active: true,
            destructive: false,
        }
    }

    const fn destructive(label: &'static str) -> Self {
        Self {
            label,
            active: false,
            destructive: true,
        }
    }
}

/// The fixed navigation list, in display order.
pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem::active("Dashboard"),
    NavItem::new("Nodes"),
    NavItem::new("Pipeline"),
    NavItem::new("Config"),
    NavItem::new("Roles"),
    NavItem::new("Settings"),
    NavItem::new("Tutorials"),
    NavItem::destructive("Logout"),
];

/// The static advice callout shown below the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceCallout {
    pub title: &'static str,
    pub body: &'static str,
}

impl Default for AdviceCallout {
    fn default() -> Self {
        Self {
            title: "CortexFlow Advices",
            body: "Create your first pipeline by clicking in the \"Pipelines\" section.",
        }
    }
}

/// The sidebar: product title, section caption, nav items, advice callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarModel {
    pub title: &'static str,
    pub section_caption: &'static str,
    pub items: &'static [NavItem],
    pub advice: AdviceCallout,
}

impl Default for SidebarModel {
    fn default() -> Self {
        Self {
            title: "CortexFlow",
            section_caption: "User Panel",
            items: &NAV_ITEMS,
            advice: AdviceCallout::default(),
        }
    }
}
