use std::str::FromStr;

/// Logical pages reachable from the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Messages,
    Profile,
    Settings,
    Promotions,
    Photos,
    Analytics,
    Reviews,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::Messages,
            Page::Profile,
            Page::Settings,
            Page::Promotions,
            Page::Photos,
            Page::Analytics,
            Page::Reviews,
        ]
    }

    /// Key used in navigation entries and the routing table.
    pub fn key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Messages => "messages",
            Page::Profile => "profile",
            Page::Settings => "settings",
            Page::Promotions => "promotions",
            Page::Photos => "photos",
            Page::Analytics => "analytics",
            Page::Reviews => "reviews",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Messages => "Messages",
            Page::Profile => "Profile",
            Page::Settings => "Settings",
            Page::Promotions => "Promotions",
            Page::Photos => "Photos",
            Page::Analytics => "Analytics",
            Page::Reviews => "Reviews",
        }
    }

    /// Static file this page would be served from.
    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Messages => "messages.html",
            Page::Profile => "profile.html",
            Page::Settings => "settings.html",
            Page::Promotions => "promotions.html",
            Page::Photos => "photos.html",
            Page::Analytics => "analytics.html",
            Page::Reviews => "reviews.html",
        }
    }

    /// Page served from the last segment of a location path.
    /// An empty segment means the index page.
    pub fn from_path(path: &str) -> Option<Page> {
        let file = match path.rsplit('/').next() {
            Some("") | None => "index.html",
            Some(file) => file,
        };
        Page::all().iter().copied().find(|p| p.file_name() == file)
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::all()
            .iter()
            .copied()
            .find(|p| p.key() == s)
            .ok_or_else(|| format!("unknown page key: {s}"))
    }
}

/// Resolve a navigation key to its target file, or the raw key if unmapped.
pub fn resolve_target(key: &str) -> String {
    key.parse::<Page>()
        .map(|p| p.file_name().to_string())
        .unwrap_or_else(|_| key.to_string())
}

/// Upper-cased target name without the `.html` suffix, e.g. "MESSAGES".
pub fn target_display(target: &str) -> String {
    target.replacen(".html", "", 1).to_uppercase()
}
