// src/navigation.rs

/// Top-level areas of the dashboard, addressed by the first path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Zones,
    Customers,
    WebLeads,
}

impl Section {
    pub const ALL: &'static [Section] = &[
        Section::Dashboard,
        Section::Zones,
        Section::Customers,
        Section::WebLeads,
    ];

    /// Unknown or empty identifiers land on the dashboard.
    pub fn from_fragment(raw: &str) -> Section {
        let raw = raw.trim_start_matches(['#', '/']);
        let head = raw.split(['/', '?']).next().unwrap_or_default();
        Section::ALL
            .iter()
            .copied()
            .find(|s| s.slug() == head)
            .unwrap_or(Section::Dashboard)
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Zones => "zones",
            Section::Customers => "customers",
            Section::WebLeads => "web-leads",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Zones => "Zones",
            Section::Customers => "Customers",
            Section::WebLeads => "Web Leads",
        }
    }

    pub fn href(&self) -> String {
        format!("/{}", self.slug())
    }
}
