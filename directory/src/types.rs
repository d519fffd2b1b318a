//! Directory-specific data types: status signals, session events and the
//! declarative views handed to a render target.

use serde::{Deserialize, Serialize};
use shared::{BlogPost, Client, Project, Service, Skill, Testimonial, TimelineEntry};

/// Which status indicator a message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusChannel {
    /// Above the staff directory list
    Directory,
    /// Above the profile area
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    Info,
    Error,
}

/// A visible status message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub message: String,
    pub tone: StatusTone,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), tone: StatusTone::Info }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), tone: StatusTone::Error }
    }

    pub fn is_error(&self) -> bool {
        self.tone == StatusTone::Error
    }
}

/// Events processed one at a time by the session loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Rotation timer fired; stale generations are ignored
    Tick { generation: u64 },
    /// User picked an entry from the directory list
    Select { slug: String },
    /// User asked for the next employee
    Advance,
    Shutdown,
}

/// Loader state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoaderState {
    Idle,
    Loading { attempt: u32 },
    Retrying { attempt: u32 },
    Ready,
    Failed,
}

impl LoaderState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoaderState::Ready | LoaderState::Failed)
    }
}

/// Outcome of an activation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Activated { index: usize, slug: String },
    NotFound { slug: String },
    /// Directory is empty
    Ignored,
}

impl Activation {
    pub fn index(&self) -> Option<usize> {
        match self {
            Activation::Activated { index, .. } => Some(*index),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub avatar_alt: String,
    /// Name is long enough to need the compact heading style
    pub long_name: bool,
    pub about_title: String,
    pub document_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub email: String,
    pub email_href: String,
    pub phone: String,
    pub phone_href: String,
    pub birthday: String,
    /// Machine-readable value for the `datetime` attribute
    pub birthday_datetime: String,
    pub location: String,
    pub map_src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: String,
    pub href: String,
    pub visible: bool,
}

/// List content, or the message shown in its place when there is nothing to list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Listing<T> {
    Items(Vec<T>),
    Placeholder(String),
}

impl<T> Listing<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Listing::Items(items) => items,
            Listing::Placeholder(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Listing::Items(_) => None,
            Listing::Placeholder(message) => Some(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    /// Lower-cased category value, `all` for the catch-all
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectView {
    pub project: Project,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioView {
    pub filters: Vec<FilterOption>,
    pub projects: Vec<ProjectView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPostView {
    pub post: BlogPost,
    pub date_display: String,
}

/// One section render call, addressed to a named slot of the template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProfileSection {
    Sidebar(SidebarView),
    Contact(ContactView),
    Socials(Vec<SocialLink>),
    About(Vec<String>),
    Services(Vec<Service>),
    Testimonials(Listing<Testimonial>),
    Clients(Listing<Client>),
    Experience(Listing<TimelineEntry>),
    Education(Listing<TimelineEntry>),
    Skills(Vec<Skill>),
    Portfolio(PortfolioView),
    Blog(Listing<BlogPostView>),
}

impl ProfileSection {
    /// Name of the template slot this section is rendered into
    pub fn slot(&self) -> &'static str {
        match self {
            ProfileSection::Sidebar(_) => "sidebar",
            ProfileSection::Contact(_) => "contact",
            ProfileSection::Socials(_) => "social-links",
            ProfileSection::About(_) => "about-text",
            ProfileSection::Services(_) => "service-list",
            ProfileSection::Testimonials(_) => "testimonials-list",
            ProfileSection::Clients(_) => "clients-list",
            ProfileSection::Experience(_) => "experience-list",
            ProfileSection::Education(_) => "education-list",
            ProfileSection::Skills(_) => "skills-list",
            ProfileSection::Portfolio(_) => "project-list",
            ProfileSection::Blog(_) => "blog-list",
        }
    }
}

/// Full render of one employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub slug: String,
    pub sections: Vec<ProfileSection>,
}

impl ProfileView {
    pub fn sidebar(&self) -> Option<&SidebarView> {
        self.sections.iter().find_map(|section| match section {
            ProfileSection::Sidebar(view) => Some(view),
            _ => None,
        })
    }

    pub fn portfolio(&self) -> Option<&PortfolioView> {
        self.sections.iter().find_map(|section| match section {
            ProfileSection::Portfolio(view) => Some(view),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntryView {
    pub slug: String,
    pub name: String,
    pub role: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryListView {
    pub entries: Vec<DirectoryEntryView>,
}

impl DirectoryListView {
    pub fn active(&self) -> Option<&DirectoryEntryView> {
        self.entries.iter().find(|entry| entry.active)
    }
}
