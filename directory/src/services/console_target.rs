//! Plain-text render target for the kiosk terminal

use std::io::Write;

use shared::{component_warn, ComponentId};

use crate::traits::RenderTarget;
use crate::types::{DirectoryListView, Listing, ProfileSection, Status, StatusChannel, StatusTone};

/// Writes every render call as text lines to `W`
pub struct ConsoleRenderTarget<W: Write + Send> {
    out: W,
    profile_visible: bool,
}

impl<W: Write + Send> ConsoleRenderTarget<W> {
    pub fn new(out: W) -> Self {
        Self { out, profile_visible: false }
    }

    pub fn profile_visible(&self) -> bool {
        self.profile_visible
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: impl AsRef<str>) {
        if let Err(e) = writeln!(self.out, "{}", line.as_ref()) {
            component_warn!(ComponentId::current(), "Console write failed: {}", e);
        }
    }

    fn emit_listing<T>(&mut self, heading: &str, listing: &Listing<T>, line: impl Fn(&T) -> String) {
        self.emit(format!("[{heading}]"));
        match listing {
            Listing::Items(items) => {
                for item in items {
                    self.emit(format!("  - {}", line(item)));
                }
            }
            Listing::Placeholder(message) => self.emit(format!("  {message}")),
        }
    }
}

impl<W: Write + Send> RenderTarget for ConsoleRenderTarget<W> {
    fn render_section(&mut self, section: &ProfileSection) {
        match section {
            ProfileSection::Sidebar(view) => {
                self.emit(format!("=== {} ===", view.document_title));
                self.emit(format!("{} · {}", view.name, view.role));
            }
            ProfileSection::Contact(view) => {
                self.emit(format!("  Email:    {}", view.email));
                self.emit(format!("  Phone:    {}", view.phone));
                self.emit(format!("  Birthday: {}", view.birthday));
                self.emit(format!("  Location: {}", view.location));
            }
            ProfileSection::Socials(links) => {
                let visible: Vec<String> = links
                    .iter()
                    .filter(|link| link.visible)
                    .map(|link| format!("{} <{}>", link.platform, link.href))
                    .collect();
                if !visible.is_empty() {
                    self.emit(format!("  Social:   {}", visible.join(", ")));
                }
            }
            ProfileSection::About(paragraphs) => {
                self.emit("[About]");
                for paragraph in paragraphs {
                    self.emit(format!("  {paragraph}"));
                }
            }
            ProfileSection::Services(services) => {
                self.emit("[Services]");
                for service in services {
                    self.emit(format!("  - {}: {}", service.title, service.description));
                }
            }
            ProfileSection::Testimonials(listing) => {
                self.emit_listing("Testimonials", listing, |t| format!("\"{}\" - {}", t.quote, t.name));
            }
            ProfileSection::Clients(listing) => {
                self.emit_listing("Clients", listing, |c| c.name.clone());
            }
            ProfileSection::Experience(listing) => {
                self.emit_listing("Experience", listing, |e| timeline_line(&e.title, &e.place, &e.period));
            }
            ProfileSection::Education(listing) => {
                self.emit_listing("Education", listing, |e| timeline_line(&e.title, &e.place, &e.period));
            }
            ProfileSection::Skills(skills) => {
                self.emit("[Skills]");
                for skill in skills {
                    self.emit(format!("  - {} {}%", skill.name, skill.level));
                }
            }
            ProfileSection::Portfolio(view) => {
                let labels: Vec<&str> = view.filters.iter().map(|f| f.label.as_str()).collect();
                self.emit(format!("[Portfolio] {}", labels.join(" | ")));
                for project in &view.projects {
                    self.emit(format!("  - {} ({})", project.project.title, project.category));
                }
            }
            ProfileSection::Blog(listing) => {
                self.emit_listing("Blog", listing, |p| format!("{} {}", p.date_display, p.post.title));
            }
        }
    }

    fn render_directory(&mut self, view: &DirectoryListView) {
        self.emit("[Directory]");
        for entry in &view.entries {
            let marker = if entry.active { '*' } else { ' ' };
            self.emit(format!(" {marker} {:<20} {}", entry.slug, entry.name));
        }
    }

    fn set_status(&mut self, channel: StatusChannel, status: Option<&Status>) {
        let Some(status) = status else { return };
        let channel = match channel {
            StatusChannel::Directory => "directory",
            StatusChannel::Profile => "profile",
        };
        match status.tone {
            StatusTone::Info => self.emit(format!("({channel}) {}", status.message)),
            StatusTone::Error => self.emit(format!("({channel}) error: {}", status.message)),
        }
    }

    fn set_profile_visible(&mut self, visible: bool) {
        self.profile_visible = visible;
    }

    fn set_not_found(&mut self, message: Option<&str>) {
        if let Some(message) = message {
            self.emit(format!("!! {message}"));
        }
    }
}

fn timeline_line(title: &str, place: &str, period: &str) -> String {
    match (place.is_empty(), period.is_empty()) {
        (true, true) => title.to_string(),
        (false, true) => format!("{title}, {place}"),
        (true, false) => format!("{title} ({period})"),
        (false, false) => format!("{title}, {place} ({period})"),
    }
}
