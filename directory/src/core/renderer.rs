//! Profile renderer: a pure mapping from one employee to section views
//!
//! Nothing here knows about markup. Each function produces the values a
//! template slot needs, and [`render_profile`] assembles them in page order.

use chrono::{DateTime, NaiveDate};
use shared::{Employee, Project};
use url::Url;

use crate::types::{
    BlogPostView, ContactView, FilterOption, Listing, PortfolioView, ProfileSection, ProfileView, ProjectView,
    SidebarView, SocialLink,
};

/// Names longer than this get the compact heading style
pub const LONG_NAME_THRESHOLD: usize = 20;
pub const SITE_TITLE: &str = "Quoralinex People";

pub const TESTIMONIALS_PLACEHOLDER: &str = "No highlights yet — check back soon!";
pub const CLIENTS_PLACEHOLDER: &str = "Client logos will appear here once added.";
pub const TIMELINE_PLACEHOLDER: &str = "Details coming soon.";
pub const BLOG_PLACEHOLDER: &str = "No posts yet.";

/// Filter value that shows every project
pub const ALL_CATEGORIES: &str = "all";
/// Category for projects that do not name one
pub const DEFAULT_CATEGORY: &str = "misc";

const MAP_EMBED_BASE: &str = "https://www.google.com/maps";

/// Render every section of the profile page for `employee`
pub fn render_profile(employee: &Employee, social_platforms: &[String]) -> ProfileView {
    let sections = vec![
        ProfileSection::Sidebar(render_sidebar(employee)),
        ProfileSection::Contact(render_contact(employee)),
        ProfileSection::Socials(render_socials(employee, social_platforms)),
        ProfileSection::About(render_about(employee)),
        ProfileSection::Services(employee.services.clone()),
        ProfileSection::Testimonials(listing(&employee.testimonials, TESTIMONIALS_PLACEHOLDER)),
        ProfileSection::Clients(listing(&employee.clients, CLIENTS_PLACEHOLDER)),
        ProfileSection::Experience(listing(&employee.experience, TIMELINE_PLACEHOLDER)),
        ProfileSection::Education(listing(&employee.education, TIMELINE_PLACEHOLDER)),
        ProfileSection::Skills(employee.skills.clone()),
        ProfileSection::Portfolio(render_portfolio(employee)),
        ProfileSection::Blog(render_blog(employee)),
    ];

    ProfileView {
        slug: employee.slug.clone(),
        sections,
    }
}

pub fn render_sidebar(employee: &Employee) -> SidebarView {
    SidebarView {
        name: employee.name.clone(),
        role: employee.role.clone(),
        avatar: employee.avatar.clone(),
        avatar_alt: format!("{} avatar", employee.name),
        long_name: employee.name.chars().count() > LONG_NAME_THRESHOLD,
        about_title: format!("About {}", employee.name),
        document_title: format!("{} | {}", employee.name, SITE_TITLE),
    }
}

pub fn render_contact(employee: &Employee) -> ContactView {
    ContactView {
        email: employee.email.clone(),
        email_href: format!("mailto:{}", employee.email),
        phone: employee.phone.clone(),
        phone_href: phone_href(&employee.phone),
        birthday: format_long_date(&employee.birthday),
        birthday_datetime: employee.birthday.clone(),
        location: employee.location.clone(),
        map_src: map_src(&employee.location),
    }
}

/// One link per template slot, plus any extra platforms the employee lists.
///
/// Slots without a URL are hidden and point at `#`.
pub fn render_socials(employee: &Employee, social_platforms: &[String]) -> Vec<SocialLink> {
    let extra = employee
        .socials
        .keys()
        .filter(|platform| !social_platforms.contains(platform));

    social_platforms
        .iter()
        .chain(extra)
        .map(|platform| {
            let href = employee
                .socials
                .get(platform)
                .map(|href| href.trim())
                .filter(|href| !href.is_empty());

            SocialLink {
                platform: platform.clone(),
                href: href.unwrap_or("#").to_string(),
                visible: href.is_some(),
            }
        })
        .collect()
}

/// About paragraphs: intro then detail, skipping blanks
pub fn render_about(employee: &Employee) -> Vec<String> {
    [&employee.about.intro, &employee.about.detail]
        .into_iter()
        .flatten()
        .filter(|copy| !copy.trim().is_empty())
        .cloned()
        .collect()
}

/// Category filters (`all` first, then first-seen order) and the project grid
pub fn render_portfolio(employee: &Employee) -> PortfolioView {
    let projects: Vec<ProjectView> = employee
        .portfolio
        .iter()
        .map(|project| ProjectView {
            project: project.clone(),
            category: project_category(project),
        })
        .collect();

    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for project in &projects {
        if !categories.contains(&project.category) {
            categories.push(project.category.clone());
        }
    }

    let filters = categories
        .into_iter()
        .enumerate()
        .map(|(index, value)| FilterOption {
            label: title_case(&value),
            value,
            selected: index == 0,
        })
        .collect();

    PortfolioView { filters, projects }
}

/// Projects visible under the selected filter
pub fn filter_projects<'a>(view: &'a PortfolioView, category: &str) -> Vec<&'a ProjectView> {
    let selected = category.trim().to_lowercase();
    view.projects
        .iter()
        .filter(|project| selected == ALL_CATEGORIES || project.category == selected)
        .collect()
}

pub fn render_blog(employee: &Employee) -> Listing<BlogPostView> {
    if employee.blog.is_empty() {
        return Listing::Placeholder(BLOG_PLACEHOLDER.to_string());
    }

    Listing::Items(
        employee
            .blog
            .iter()
            .map(|post| BlogPostView {
                post: post.clone(),
                date_display: format_short_date(&post.date),
            })
            .collect(),
    )
}

/// `tel:` link with everything but digits and `+` removed
pub fn phone_href(phone: &str) -> String {
    let dialable: String = phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    format!("tel:{dialable}")
}

/// Embedded map URL for a free-form location
pub fn map_src(location: &str) -> String {
    Url::parse_with_params(MAP_EMBED_BASE, &[("q", location), ("output", "embed")])
        .map(|url| url.to_string())
        .unwrap_or_default()
}

/// "March 4, 1990"; unparsable input is returned as-is
pub fn format_long_date(raw: &str) -> String {
    parse_date(raw)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// "Mar 4, 2024"; unparsable input is returned as-is
pub fn format_short_date(raw: &str) -> String {
    parse_date(raw)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Upper-case the first letter of every word
pub fn title_case(value: &str) -> String {
    let mut previous_is_word = false;
    value
        .chars()
        .map(|c| {
            let is_word = c.is_alphanumeric() || c == '_';
            let out = if is_word && !previous_is_word {
                c.to_uppercase().collect::<String>()
            } else {
                c.to_string()
            };
            previous_is_word = is_word;
            out
        })
        .collect()
}

fn project_category(project: &Project) -> String {
    project
        .category
        .as_deref()
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
        .to_lowercase()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
}

fn listing<T: Clone>(items: &[T], placeholder: &str) -> Listing<T> {
    if items.is_empty() {
        Listing::Placeholder(placeholder.to_string())
    } else {
        Listing::Items(items.to_vec())
    }
}
