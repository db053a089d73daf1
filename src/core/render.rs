//! Pure mapping from view state and content to a [`Node`] tree.
//!
//! Only the header reads `mobile_menu_open` and only the skill list reads
//! `skill_progress`; every other section depends on content alone.

use crate::core::view::ViewState;
use crate::domain::content::{logo_image, ContentTables};
use crate::domain::model::{AssetRef, ContactKind, ContactLink, Logo, NavSection, Project, Skill};
use crate::domain::node::Node;

pub const MENU_TOGGLE_LABEL: &str = "Toggle menu";
pub const MENU_CLOSE_LABEL: &str = "Close menu";

/// `None` while the view is not mounted.
pub fn render(state: &ViewState, content: &ContentTables, year: i32) -> Option<Node> {
    if !state.is_mounted() {
        return None;
    }

    let mut page = Node::element("div")
        .class("portfolio")
        .child(header(state, content));
    if state.mobile_menu_open() {
        page = page.child(mobile_menu(content));
    }

    Some(
        page.child(
            Node::element("main")
                .child(hero(content))
                .child(projects(content))
                .child(skills(state, content))
                .child(logos(content))
                .child(contact(content)),
        )
        .child(footer(content, year)),
    )
}

fn external_link(href: &str) -> Node {
    Node::element("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
}

fn image(asset: &AssetRef) -> Node {
    Node::element("img")
        .attr("src", asset.src.as_str())
        .attr("alt", asset.alt.as_str())
        .attr("width", asset.width.to_string())
        .attr("height", asset.height.to_string())
}

fn sr_only(label: &str) -> Node {
    Node::with_text("span", label).class("sr-only")
}

fn brand(content: &ContentTables) -> Node {
    Node::with_text("a", content.copy.brand.as_str())
        .attr("href", "/")
        .class("brand")
}

fn nav_links(class: &str) -> impl Iterator<Item = Node> + '_ {
    NavSection::ALL.into_iter().map(move |section| {
        Node::with_text("a", section.label())
            .attr("href", section.href())
            .class(class)
            .attr("data-nav", section.anchor())
    })
}

fn header(state: &ViewState, content: &ContentTables) -> Node {
    let icon = if state.mobile_menu_open() { "x" } else { "menu" };
    Node::element("header")
        .class("site-header")
        .child(brand(content).attr("class", "brand brand-mobile"))
        .child(
            Node::element("nav")
                .class("desktop-nav")
                .child(brand(content))
                .children(nav_links("nav-link")),
        )
        .child(
            Node::element("button")
                .class("menu-toggle")
                .attr("type", "button")
                .attr("aria-expanded", state.mobile_menu_open().to_string())
                .attr("data-icon", icon)
                .child(sr_only(MENU_TOGGLE_LABEL)),
        )
}

fn mobile_menu(content: &ContentTables) -> Node {
    Node::element("div")
        .class("mobile-menu")
        .child(
            Node::element("div")
                .class("mobile-menu-header")
                .child(brand(content))
                .child(
                    Node::element("button")
                        .class("menu-close")
                        .attr("type", "button")
                        .attr("data-icon", "x")
                        .child(sr_only(MENU_CLOSE_LABEL)),
                ),
        )
        .child(
            Node::element("nav")
                .class("mobile-nav")
                .children(nav_links("mobile-nav-link")),
        )
}

fn hero(content: &ContentTables) -> Node {
    Node::element("section")
        .id(NavSection::About.anchor())
        .class("hero")
        .child(Node::with_text("h1", content.copy.headline.as_str()))
        .child(Node::with_text("p", content.copy.tagline.as_str()).class("tagline"))
}

fn project_card(project: &Project) -> Node {
    Node::element("article")
        .class("project-card")
        .attr("data-project-id", project.id.to_string())
        .child(image(&project.image))
        .child(
            Node::element("div")
                .class("project-heading")
                .child(Node::with_text("h3", project.title.as_str()).class("project-title"))
                .child(
                    external_link(&project.link())
                        .class("project-link")
                        .child(sr_only(&format!("Visit {}", project.title))),
                ),
        )
        .child(Node::with_text("p", project.description.as_str()).class("project-description"))
        .child(
            Node::element("div").class("project-tags").children(
                project
                    .tags
                    .iter()
                    .map(|tag| Node::with_text("span", tag.as_str()).class("tag")),
            ),
        )
}

fn projects(content: &ContentTables) -> Node {
    Node::element("section")
        .id(NavSection::Projects.anchor())
        .child(Node::with_text("h2", content.copy.projects_heading.as_str()))
        .child(
            Node::element("div")
                .class("project-grid")
                .children(content.projects.iter().map(project_card)),
        )
}

fn skill_row(state: &ViewState, skill: &Skill) -> Node {
    let value = state.progress(&skill.name).min(skill.level);
    Node::element("div")
        .class("skill")
        .attr("data-skill", skill.name.as_str())
        .child(Node::with_text("span", skill.name.as_str()).class("skill-name"))
        .child(Node::with_text("span", format!("{}%", value)).class("skill-value"))
        .child(
            Node::element("progress")
                .attr("max", "100")
                .attr("value", value.to_string()),
        )
}

fn skills(state: &ViewState, content: &ContentTables) -> Node {
    Node::element("section")
        .id(NavSection::Skills.anchor())
        .child(Node::with_text("h2", content.copy.skills_heading.as_str()))
        .child(
            Node::element("div")
                .class("skill-list")
                .children(content.skills.iter().map(|s| skill_row(state, s))),
        )
}

fn logo_tile(logo: &Logo) -> Node {
    external_link(&logo.url)
        .class("logo")
        .attr("data-logo-id", logo.id.to_string())
        .child(image(&logo_image(logo)))
}

fn logos(content: &ContentTables) -> Node {
    Node::element("section")
        .id(NavSection::Logos.anchor())
        .child(
            Node::element("div")
                .class("logo-grid")
                .children(content.logos.iter().map(logo_tile)),
        )
}

fn contact_link(link: &ContactLink) -> Node {
    let anchor = if link.href.starts_with("mailto:") {
        Node::element("a").attr("href", link.href.as_str())
    } else {
        external_link(&link.href)
    };
    anchor
        .class("contact-link")
        .attr("data-kind", contact_kind(link))
        .child(sr_only(&link.label))
}

fn contact_kind(link: &ContactLink) -> &'static str {
    match link.kind {
        ContactKind::GitHub => "github",
        ContactKind::LinkedIn => "linkedin",
        ContactKind::Email => "email",
    }
}

fn contact(content: &ContentTables) -> Node {
    Node::element("section")
        .id(NavSection::Contact.anchor())
        .child(Node::with_text("h2", content.copy.contact_heading.as_str()))
        .child(Node::with_text("p", content.copy.contact_blurb.as_str()))
        .child(
            Node::element("div")
                .class("contact-links")
                .children(content.contacts.iter().map(contact_link)),
        )
}

fn footer(content: &ContentTables, year: i32) -> Node {
    Node::element("footer").child(Node::with_text(
        "p",
        format!("© {} {}. All rights reserved.", year, content.copy.brand),
    ))
}
