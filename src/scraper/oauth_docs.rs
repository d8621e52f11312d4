use crate::error::CatalogueError;
use crate::models::{EndpointCatalogue, EndpointDescriptor, EndpointEntry, ScopeSection};
use crate::scraper::descriptor;
use ::scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

/// Scope sections sit two list levels below the table of contents.
const SCOPE_SECTION_SELECTOR: &str = "div.toc > ul > li > ul > li";
const ENDPOINT_LINK_SELECTOR: &str = "li > a";

/// Reads the OAuth documentation's table of contents into a catalogue.
pub struct OAuthDocsExtractor {
    sections: Selector,
    links: Selector,
}

impl OAuthDocsExtractor {
    pub fn new() -> Result<Self, CatalogueError> {
        Ok(Self {
            sections: parse_selector(SCOPE_SECTION_SELECTOR)?,
            links: parse_selector(ENDPOINT_LINK_SELECTOR)?,
        })
    }

    pub fn parse(page: &str) -> Html {
        Html::parse_document(page)
    }

    /// Every scope section node, in document order. An empty result means the
    /// page no longer has the expected layout.
    pub fn select_sections<'a>(&self, tree: &'a Html) -> Result<Vec<ElementRef<'a>>, CatalogueError> {
        let sections: Vec<_> = tree.select(&self.sections).collect();
        if sections.is_empty() {
            return Err(CatalogueError::NoScopeSections);
        }
        debug!(count = sections.len(), "found scope sections");
        Ok(sections)
    }

    /// Groups one section's endpoint links under its scope name.
    ///
    /// The first `li > a` match is the section's own heading link, so it names
    /// the scope and is left out of the endpoint list.
    pub fn scope_section(&self, index: usize, node: ElementRef<'_>) -> Result<ScopeSection, CatalogueError> {
        let lead = node
            .children()
            .filter_map(ElementRef::wrap)
            .find(|child| child.value().name() == "a")
            .ok_or(CatalogueError::MissingScopeLink { index })?;
        let scope_name = lead.text().collect::<String>();

        let mut section = ScopeSection::new(&scope_name, Vec::new());
        for link in node.select(&self.links).skip(1) {
            let href = link
                .value()
                .attr("href")
                .ok_or_else(|| CatalogueError::MissingHref {
                    scope: section.scope_name.clone(),
                })?;

            section.entries.push(EndpointEntry {
                href: href.to_string(),
                descriptor: EndpointDescriptor::new(descriptor::normalize(href)),
            });
        }

        debug!(scope = %section.scope_name, endpoints = section.entries.len(), "parsed scope section");
        Ok(section)
    }

    pub fn extract(&self, page: &str) -> Result<EndpointCatalogue, CatalogueError> {
        let tree = Self::parse(page);
        let sections = self
            .select_sections(&tree)?
            .into_iter()
            .enumerate()
            .map(|(index, node)| self.scope_section(index, node))
            .collect::<Result<Vec<_>, _>>()?;

        let catalogue = EndpointCatalogue::from_sections(sections);
        info!(
            scopes = catalogue.scope_count(),
            endpoints = catalogue.endpoint_count(),
            "extracted endpoint catalogue"
        );
        Ok(catalogue)
    }
}

fn parse_selector(selector: &str) -> Result<Selector, CatalogueError> {
    Selector::parse(selector).map_err(|_| CatalogueError::Selector(selector.to_string()))
}
