use crate::error::AppError;

/// The part of a page the renderers are allowed to touch.
///
/// Renderers never look elements up on their own: the ids and classes they
/// write to are passed in explicitly, and the host decides how a write lands
/// (an in-memory page for static builds, the live DOM in the browser).
pub trait PageHost {
    /// Whether an element with `id` exists.
    fn contains(&self, id: &str) -> bool;

    /// Fail with [`AppError::MissingElement`] unless every id exists.
    fn require(&self, ids: &[&str]) -> Result<(), AppError> {
        match ids.iter().find(|id| !self.contains(id)) {
            Some(id) => Err(AppError::MissingElement(format!("#{id}"))),
            None => Ok(()),
        }
    }

    /// Replace the children of the element with `id` by `html`.
    fn replace_html(&mut self, id: &str, html: &str) -> Result<(), AppError>;

    /// Replace the content of the element with `id` by escaped `text`.
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), AppError>;

    /// Set the text of every element carrying `class`. Returns how many
    /// elements were updated.
    fn set_text_by_class(&mut self, class: &str, text: &str) -> usize;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Text(String),
    Html(String),
}

/// A single element of a [`StaticPage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    content: Content,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            content: Content::Text(String::new()),
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.content = Content::Text(text.to_string());
        self
    }

    pub fn html(mut self, html: &str) -> Self {
        self.content = Content::Html(html.to_string());
        self
    }

    /// The element's content as HTML (text content is escaped).
    pub fn inner_html(&self) -> String {
        match &self.content {
            Content::Text(text) => tera::escape_html(text),
            Content::Html(html) => html.clone(),
        }
    }

    /// The element's text content, if it was last set as text.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::Html(_) => None,
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn to_html(&self) -> String {
        let mut attrs = String::new();
        if let Some(id) = &self.id {
            attrs.push_str(&format!(" id=\"{}\"", tera::escape_html(id)));
        }
        if !self.classes.is_empty() {
            attrs.push_str(&format!(
                " class=\"{}\"",
                tera::escape_html(&self.classes.join(" "))
            ));
        }
        format!("<{tag}{attrs}>{}</{tag}>", self.inner_html(), tag = self.tag)
    }
}

/// In-memory page made of a flat, ordered list of host elements.
///
/// Used by the CLI to produce static HTML and by tests to observe exactly
/// what a renderer wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPage {
    title: String,
    stylesheets: Vec<String>,
    scripts: Vec<String>,
    elements: Vec<Element>,
}

impl StaticPage {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            stylesheets: Vec::new(),
            scripts: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Link a stylesheet from the document head.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.stylesheets.push(href.to_string());
        self
    }

    /// Append an inline script after the body's elements. `source` is
    /// emitted as is.
    pub fn with_script(mut self, source: &str) -> Self {
        self.scripts.push(source.to_string());
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id.as_deref() == Some(id))
    }

    pub fn elements_with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements.iter().filter(move |e| e.has_class(class))
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element, AppError> {
        self.elements
            .iter_mut()
            .find(|e| e.id.as_deref() == Some(id))
            .ok_or_else(|| AppError::MissingElement(format!("#{id}")))
    }

    /// Serialize the page as a standalone HTML document.
    pub fn to_html(&self) -> String {
        let mut head = vec![
            "<meta charset=\"utf-8\">".to_string(),
            format!("<title>{}</title>", tera::escape_html(&self.title)),
        ];
        head.extend(self.stylesheets.iter().map(|href| {
            format!("<link rel=\"stylesheet\" href=\"{}\">", tera::escape_html(href))
        }));

        let mut body: Vec<String> = self.elements.iter().map(Element::to_html).collect();
        body.extend(self.scripts.iter().map(|source| format!("<script>\n{source}</script>")));

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{}\n</head>\n<body>\n{}\n</body>\n</html>\n",
            head.join("\n"),
            body.join("\n")
        )
    }
}

impl PageHost for StaticPage {
    fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn replace_html(&mut self, id: &str, html: &str) -> Result<(), AppError> {
        self.element_mut(id)?.content = Content::Html(html.to_string());
        Ok(())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), AppError> {
        self.element_mut(id)?.content = Content::Text(text.to_string());
        Ok(())
    }

    fn set_text_by_class(&mut self, class: &str, text: &str) -> usize {
        let mut updated = 0;
        for element in self.elements.iter_mut().filter(|e| e.has_class(class)) {
            element.content = Content::Text(text.to_string());
            updated += 1;
        }
        updated
    }
}
