//! Retained element model.
//!
//! A deliberately small stand-in for the browser DOM: elements carry a tag,
//! an optional id attribute, a class set, parent/child links and a computed
//! style map of the typed properties in [`crate::style`]. A [`Document`]
//! owns the root element (the open-marker class target) and the viewport
//! width used for right-anchored layout.
//!
//! Layout is a single calculation: [`Element::bounding_left`] resolves the
//! element's left edge from its inset properties plus any horizontal
//! translation. That is exactly what the widget's offset measurement needs
//! and nothing more.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::alloc::{HashMap, HashSet};
use crate::style::{Overflow, StyleProperty, StyleTable, StyleValue};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity of an element, stable for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

struct ElementInner {
    id: ElementId,
    tag: String,
    id_attr: RefCell<Option<String>>,
    classes: RefCell<HashSet<String>>,
    parent: RefCell<Weak<ElementInner>>,
    children: RefCell<Vec<Element>>,
    style: RefCell<HashMap<StyleProperty, StyleValue>>,
}

/// A cheaply-cloneable handle to a retained element.
///
/// Clones share the same underlying element; identity comparison goes
/// through [`Element::id`]. Single-threaded by design.
#[derive(Clone)]
pub struct Element {
    inner: Rc<ElementInner>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(ElementInner {
                id: ElementId(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed)),
                tag: tag.into(),
                id_attr: RefCell::new(None),
                classes: RefCell::new(HashSet::new()),
                parent: RefCell::new(Weak::new()),
                children: RefCell::new(Vec::new()),
                style: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Builder: set the id attribute.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        *self.inner.id_attr.borrow_mut() = Some(id.into());
        self
    }

    /// Builder: add a class.
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn id(&self) -> ElementId {
        self.inner.id
    }

    pub fn tag(&self) -> &str {
        &self.inner.tag
    }

    pub fn add_class(&self, class: impl Into<String>) {
        self.inner.classes.borrow_mut().insert(class.into());
    }

    pub fn remove_class(&self, class: &str) {
        self.inner.classes.borrow_mut().remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.classes.borrow().contains(class)
    }

    pub fn append_child(&self, child: &Element) {
        *child.inner.parent.borrow_mut() = Rc::downgrade(&self.inner);
        self.inner.children.borrow_mut().push(child.clone());
    }

    pub fn parent(&self) -> Option<Element> {
        self.inner.parent.borrow().upgrade().map(|inner| Element { inner })
    }

    /// Write a single style declaration.
    pub fn set_style(&self, property: StyleProperty, value: StyleValue) {
        self.inner.style.borrow_mut().insert(property, value);
    }

    /// Remove a style declaration, as assigning an empty value would.
    pub fn clear_style(&self, property: StyleProperty) {
        self.inner.style.borrow_mut().remove(&property);
    }

    pub fn style(&self, property: StyleProperty) -> Option<StyleValue> {
        self.inner.style.borrow().get(&property).copied()
    }

    /// Apply a style table declaration-by-declaration.
    pub fn apply(&self, table: &StyleTable) {
        let mut style = self.inner.style.borrow_mut();
        for (property, value) in table.iter() {
            style.insert(*property, *value);
        }
        tracing::trace!(element = %self, decls = table.iter().count(), "applied style table");
    }

    fn overflow(&self, axis: StyleProperty) -> Overflow {
        match self.style(axis) {
            Some(StyleValue::Overflow(o)) => o,
            _ => Overflow::Visible,
        }
    }

    pub fn overflow_x(&self) -> Overflow {
        self.overflow(StyleProperty::OverflowX)
    }

    pub fn overflow_y(&self) -> Overflow {
        self.overflow(StyleProperty::OverflowY)
    }

    /// Current horizontal translation, 0 when no transform is set.
    pub fn translate_x(&self) -> f32 {
        match self.style(StyleProperty::Transform) {
            Some(StyleValue::TranslateX(px)) => px,
            _ => 0.0,
        }
    }

    /// Resolved left edge of this element.
    ///
    /// Uses the `left` inset when present; otherwise a `right` inset is
    /// resolved against the viewport width and the declared width; elements
    /// with neither sit at 0. Any translateX shifts the result.
    pub fn bounding_left(&self, viewport_width: f32) -> f32 {
        let base = if let Some(StyleValue::Px(left)) = self.style(StyleProperty::Left) {
            left
        } else if let Some(StyleValue::Px(right)) = self.style(StyleProperty::Right) {
            let width = match self.style(StyleProperty::Width) {
                Some(StyleValue::Px(w)) => w,
                _ => 0.0,
            };
            viewport_width - width - right
        } else {
            0.0
        };
        base + self.translate_x()
    }

    /// Match against a selector list.
    ///
    /// Supports comma-separated compound simple selectors: optional tag or
    /// `*`, `#id` and `.class` parts (e.g. `input.no-swipe, #map`).
    /// Combinators are not supported.
    pub fn matches(&self, selector: &str) -> bool {
        selector
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .any(|s| self.matches_compound(s))
    }

    fn matches_compound(&self, selector: &str) -> bool {
        let mut chars = selector.chars().peekable();

        let mut tag = String::new();
        while let Some(&c) = chars.peek() {
            if c == '.' || c == '#' {
                break;
            }
            tag.push(c);
            chars.next();
        }
        if !tag.is_empty() && tag != "*" && tag != self.inner.tag {
            return false;
        }

        while let Some(marker) = chars.next() {
            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c == '.' || c == '#' {
                    break;
                }
                name.push(c);
                chars.next();
            }
            if name.is_empty() {
                return false;
            }
            let matched = match marker {
                '.' => self.has_class(&name),
                '#' => self.inner.id_attr.borrow().as_deref() == Some(name.as_str()),
                _ => false,
            };
            if !matched {
                return false;
            }
        }

        true
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.inner.id)
            .field("tag", &self.inner.tag)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.inner.tag)?;
        if let Some(id) = self.inner.id_attr.borrow().as_deref() {
            write!(f, "#{id}")?;
        }
        Ok(())
    }
}

/// Whether a touch that began on `elem` sits inside a horizontally
/// scrollable region.
///
/// Walks from `elem` up to (excluding) `root`. An ancestor traps the
/// gesture when its `overflow-x` is `auto`/`scroll`, or when it is
/// `visible` while `overflow-y` is not (a horizontally-panning column).
pub fn within_horizontal_scrollable(elem: &Element, root: &Element) -> bool {
    let mut current = Some(elem.clone());
    while let Some(e) = current {
        if e.id() == root.id() {
            return false;
        }
        let overflow_x = e.overflow_x();
        if overflow_x.scrolls()
            || (overflow_x == Overflow::Visible && e.overflow_y() != Overflow::Visible)
        {
            return true;
        }
        current = e.parent();
    }
    false
}

struct DocumentInner {
    root: Element,
    viewport_width: Cell<f32>,
}

/// The document a widget instance lives in: the root element plus the
/// viewport width used for right-anchored layout and activation regions.
#[derive(Clone)]
pub struct Document {
    inner: Rc<DocumentInner>,
}

impl Document {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            inner: Rc::new(DocumentInner {
                root: Element::new("html"),
                viewport_width: Cell::new(viewport_width),
            }),
        }
    }

    /// The document root; open-marker classes are toggled here.
    pub fn root(&self) -> &Element {
        &self.inner.root
    }

    pub fn viewport_width(&self) -> f32 {
        self.inner.viewport_width.get()
    }

    pub fn set_viewport_width(&self, width: f32) {
        self.inner.viewport_width.set(width);
    }

    /// Create a detached element; attach it with [`Element::append_child`].
    pub fn create_element(&self, tag: impl Into<String>) -> Element {
        Element::new(tag)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("viewport_width", &self.viewport_width())
            .finish_non_exhaustive()
    }
}
