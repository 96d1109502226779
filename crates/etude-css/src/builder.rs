//! Fluent CSS selector construction.
//!
//! A [`SelectorBuilder`] accumulates the fragments of a compound selector
//! ([§ 4.1 Structure of a Selector](https://www.w3.org/TR/selectors-4/#structure))
//! and renders the canonical string form on demand. Construction enforces the
//! grammar's fixed fragment order (type, ID, class, attribute, pseudo-class,
//! pseudo-element) and the at-most-once rule for the singleton fragments,
//! rejecting a malformed chain at the offending call rather than producing an
//! invalid selector string.
//!
//! Two selectors are joined into a complex selector with [`combine`]
//! ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)), which
//! renders both operands eagerly and defers only the final join.

use strum_macros::Display;
use thiserror::Error;

/// The six fragment kinds of a compound selector, in their mandated order.
///
/// [§ 4.1 Structure of a Selector](https://www.w3.org/TR/selectors-4/#structure)
/// "A compound selector is a sequence of simple selectors... If it contains a
/// type selector or universal selector, that selector must come first in the
/// sequence."
///
/// The derived ordering (`Element < Id < Class < Attribute < PseudoClass <
/// PseudoElement`) is the contribution order the builder enforces: once a
/// fragment of some category has been contributed, no fragment of a strictly
/// earlier category may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// The element name, e.g. `div`. At most one per selector.
    #[strum(serialize = "element")]
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// Rendered as `#name`. At most one per selector.
    #[strum(serialize = "id")]
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// Rendered as `.name`. Repeatable.
    #[strum(serialize = "class")]
    Class,

    /// [§ 6.4 Attribute selector](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// Rendered as `[expr]`. Repeatable.
    #[strum(serialize = "attribute")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// Rendered as `:name`. Repeatable.
    #[strum(serialize = "pseudo-class")]
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// Rendered as `::name`. At most one per selector.
    #[strum(serialize = "pseudo-element")]
    PseudoElement,
}

/// A rejected fragment contribution.
///
/// Both variants signal a malformed construction chain, not bad user input:
/// the caller assembled fragments in an impossible shape. Neither is
/// recoverable by retrying; the builder that produced the error is gone
/// (moved into the failing call) and the chain is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A fragment of an earlier category arrived after a later-category
    /// fragment had already closed it.
    #[error(
        "selector parts should be arranged in the following order: \
         element, id, class, attribute, pseudo-class, pseudo-element \
         (got {attempted} after {reached})"
    )]
    OrderViolation {
        /// The category of the rejected fragment.
        attempted: Category,
        /// The highest category already contributed.
        reached: Category,
    },

    /// A singleton fragment (`element`, `id`, or `pseudo-element`) was
    /// contributed a second time.
    #[error(
        "element, id and pseudo-element should not occur more than one time \
         inside the selector ({0} was already set)"
    )]
    DuplicateSingleton(Category),
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// `Display` renders the combinator's own glyph. The descendant combinator
/// *is* whitespace per spec, so a combination joined around it carries a run
/// of spaces; the canonical form this builder produces keeps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// Whitespace: `A B`.
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// `A > B`.
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// `A + B`.
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// `A ~ B`.
    #[strum(serialize = "~")]
    SubsequentSibling,
}

/// Anything that can be rendered to its canonical selector string.
///
/// Rendering is terminal: it takes the value by move, so a built selector is
/// rendered exactly once. Clone first to render the same accumulation twice.
pub trait Render {
    /// Produce the canonical string form, consuming the value.
    #[must_use]
    fn render(self) -> String;
}

/// Accumulator for the fragments of one compound selector.
///
/// Start a chain from any fragment kind with the free functions ([`element`],
/// [`id`], [`class`], [`attr`], [`pseudo_class`], [`pseudo_element`]) or from
/// [`SelectorBuilder::new`], then extend it with the `with_*` methods. Each
/// method moves the builder and returns it inside `Ok`, so a chain reads:
///
/// ```
/// use etude_css::{Render, element};
///
/// # fn main() -> Result<(), etude_css::SelectorError> {
/// let selector = element("a").with_attribute("href$=\".png\"")?.with_pseudo_class("focus")?;
/// assert_eq!(selector.render(), "a[href$=\".png\"]:focus");
/// # Ok(())
/// # }
/// ```
///
/// A rejected contribution returns the error without the builder: the chain
/// that produced it cannot continue, which is exactly the contract: order
/// and cardinality violations are construction bugs, not runtime conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    /// Highest category contributed so far; the order-violation watermark.
    reached: Option<Category>,
}

impl SelectorBuilder {
    /// An empty accumulator with no fragments contributed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Contribute the type selector token.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if any later-category fragment is
    /// already present, [`SelectorError::DuplicateSingleton`] if the element
    /// was already set. Order is checked first: `element` after `id` reports
    /// the ordering problem even when re-setting `element` would also be a
    /// duplicate.
    pub fn with_element(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_order(Category::Element)?;
        if self.element.is_some() {
            return Err(SelectorError::DuplicateSingleton(Category::Element));
        }
        self.element = Some(name.into());
        self.reached = Some(Category::Element);
        Ok(self)
    }

    /// Contribute the ID selector token.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingleton`] if the ID was already set,
    /// [`SelectorError::OrderViolation`] if any later-category fragment is
    /// already present. Duplication is checked first: a second `id` reports
    /// the duplicate even when later fragments have already closed the
    /// category.
    pub fn with_id(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        if self.id.is_some() {
            return Err(SelectorError::DuplicateSingleton(Category::Id));
        }
        self.check_order(Category::Id)?;
        self.id = Some(value.into());
        self.reached = Some(Category::Id);
        Ok(self)
    }

    /// Append a class selector token. Repeatable; duplicates are kept and
    /// render in insertion order.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if an attribute, pseudo-class, or
    /// pseudo-element fragment is already present.
    pub fn with_class(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_order(Category::Class)?;
        self.classes.push(name.into());
        self.reached = Some(Category::Class);
        Ok(self)
    }

    /// Append an attribute selector expression, e.g. `href$=".png"` or a bare
    /// attribute name. The expression is wrapped in `[` `]` at render time and
    /// is otherwise taken verbatim.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-class or pseudo-element
    /// fragment is already present.
    pub fn with_attribute(mut self, expr: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_order(Category::Attribute)?;
        self.attributes.push(expr.into());
        self.reached = Some(Category::Attribute);
        Ok(self)
    }

    /// Append a pseudo-class token, functional notation included, e.g.
    /// `focus` or `nth-of-type(even)`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if the pseudo-element is already
    /// present.
    pub fn with_pseudo_class(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_order(Category::PseudoClass)?;
        self.pseudo_classes.push(name.into());
        self.reached = Some(Category::PseudoClass);
        Ok(self)
    }

    /// Contribute the pseudo-element token.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingleton`] if the pseudo-element was
    /// already set. The pseudo-element is the last category, so no order
    /// violation is possible here.
    pub fn with_pseudo_element(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        if self.pseudo_element.is_some() {
            return Err(SelectorError::DuplicateSingleton(Category::PseudoElement));
        }
        self.pseudo_element = Some(name.into());
        self.reached = Some(Category::PseudoElement);
        Ok(self)
    }

    /// Reject a contribution strictly below the watermark.
    ///
    /// Equal categories pass: repeatable fragments may pile up, and the
    /// singleton re-set case is the caller's duplicate check, not an order
    /// violation.
    fn check_order(&self, attempted: Category) -> Result<(), SelectorError> {
        match self.reached {
            Some(reached) if reached > attempted => {
                Err(SelectorError::OrderViolation { attempted, reached })
            }
            _ => Ok(()),
        }
    }
}

impl Render for SelectorBuilder {
    /// [§ 4.1 Structure of a Selector](https://www.w3.org/TR/selectors-4/#structure)
    ///
    /// Concatenate the present fragments in category order with each
    /// category's delimiter: bare element, `#id`, `.class`, `[attr]`,
    /// `:pseudo-class`, `::pseudo-element`. Absent categories contribute
    /// nothing; an empty builder renders the empty string.
    fn render(self) -> String {
        let mut out = String::new();
        if let Some(element) = &self.element {
            out.push_str(element);
        }
        if let Some(id) = &self.id {
            out.push('#');
            out.push_str(id);
        }
        for class in &self.classes {
            out.push('.');
            out.push_str(class);
        }
        for attribute in &self.attributes {
            out.push('[');
            out.push_str(attribute);
            out.push(']');
        }
        for pseudo_class in &self.pseudo_classes {
            out.push(':');
            out.push_str(pseudo_class);
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            out.push_str("::");
            out.push_str(pseudo_element);
        }
        out
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two rendered selectors joined by a combinator. Built with [`combine`];
/// the operands were rendered at combination time, so only the final join is
/// deferred to [`Render::render`]. A `Combination` is itself a valid operand
/// to a further [`combine`], which is how chains of more than two compound
/// selectors are expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    left: String,
    combinator: Combinator,
    right: String,
}

impl Render for Combination {
    /// Join as `left combinator right` with single spaces around the
    /// combinator's glyph. The descendant combinator renders as whitespace
    /// itself, giving the canonical three-space join for `A B`.
    fn render(self) -> String {
        format!("{} {} {}", self.left, self.combinator, self.right)
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// Join two selectors with a combinator. Both operands are rendered
/// immediately (they are consumed here, never reusable afterwards) and the
/// joined form is produced by [`Render::render`] on the result. Operands may
/// be builders or prior combinations in any mix:
///
/// ```
/// use etude_css::{Combinator, Render, combine, element};
///
/// # fn main() -> Result<(), etude_css::SelectorError> {
/// let pair = combine(
///     element("div").with_id("main")?,
///     Combinator::NextSibling,
///     element("table").with_id("data")?,
/// );
/// assert_eq!(pair.render(), "div#main + table#data");
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn combine(left: impl Render, combinator: Combinator, right: impl Render) -> Combination {
    Combination {
        left: left.render(),
        combinator,
        right: right.render(),
    }
}

/// Start a selector from a type selector token, e.g. `element("div")`.
#[must_use]
pub fn element(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder {
        element: Some(name.into()),
        reached: Some(Category::Element),
        ..SelectorBuilder::default()
    }
}

/// Start a selector from an ID token, e.g. `id("main")` for `#main`.
#[must_use]
pub fn id(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder {
        id: Some(value.into()),
        reached: Some(Category::Id),
        ..SelectorBuilder::default()
    }
}

/// Start a selector from a class token, e.g. `class("container")` for
/// `.container`.
#[must_use]
pub fn class(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder {
        classes: vec![name.into()],
        reached: Some(Category::Class),
        ..SelectorBuilder::default()
    }
}

/// Start a selector from an attribute expression, e.g. `attr("href")` for
/// `[href]`.
#[must_use]
pub fn attr(expr: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder {
        attributes: vec![expr.into()],
        reached: Some(Category::Attribute),
        ..SelectorBuilder::default()
    }
}

/// Start a selector from a pseudo-class token, e.g. `pseudo_class("hover")`
/// for `:hover`.
#[must_use]
pub fn pseudo_class(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder {
        pseudo_classes: vec![name.into()],
        reached: Some(Category::PseudoClass),
        ..SelectorBuilder::default()
    }
}

/// Start a selector from a pseudo-element token, e.g.
/// `pseudo_element("before")` for `::before`.
#[must_use]
pub fn pseudo_element(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder {
        pseudo_element: Some(name.into()),
        reached: Some(Category::PseudoElement),
        ..SelectorBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_watermark_ordering() {
        assert!(Category::Element < Category::Id);
        assert!(Category::Id < Category::Class);
        assert!(Category::Class < Category::Attribute);
        assert!(Category::Attribute < Category::PseudoClass);
        assert!(Category::PseudoClass < Category::PseudoElement);
    }

    #[test]
    fn test_combinator_glyphs() {
        assert_eq!(Combinator::Descendant.to_string(), " ");
        assert_eq!(Combinator::Child.to_string(), ">");
        assert_eq!(Combinator::NextSibling.to_string(), "+");
        assert_eq!(Combinator::SubsequentSibling.to_string(), "~");
    }

    #[test]
    fn test_category_names_in_error_text() {
        let err = SelectorError::OrderViolation {
            attempted: Category::Class,
            reached: Category::PseudoElement,
        };
        let text = err.to_string();
        assert!(text.contains("should be arranged in the following order"));
        assert!(text.contains("got class after pseudo-element"));
    }

    #[test]
    fn test_empty_builder_renders_empty_string() {
        assert_eq!(SelectorBuilder::new().render(), "");
    }
}
