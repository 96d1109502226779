//! Integration tests for CSS selector construction.

use etude_css::{
    Category, Combinator, Render, SelectorBuilder, SelectorError, attr, class, combine, element,
    id, pseudo_class, pseudo_element,
};

// Single-category rendering
// [§ 4.1 Structure of a Selector](https://www.w3.org/TR/selectors-4/#structure)

#[test]
fn test_element_alone() {
    assert_eq!(element("a").render(), "a");
}

#[test]
fn test_id_alone() {
    assert_eq!(id("main").render(), "#main");
}

#[test]
fn test_class_alone() {
    assert_eq!(class("container").render(), ".container");
}

#[test]
fn test_attribute_alone() {
    assert_eq!(attr("href").render(), "[href]");
}

#[test]
fn test_pseudo_class_alone() {
    assert_eq!(pseudo_class("hover").render(), ":hover");
}

#[test]
fn test_pseudo_element_alone() {
    assert_eq!(pseudo_element("before").render(), "::before");
}

// Chained rendering in category order

#[test]
fn test_id_with_repeated_classes() -> Result<(), SelectorError> {
    let selector = id("main").with_class("container")?.with_class("editable")?;
    assert_eq!(selector.render(), "#main.container.editable");
    Ok(())
}

#[test]
fn test_element_attribute_pseudo_class() -> Result<(), SelectorError> {
    let selector = element("a")
        .with_attribute("href$=\".png\"")?
        .with_pseudo_class("focus")?;
    assert_eq!(selector.render(), "a[href$=\".png\"]:focus");
    Ok(())
}

#[test]
fn test_all_six_categories() -> Result<(), SelectorError> {
    let selector = element("input")
        .with_id("email")?
        .with_class("form-control")?
        .with_attribute("type=email")?
        .with_pseudo_class("focus")?
        .with_pseudo_element("placeholder")?;
    assert_eq!(
        selector.render(),
        "input#email.form-control[type=email]:focus::placeholder"
    );
    Ok(())
}

#[test]
fn test_chain_started_from_plain_builder() -> Result<(), SelectorError> {
    let selector = SelectorBuilder::new()
        .with_class("nav")?
        .with_pseudo_class("first-child")?;
    assert_eq!(selector.render(), ".nav:first-child");
    Ok(())
}

// Repeatable categories accumulate without de-duplication

#[test]
fn test_duplicate_classes_are_kept_in_insertion_order() -> Result<(), SelectorError> {
    let selector = class("a").with_class("a")?.with_class("b")?;
    assert_eq!(selector.render(), ".a.a.b");
    Ok(())
}

#[test]
fn test_repeated_attributes_and_pseudo_classes() -> Result<(), SelectorError> {
    let selector = attr("href")
        .with_attribute("target=_blank")?
        .with_pseudo_class("visited")?
        .with_pseudo_class("hover")?;
    assert_eq!(selector.render(), "[href][target=_blank]:visited:hover");
    Ok(())
}

// Duplicate singleton rejection

#[test]
fn test_second_element_is_a_duplicate() {
    let result = element("a").with_element("b");
    assert_eq!(
        result,
        Err(SelectorError::DuplicateSingleton(Category::Element))
    );
}

#[test]
fn test_second_id_is_a_duplicate_even_after_later_fragments() {
    // The duplicate wins over the order violation for `id`.
    let result = element("div")
        .with_id("main")
        .and_then(|b| b.with_class("x"))
        .and_then(|b| b.with_id("y"));
    assert_eq!(result, Err(SelectorError::DuplicateSingleton(Category::Id)));
}

#[test]
fn test_second_pseudo_element_is_a_duplicate() {
    let result = pseudo_element("before").with_pseudo_element("after");
    assert_eq!(
        result,
        Err(SelectorError::DuplicateSingleton(Category::PseudoElement))
    );
}

// Order violation rejection

#[test]
fn test_element_after_id_is_an_order_violation() {
    // Re-contributing `element` after `id` reports the ordering problem, not
    // the duplicate.
    let result = element("a").with_id("x").and_then(|b| b.with_element("b"));
    assert_eq!(
        result,
        Err(SelectorError::OrderViolation {
            attempted: Category::Element,
            reached: Category::Id,
        })
    );
}

#[test]
fn test_id_after_class_is_an_order_violation() {
    let result = class("container").with_id("main");
    assert_eq!(
        result,
        Err(SelectorError::OrderViolation {
            attempted: Category::Id,
            reached: Category::Class,
        })
    );
}

#[test]
fn test_class_after_attribute_is_an_order_violation() {
    let result = attr("href").with_class("x");
    assert_eq!(
        result,
        Err(SelectorError::OrderViolation {
            attempted: Category::Class,
            reached: Category::Attribute,
        })
    );
}

#[test]
fn test_attribute_after_pseudo_class_is_an_order_violation() {
    let result = pseudo_class("hover").with_attribute("href");
    assert_eq!(
        result,
        Err(SelectorError::OrderViolation {
            attempted: Category::Attribute,
            reached: Category::PseudoClass,
        })
    );
}

#[test]
fn test_pseudo_class_after_pseudo_element_is_an_order_violation() {
    let result = pseudo_element("first-line").with_pseudo_class("hover");
    assert_eq!(
        result,
        Err(SelectorError::OrderViolation {
            attempted: Category::PseudoClass,
            reached: Category::PseudoElement,
        })
    );
}

#[test]
fn test_element_after_pseudo_element_is_an_order_violation() {
    let result = pseudo_element("before").with_element("div");
    assert_eq!(
        result,
        Err(SelectorError::OrderViolation {
            attempted: Category::Element,
            reached: Category::PseudoElement,
        })
    );
}

// Combination
// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

#[test]
fn test_combine_next_sibling() -> Result<(), SelectorError> {
    let pair = combine(
        element("div").with_id("main")?,
        Combinator::NextSibling,
        element("table").with_id("data")?,
    );
    assert_eq!(pair.render(), "div#main + table#data");
    Ok(())
}

#[test]
fn test_combine_child() -> Result<(), SelectorError> {
    let pair = combine(
        element("ul").with_class("nav")?,
        Combinator::Child,
        element("li"),
    );
    assert_eq!(pair.render(), "ul.nav > li");
    Ok(())
}

#[test]
fn test_combine_descendant_renders_whitespace_glyph() {
    // The descendant combinator is itself whitespace, so the join carries
    // three spaces.
    let pair = combine(element("div"), Combinator::Descendant, element("span"));
    assert_eq!(pair.render(), "div   span");
}

#[test]
fn test_nested_combinations() -> Result<(), SelectorError> {
    let selector = combine(
        element("div")
            .with_id("main")?
            .with_class("container")?
            .with_class("draggable")?,
        Combinator::NextSibling,
        combine(
            element("table").with_id("data")?,
            Combinator::SubsequentSibling,
            combine(
                element("tr").with_pseudo_class("nth-of-type(even)")?,
                Combinator::Descendant,
                element("td").with_pseudo_class("nth-of-type(even)")?,
            ),
        ),
    );
    assert_eq!(
        selector.render(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
    Ok(())
}

// Rendering is side-effect free

#[test]
fn test_clones_of_one_accumulation_render_identically() -> Result<(), SelectorError> {
    let builder = element("a").with_id("x")?.with_class("y")?;
    assert_eq!(builder.clone().render(), builder.render());
    Ok(())
}

#[test]
fn test_failed_call_leaves_no_partial_rendering_surprises() {
    // The failing call consumes the builder, so the only observable outcome
    // is the error itself.
    let err = class("x").with_id("main").unwrap_err();
    assert!(matches!(err, SelectorError::OrderViolation { .. }));
    assert!(err.to_string().contains("got id after class"));
}
