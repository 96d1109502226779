//! CSS selector construction for the étude exercise collection.
//!
//! This crate is the write side of a selector engine: where a browser parses
//! selector text into structure, this builder accumulates structure and
//! renders the canonical selector string per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! # Scope
//!
//! This crate implements:
//! - **Fragment accumulation**: type, ID, class, attribute, pseudo-class,
//!   and pseudo-element fragments, contributed through a fluent chain
//! - **Construction-time validation**: the fixed fragment order and the
//!   at-most-once rule for singleton fragments, enforced at the offending
//!   call ([§ 4.1 Structure of a Selector](https://www.w3.org/TR/selectors-4/#structure))
//! - **Combination**: joining two rendered selectors with a combinator
//!   ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!
//! # Not Implemented
//!
//! - Selector *parsing* (the inverse direction)
//! - Selector matching against a document tree
//! - Specificity calculation

/// Fluent selector construction per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod builder;

// Re-exports for convenience
pub use builder::{
    Category, Combination, Combinator, Render, SelectorBuilder, SelectorError, attr, class,
    combine, element, id, pseudo_class, pseudo_element,
};
