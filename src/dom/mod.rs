//! Minimal host document: an element arena with attributes, inline styles and custom-property
//! inheritance.

pub(crate) mod document;
pub(crate) mod html;
pub(crate) mod scope;
pub(crate) mod style;
