pub mod content;
pub mod form;
pub mod layout;
pub mod model;
pub mod nav;
pub mod svg;
pub mod views;
