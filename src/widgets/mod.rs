// Custom widgets layered on ratatui primitives:
// - FieldView: a profile field shown as display text or as an input control

pub mod field;

pub use field::FieldView;
