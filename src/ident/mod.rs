//! Identifier and literal formatting for the generated script.

pub mod keywords;
pub mod literal;
pub mod sanitize;

pub use keywords::is_keyword;
pub use literal::*;
pub use sanitize::{
    str_to_class_id, str_to_const_id, str_to_func_id, str_to_mod_id, str_to_var_id,
};
