pub mod prompt;
pub mod validator;

pub use prompt::Prompter;
pub use validator::{
    validate_capacity, validate_color, validate_float_bounded, validate_new_plate,
    validate_number_bounded, validate_plate_search,
};
