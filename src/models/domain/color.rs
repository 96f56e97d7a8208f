use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct ColorPalette {
    #[validate(length(equal = 3), nested)]
    pub colors: Vec<ColorSwatch>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct ColorSwatch {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub css_code: String,
    pub description: String,
}
