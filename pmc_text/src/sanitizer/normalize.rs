use super::replace_capped;
use crate::constants::{ENTITY_REFERENCE, LINE_BREAK};

pub fn normalize(text: String) -> String {
    let text = replace_capped(&ENTITY_REFERENCE, text);
    replace_capped(&LINE_BREAK, text)
}
